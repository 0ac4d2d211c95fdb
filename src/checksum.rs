use crate::digits::{Digits, STEUER_ID_LENGTH};
use crate::error::SteuerIdError;

/// Compute the ELSTER check digit for a 10-digit serial part.
///
/// The input must be exactly the first ten digits of a Steuer-ID.
/// Useful for generating well-formed fixtures:
///
/// ```rust
/// use steuerid::checksum_digit;
///
/// assert_eq!(checksum_digit("0247629135"), Ok(8));
/// ```
pub fn checksum_digit(serial: &str) -> Result<u8, SteuerIdError> {
    if serial.is_empty() {
        return Err(SteuerIdError::EmptyInput);
    }
    if serial.chars().count() != STEUER_ID_LENGTH - 1 {
        return Err(SteuerIdError::InvalidLength);
    }

    let mut digits = [0u8; STEUER_ID_LENGTH - 1];
    for (slot, c) in digits.iter_mut().zip(serial.chars()) {
        if !c.is_ascii_digit() {
            return Err(SteuerIdError::OnlyDigitsAllowed);
        }
        *slot = c as u8 - b'0';
    }
    Ok(compute(&digits))
}

/// The iterative mod-10 / mod-11 procedure from the ELSTER handbook.
///
/// Two substitutions are mandatory: an intermediate sum of 0 counts as
/// 10, and a final value of 10 maps to check digit 0.
pub(crate) fn compute(serial: &[u8]) -> u8 {
    let mut product = 10u32;
    for &d in serial {
        let mut sum = (u32::from(d) + product) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (2 * sum) % 11;
    }

    let check = 11 - product;
    if check == 10 { 0 } else { check as u8 }
}

/// Compare the computed check digit against the candidate's final digit.
pub(crate) fn check_checksum(digits: &Digits) -> Result<(), SteuerIdError> {
    if compute(digits.serial()) != digits.check_digit() {
        return Err(SteuerIdError::InvalidChecksumDigit);
    }
    Ok(())
}
