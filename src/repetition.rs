use crate::digits::Digits;
use crate::error::SteuerIdError;

/// Enforce the digit repetition rules on the serial part.
///
/// Exactly one digit value must occur more than once among the first ten
/// digits, and it may occur at most 3 times. A digit occurring 3 times
/// must not form a consecutive run; the run scan covers all eleven
/// digits, so a check digit extending a double into a triple run also
/// rejects the candidate.
pub(crate) fn check_repetition(digits: &Digits) -> Result<(), SteuerIdError> {
    let mut counts = [0u8; 10];
    for &d in digits.serial() {
        counts[d as usize] += 1;
    }

    let mut repeated = None;
    for (value, &count) in counts.iter().enumerate() {
        if count > 1 {
            if repeated.is_some() {
                return Err(SteuerIdError::OnlyOneRepeatedDigit);
            }
            repeated = Some((value as u8, count));
        }
    }

    let Some((value, count)) = repeated else {
        return Err(SteuerIdError::OnlyOneRepeatedDigit);
    };

    if !(2..=3).contains(&count) {
        return Err(SteuerIdError::InvalidDigitRepetition);
    }

    if count == 3 && digits.as_slice().windows(3).any(|run| run == [value; 3]) {
        return Err(SteuerIdError::InvalidRepeatedDigitChain);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(candidate: &str) -> Digits {
        Digits::parse(candidate).unwrap()
    }

    #[test]
    fn one_digit_twice_accepted() {
        assert!(check_repetition(&digits("12345678920")).is_ok());
    }

    #[test]
    fn one_digit_thrice_accepted_when_spread() {
        assert!(check_repetition(&digits("12134567814")).is_ok());
    }

    #[test]
    fn all_distinct_rejected() {
        assert_eq!(
            check_repetition(&digits("12345678905")),
            Err(SteuerIdError::OnlyOneRepeatedDigit)
        );
    }

    #[test]
    fn two_repeated_digits_rejected() {
        assert_eq!(
            check_repetition(&digits("11223456789")),
            Err(SteuerIdError::OnlyOneRepeatedDigit)
        );
    }

    #[test]
    fn four_occurrences_rejected() {
        assert_eq!(
            check_repetition(&digits("11113456789")),
            Err(SteuerIdError::InvalidDigitRepetition)
        );
    }

    #[test]
    fn consecutive_triple_rejected() {
        assert_eq!(
            check_repetition(&digits("21113456789")),
            Err(SteuerIdError::InvalidRepeatedDigitChain)
        );
    }

    #[test]
    fn triple_completed_by_check_digit_rejected() {
        // The serial "1234567811" holds no consecutive triple, but the
        // check digit position extends the trailing "11" into one.
        assert!(check_repetition(&digits("12345678114")).is_ok());
        assert_eq!(
            check_repetition(&digits("12345678111")),
            Err(SteuerIdError::InvalidRepeatedDigitChain)
        );
    }
}
