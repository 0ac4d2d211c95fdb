use crate::error::SteuerIdError;

/// Length of a Steuer-ID in digits, check digit included.
pub const STEUER_ID_LENGTH: usize = 11;

/// A structurally validated Steuer-ID: exactly 11 ASCII digits.
///
/// The only way to obtain one is [`Digits::parse`], so the later pipeline
/// stages can index positions freely without re-checking length or
/// character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Digits([u8; STEUER_ID_LENGTH]);

impl Digits {
    /// Parse a candidate into digit values.
    ///
    /// Sub-checks run in a fixed order: empty input, then length, then
    /// character class. A too-short alphabetic string therefore reports
    /// [`SteuerIdError::InvalidLength`], not `OnlyDigitsAllowed`.
    pub(crate) fn parse(candidate: &str) -> Result<Self, SteuerIdError> {
        if candidate.is_empty() {
            return Err(SteuerIdError::EmptyInput);
        }
        if candidate.chars().count() != STEUER_ID_LENGTH {
            return Err(SteuerIdError::InvalidLength);
        }

        let mut digits = [0u8; STEUER_ID_LENGTH];
        for (slot, c) in digits.iter_mut().zip(candidate.chars()) {
            if !c.is_ascii_digit() {
                return Err(SteuerIdError::OnlyDigitsAllowed);
            }
            *slot = c as u8 - b'0';
        }
        Ok(Self(digits))
    }

    /// The first ten digits (the serial part, check digit excluded).
    pub(crate) fn serial(&self) -> &[u8] {
        &self.0[..STEUER_ID_LENGTH - 1]
    }

    /// The leading digit.
    pub(crate) fn leading(&self) -> u8 {
        self.0[0]
    }

    /// The final digit, claimed by the candidate as its check digit.
    pub(crate) fn check_digit(&self) -> u8 {
        self.0[STEUER_ID_LENGTH - 1]
    }

    /// All eleven digit values, check digit included.
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.0
    }
}
