use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a candidate Steuer-ID fails validation.
///
/// Each variant identifies exactly one root cause; [`validate`] reports
/// the first failing check and nothing after it. The enum is deliberately
/// exhaustive — the rule set is fixed by the ELSTER handbook, so callers
/// can match on every variant.
///
/// [`validate`]: crate::SteuerIdValidator::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SteuerIdError {
    /// The candidate is empty.
    #[error("Steuer-ID must not be empty")]
    EmptyInput,

    /// The candidate is not exactly 11 characters long.
    #[error("Steuer-ID must be exactly 11 digits long")]
    InvalidLength,

    /// The candidate contains a character that is not an ASCII digit.
    #[error("Steuer-ID must consist of digits only")]
    OnlyDigitsAllowed,

    /// Production mode rejects test Steuer-IDs (leading digit 0).
    #[error("test Steuer-IDs (leading 0) are not allowed in production")]
    TestIdNotAllowed,

    /// Not exactly one digit value repeats within the first 10 digits.
    #[error("exactly one digit must repeat within the first 10 digits")]
    OnlyOneRepeatedDigit,

    /// The repeated digit occurs more often than 3 times.
    #[error("the repeated digit must occur 2 or 3 times")]
    InvalidDigitRepetition,

    /// A digit repeated 3 times forms a consecutive run.
    #[error("the repeated digit must not occur 3 times in a row")]
    InvalidRepeatedDigitChain,

    /// The final digit does not match the ELSTER check digit.
    #[error("checksum digit does not match")]
    InvalidChecksumDigit,
}
