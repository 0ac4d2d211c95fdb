//! # steuerid
//!
//! Structural validation of German Steuer-IDs — the 11-digit national
//! taxpayer identification number — against the documented structure,
//! digit repetition, and ELSTER check digit rules.
//!
//! Validation is fully offline and answers "is this a well-formed
//! Steuer-ID", never whether the number is actually assigned to a person.
//!
//! ## Quick Start
//!
//! ```rust
//! use steuerid::{SteuerIdError, SteuerIdValidator};
//!
//! let validator = SteuerIdValidator::default();
//!
//! assert!(validator.validate("65929970489").is_ok());
//! assert_eq!(validator.validate("1234"), Err(SteuerIdError::InvalidLength));
//! assert_eq!(
//!     validator.validate("21113456789"),
//!     Err(SteuerIdError::InvalidRepeatedDigitChain),
//! );
//! ```
//!
//! Production deployments reject test Steuer-IDs (leading digit 0),
//! either via an explicit config or the `STEUERID_PRODUCTION`
//! environment variable:
//!
//! ```rust
//! use steuerid::{SteuerIdError, SteuerIdValidator, ValidatorConfig};
//!
//! let validator = SteuerIdValidator::new(ValidatorConfig::production());
//! assert_eq!(
//!     validator.validate("02476291358"),
//!     Err(SteuerIdError::TestIdNotAllowed),
//! );
//! ```

mod checksum;
mod config;
mod digits;
mod error;
mod repetition;
mod validator;

pub use checksum::checksum_digit;
pub use config::{STEUERID_PRODUCTION_ENV, ValidatorConfig};
pub use digits::STEUER_ID_LENGTH;
pub use error::SteuerIdError;
pub use validator::{SteuerIdValidator, validate_steuer_id};
