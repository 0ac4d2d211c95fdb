use crate::checksum::check_checksum;
use crate::config::ValidatorConfig;
use crate::digits::Digits;
use crate::error::SteuerIdError;
use crate::repetition::check_repetition;

/// Stateless Steuer-ID validator.
///
/// Holds only its [`ValidatorConfig`], so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteuerIdValidator {
    config: ValidatorConfig,
}

impl SteuerIdValidator {
    /// Validator with an explicit config.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validator configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(ValidatorConfig::from_env())
    }

    /// Validate a candidate Steuer-ID.
    ///
    /// Runs the structural checks, the test-ID gate, the repetition
    /// rules and the ELSTER checksum in that order; the first failing
    /// stage determines the returned error.
    pub fn validate(&self, candidate: &str) -> Result<(), SteuerIdError> {
        let digits = Digits::parse(candidate)?;

        // A leading 0 marks a test Steuer-ID, reserved outside production.
        if self.config.production && digits.leading() == 0 {
            return Err(SteuerIdError::TestIdNotAllowed);
        }

        check_repetition(&digits)?;
        check_checksum(&digits)?;
        Ok(())
    }

    /// `true` when `candidate` passes every check.
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.validate(candidate).is_ok()
    }
}

/// Validate with the default (non-production) config.
pub fn validate_steuer_id(candidate: &str) -> Result<(), SteuerIdError> {
    SteuerIdValidator::default().validate(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_id_passes_all_stages() {
        assert_eq!(validate_steuer_id("12345678920"), Ok(()));
    }

    #[test]
    fn default_config_allows_test_ids() {
        assert_eq!(validate_steuer_id("02476291358"), Ok(()));
    }

    #[test]
    fn production_rejects_test_ids() {
        let validator = SteuerIdValidator::new(ValidatorConfig::production());
        assert_eq!(
            validator.validate("02476291358"),
            Err(SteuerIdError::TestIdNotAllowed)
        );
    }

    #[test]
    fn gate_runs_before_later_stages() {
        // "01234567899" would also fail the checksum stage, but in
        // production mode the gate fires first.
        let validator = SteuerIdValidator::new(ValidatorConfig::production());
        assert_eq!(
            validator.validate("01234567899"),
            Err(SteuerIdError::TestIdNotAllowed)
        );
    }

    #[test]
    fn gate_requires_structural_validity() {
        // Structure is checked before the gate even in production mode.
        let validator = SteuerIdValidator::new(ValidatorConfig::production());
        assert_eq!(
            validator.validate("0"),
            Err(SteuerIdError::InvalidLength)
        );
    }

    #[test]
    fn is_valid_mirrors_validate() {
        let validator = SteuerIdValidator::default();
        assert!(validator.is_valid("12345678920"));
        assert!(!validator.is_valid("12345678921"));
    }
}
