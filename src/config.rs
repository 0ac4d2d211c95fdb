use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`ValidatorConfig::from_env`].
pub const STEUERID_PRODUCTION_ENV: &str = "STEUERID_PRODUCTION";

/// Validator configuration.
///
/// In production mode, test Steuer-IDs (leading digit 0) are rejected.
/// The environment is read only in [`from_env`](Self::from_env); the
/// validation pipeline itself never touches process state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Reject test Steuer-IDs (leading digit 0).
    pub production: bool,
}

impl ValidatorConfig {
    /// Config with production mode enabled.
    pub fn production() -> Self {
        Self { production: true }
    }

    /// Read the production flag from `STEUERID_PRODUCTION`.
    ///
    /// An absent or falsy value ("", "0", "false", "no", "off", any
    /// case) leaves production mode off; any other value enables it.
    pub fn from_env() -> Self {
        let production = env::var(STEUERID_PRODUCTION_ENV)
            .map(|v| is_truthy(&v))
            .unwrap_or(false);
        Self { production }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
