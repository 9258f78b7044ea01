use thiserror::Error;

/// Failures while reading startup configuration. Always fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("Required environment variable {setting_name} is missing")]
    MissingRequiredSetting { setting_name: String },

    #[error("Setting '{setting_name}' has invalid format. Expected: {expected}, got: {actual}")]
    InvalidFormat {
        setting_name: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid setting '{setting_name}': {reason}")]
    InvalidSetting { setting_name: String, reason: String },
}

impl BootstrapError {
    pub fn missing(setting_name: &str) -> Self {
        Self::MissingRequiredSetting {
            setting_name: setting_name.to_string(),
        }
    }
}
