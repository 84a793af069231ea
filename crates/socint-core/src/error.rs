use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid {what}: '{value}'")]
    UnknownVariant { what: &'static str, value: String },
}

impl CoreError {
    pub(crate) fn variant(what: &'static str, value: &str) -> Self {
        CoreError::UnknownVariant {
            what,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
