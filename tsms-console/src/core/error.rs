use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing config value: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("Work directory error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        let details_key = match &err {
            ConfigError::Missing(key) | ConfigError::Invalid { key, .. } => Some(*key),
            ConfigError::Io(_) => None,
        };
        let app = AppError::with_message(ErrorCode::ConfigError, err.to_string());
        match details_key {
            Some(key) => app.with_detail("key", key),
            None => app,
        }
    }
}

/// Result type for configuration and environment setup
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_to_app_error() {
        let err: AppError = ConfigError::Missing("WORK_DIR").into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.message, "Missing config value: WORK_DIR");
        assert!(err.details.is_some());
    }
}
