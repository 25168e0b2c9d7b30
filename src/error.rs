//! Error types for moji
//!
//! Only the I/O boundary (reading the dataset or the config file) can fail.
//! Lookups, replacement and search are total and report absence with `Option`.

use thiserror::Error;

/// Errors that can occur while loading data into moji
#[derive(Debug, Error)]
pub enum MojiError {
    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset document is not a JSON array
    #[error("Dataset parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type alias for moji operations
pub type MojiResult<T> = Result<T, MojiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts() {
        let err: MojiError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, MojiError::Json(_)));
        assert!(err.to_string().starts_with("Dataset parse error"));
    }

    #[test]
    fn test_config_message() {
        let err = MojiError::Config("bad pattern".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad pattern");
    }
}
