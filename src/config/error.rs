use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid source path '{path}': {reason}")]
    InvalidSourcePath { path: PathBuf, reason: String },

    #[error("Duplicate source path: {path:?}")]
    DuplicateSource { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = ConfigError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let msg = format!("{err}");
        assert!(msg.contains("Failed to read config file"));
    }

    #[test]
    fn test_error_display_invalid_source() {
        let err = ConfigError::InvalidSourcePath {
            path: PathBuf::from("/mnt/tv"),
            reason: "not a directory".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Invalid source path"));
        assert!(msg.contains("/mnt/tv"));
        assert!(msg.contains("not a directory"));
    }

    #[test]
    fn test_error_display_duplicate_source() {
        let err = ConfigError::DuplicateSource {
            path: PathBuf::from("/mnt/tv"),
        };
        assert!(format!("{err}").contains("Duplicate source path"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }
}
