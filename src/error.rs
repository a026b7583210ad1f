use std::path::PathBuf;
use thiserror::Error;

/// Failure to read one of the line-delimited reference lists.
#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("Failed to read reference list '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Everything that can stop the service before it starts serving requests.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reference data error: {0}")]
    ReferenceData(#[from] ReferenceDataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_data_error_names_path() {
        let err = ReferenceDataError::Read {
            path: PathBuf::from("data/missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read reference list 'data/missing.txt': not found"
        );
    }

    #[test]
    fn test_startup_error_wraps_config_error() {
        let err: StartupError = ConfigError::InvalidValue {
            key: "PORT",
            value: "eighty".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value 'eighty' for PORT"
        );
    }
}
