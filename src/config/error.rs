//! Failures while reading or writing `config.yml`.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not locate a home directory for the default configuration")]
    HomeDirectoryNotFound,

    /// `save` called before `load` picked a file
    #[error("Configuration has not been loaded from disk")]
    NotLoaded,

    #[error("Could not create configuration directory {path}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but is not a valid configuration
    #[error("Malformed configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Could not encode configuration: {0}")]
    Encode(#[from] serde_yaml::Error),

    /// `log_level` is not one of off, error, warn, info, debug, trace
    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_failures_keep_their_cause() {
        let error = ConfigError::Read {
            path: PathBuf::from("/etc/mailmyballot/config.yml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("/etc/mailmyballot/config.yml"));
        assert_eq!(error.source().map(|e| e.to_string()), Some("denied".to_string()));
    }

    #[test]
    fn parse_failure_names_file_and_cause() {
        let source = serde_yaml::from_str::<Vec<String>>("[nope").unwrap_err();
        let error = ConfigError::Parse {
            path: PathBuf::from("config.yml"),
            source,
        };
        let message = error.to_string();
        assert!(message.starts_with("Malformed configuration in config.yml: "));
        assert!(error.source().is_some());
    }

    #[test]
    fn invalid_log_level_quotes_value() {
        assert_eq!(
            ConfigError::InvalidLogLevel("chatty".to_string()).to_string(),
            "Unknown log level 'chatty'"
        );
    }
}
