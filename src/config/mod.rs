//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! service endpoints, the pre-filled address, failure policy and log level.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use crate::resolution::FailurePolicy;
use crate::state::DEFAULT_ADDRESS;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/mailmyballot";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub geocoder_url: String,
    pub backend_url: String,
    pub user_agent: String,
    pub country_codes: String,
    pub default_address: String,
    pub clear_address_on_failure: bool,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_geocoder_url")]
    geocoder_url: String,
    #[serde(default = "default_backend_url")]
    backend_url: String,
    #[serde(default = "default_user_agent")]
    user_agent: String,
    #[serde(default = "default_country_codes")]
    country_codes: String,
    #[serde(default = "default_address")]
    default_address: String,
    #[serde(default)]
    clear_address_on_failure: bool,
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_backend_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_user_agent() -> String {
    format!("mailmyballot-tui/{}", env!("CARGO_PKG_VERSION"))
}

fn default_country_codes() -> String {
    "us".to_string()
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl From<FileSpec> for Config {
    fn from(data: FileSpec) -> Self {
        Config {
            geocoder_url: data.geocoder_url,
            backend_url: data.backend_url,
            user_agent: data.user_agent,
            country_codes: data.country_codes,
            default_address: data.default_address,
            clear_address_on_failure: data.clear_address_on_failure,
            log_level: data.log_level,
            file_path: None,
        }
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            geocoder_url: default_geocoder_url(),
            backend_url: default_backend_url(),
            user_agent: default_user_agent(),
            country_codes: default_country_codes(),
            default_address: default_address(),
            clear_address_on_failure: false,
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write one holding the
    /// current values so the user has something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|source| ConfigError::CreateDirectory {
                path: dir_path.clone(),
                source,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|source| ConfigError::Read {
                path: file_path.clone(),
                source,
            })?;
            let data: FileSpec =
                serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: file_path.clone(),
                    source,
                })?;
            *self = Config::from(data);
            self.file_path = Some(file_path);
        } else {
            self.file_path = Some(file_path);
            self.save()?;
        }

        Ok(())
    }

    /// Attempt to serialize the configuration data and write it to the disk,
    /// returning any unrecoverable errors.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::NotLoaded)?;
        let data = FileSpec {
            geocoder_url: self.geocoder_url.clone(),
            backend_url: self.backend_url.clone(),
            user_agent: self.user_agent.clone(),
            country_codes: self.country_codes.clone(),
            default_address: self.default_address.clone(),
            clear_address_on_failure: self.clear_address_on_failure,
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data).map_err(ConfigError::from)?;

        let write_failed = |source| ConfigError::Write {
            path: file_path.clone(),
            source,
        };
        let mut file = fs::File::create(file_path).map_err(write_failed)?;
        write!(file, "{}", content).map_err(write_failed)?;
        file.flush().map_err(write_failed)?;
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Failure policy selected by `clear_address_on_failure`.
    ///
    pub fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::from_clear_flag(self.clear_address_on_failure)
    }

    /// Parse the configured log level.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn load_from(dir: &Path) -> Config {
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config
    }

    #[test]
    fn test_load_creates_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(dir.path());

        let file_path = dir.path().join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));
        assert_eq!(config.geocoder_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.default_address, DEFAULT_ADDRESS);
        assert_eq!(config.failure_policy(), FailurePolicy::PreserveAddress);

        let contents = fs::read_to_string(file_path).unwrap();
        assert!(contents.contains("clear_address_on_failure: false"));
    }

    #[test]
    fn test_load_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        load_from(&nested);
        assert!(nested.join(FILE_NAME).exists());
    }

    #[test]
    fn test_load_fills_missing_keys_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "backend_url: http://example.test\nclear_address_on_failure: true\n",
        )
        .unwrap();

        let config = load_from(dir.path());
        assert_eq!(config.backend_url, "http://example.test");
        assert_eq!(config.country_codes, "us");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.failure_policy(), FailurePolicy::ClearAddress);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "clear_address_on_failure: [nope").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.path().to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::Parse { .. }))
        ));
    }

    #[test]
    fn test_load_reports_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(FILE_NAME)).unwrap();

        let mut config = Config::new();
        match config.load(dir.path().to_str()) {
            Err(AppError::Config(ConfigError::Read { path, .. })) => {
                assert_eq!(path, dir.path().join(FILE_NAME))
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_load_reports_directory_blocked_by_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "").unwrap();

        let mut config = Config::new();
        let result = config.load(blocker.join("nested").to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::CreateDirectory { .. }))
        ));
    }

    #[test]
    fn test_save_round_trips_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = load_from(dir.path());
        config.default_address = "1 Main St, Springfield, IL 62701".to_string();
        config.save().unwrap();

        assert_eq!(load_from(dir.path()), config);
    }

    #[test]
    fn test_save_without_path() {
        let result = Config::new().save();
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::NotLoaded))
        ));
    }

    #[test]
    fn test_log_level_filter() {
        let mut config = Config::new();
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Info);
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert!(matches!(
            config.log_level_filter(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
