use crate::format::{FormattingError, OutputFormat};
use crate::http_utils::DEFAULT_TIMEOUT_SECONDS;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;

pub const DEFAULT_APPLICATION_ID: &str = "tenantctl";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yaml";
pub const SYSTEM_CONFIGURATION_DIRECTORY: &str = "/etc/tac";
pub const CONFIGURATION_DIRECTORY_VARIABLE: &str = "TENANTCTL_CONFIG_DIR";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data from {path:?}, because of: {cause}")]
    FailedToLoadData {
        path: PathBuf,
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to write configuration data to file, because of: {cause}")]
    FailedToWriteData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("missing value for property {name:?}")]
    MissingRequiredPropertyValue { name: String },
    #[error("invalid value {value:?} for property {name:?}")]
    InvalidPropertyValue { name: String, value: String },
    #[error("{cause}")]
    FormattingError {
        #[from]
        cause: FormattingError,
    },
}

impl ConfigurationError {
    /// True when loading failed only because the file does not exist yet
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigurationError::FailedToLoadData { cause, .. } => cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound),
            _ => false,
        }
    }
}

fn default_http_client_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Settings shared by every command, loaded once per process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    #[serde(default)]
    amber_base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tenant_id: Option<String>,
    #[serde(default = "default_http_client_timeout")]
    http_client_timeout: u64,
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            amber_base_url: String::new(),
            tenant_id: None,
            http_client_timeout: default_http_client_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl Configuration {
    pub fn new(amber_base_url: &str) -> Self {
        Self {
            amber_base_url: amber_base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_tenant_id(mut self, tenant_id: &str) -> Self {
        self.tenant_id = Some(tenant_id.to_string());
        self
    }

    pub fn with_http_client_timeout(mut self, seconds: u64) -> Self {
        self.http_client_timeout = seconds;
        self
    }

    pub fn with_log_level(mut self, log_level: &str) -> Self {
        self.log_level = log_level.to_string();
        self
    }

    /// Base URL of the platform, required by every backend call
    pub fn amber_base_url(&self) -> Result<&str, ConfigurationError> {
        if self.amber_base_url.trim().is_empty() {
            Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "amber-base-url".to_string(),
            })
        } else {
            Ok(&self.amber_base_url)
        }
    }

    /// Tenant used when a command is run without `--tenant-id`
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    /// Request timeout applied to every backend call; zero is rejected
    pub fn request_timeout(&self) -> Result<Duration, ConfigurationError> {
        match self.http_client_timeout {
            0 => Err(ConfigurationError::InvalidPropertyValue {
                name: "http-client-timeout".to_string(),
                value: self.http_client_timeout.to_string(),
            }),
            seconds => Ok(Duration::from_secs(seconds)),
        }
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        // Check for TENANTCTL_CONFIG_DIR environment variable first
        if let Ok(config_dir_str) = std::env::var(CONFIGURATION_DIRECTORY_VARIABLE) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        let system_path =
            Path::new(SYSTEM_CONFIGURATION_DIRECTORY).join(DEFAULT_CONFIGURATION_FILE_NAME);
        if system_path.is_file() {
            return Ok(system_path);
        }

        match config_dir() {
            Some(configuration_directory) => {
                let mut default_config_file_path = configuration_directory;
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);

                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    pub fn load_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        debug!("Loading configuration from {}...", default_file_path.display());
        Configuration::load_from_file(&default_file_path)
    }

    /// Load the default configuration for editing, falling back to defaults
    /// when the file does not exist yet.
    ///
    /// Values are not checked here so `config set` can repair a bad file.
    pub fn load_or_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        match Configuration::read_file(&default_file_path) {
            Ok(configuration) => Ok(configuration),
            Err(e) if e.is_not_found() => {
                debug!("Configuration file not found, starting from defaults");
                Ok(Configuration::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Load a configuration file and check its values
    pub fn load_from_file(path: &Path) -> Result<Configuration, ConfigurationError> {
        let configuration = Configuration::read_file(path)?;
        configuration.request_timeout()?;
        Ok(configuration)
    }

    fn read_file(path: &Path) -> Result<Configuration, ConfigurationError> {
        let contents =
            fs::read_to_string(path).map_err(|cause| ConfigurationError::FailedToLoadData {
                path: path.to_path_buf(),
                cause: Box::new(cause),
            })?;

        serde_yaml::from_str(&contents).map_err(|cause| ConfigurationError::FailedToLoadData {
            path: path.to_path_buf(),
            cause: Box::new(cause),
        })
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<(), ConfigurationError> {
        serde_yaml::to_writer(writer, self)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigurationError> {
        // first check if the parent directory exists and try to create it if not
        match path.parent() {
            Some(directory) => fs::create_dir_all(directory)
                .map_err(|_| ConfigurationError::FailedToFindConfigurationDirectory)?,
            None => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }

        let file = File::create(path)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })?;
        self.write(file)
    }

    pub fn save_to_default(&self) -> Result<PathBuf, ConfigurationError> {
        let path = Self::get_default_configuration_file_path()?;
        self.save(&path)?;
        Ok(path)
    }

    /// Apply the values given to `config set`; unset values keep their
    /// current setting
    pub fn update(&mut self, update: ConfigurationUpdate) {
        if let Some(amber_base_url) = update.amber_base_url {
            self.amber_base_url = amber_base_url;
        }
        if let Some(tenant_id) = update.tenant_id {
            self.tenant_id = Some(tenant_id);
        }
        if let Some(timeout) = update.http_client_timeout {
            self.http_client_timeout = timeout;
        }
        if let Some(log_level) = update.log_level {
            self.log_level = log_level;
        }
    }

    pub fn format(&self, format: &OutputFormat) -> Result<String, ConfigurationError> {
        Ok(format.render(self)?)
    }
}

/// Values supplied to `config set`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationUpdate {
    pub amber_base_url: Option<String>,
    pub tenant_id: Option<String>,
    pub http_client_timeout: Option<u64>,
    pub log_level: Option<String>,
}
