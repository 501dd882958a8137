use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::{client::ClientError, exit_codes::TenantctlExitCode};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("undefined or unsupported subcommand {0:?}")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading or management
    #[error("{0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),
    /// Error related to data formatting
    #[error("{0}")]
    FormattingError(#[from] crate::format::FormattingError),
    /// Error when a required command-line argument is missing
    #[error("missing required argument: {0}")]
    MissingRequiredArgument(String),
    /// The policy file could not be read
    #[error("failed to read policy file {path:?}")]
    PolicyFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The policy file is not a valid policy document
    #[error("policy file {path:?} is not a valid policy")]
    PolicyFileInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Failure raised while talking to one of the backend services
    #[error(transparent)]
    ClientError(#[from] ClientError),
}

impl CliError {
    /// Name of the error kind as shown to the user
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::UnsupportedSubcommand(_) | CliError::MissingRequiredArgument(_) => {
                "UsageError"
            }
            CliError::ConfigurationError(_) => "ConfigurationError",
            CliError::FormattingError(_) | CliError::PolicyFileInvalid { .. } => {
                "SerializationError"
            }
            CliError::PolicyFileUnreadable { .. } => "IoError",
            CliError::ClientError(e) => e.kind(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> TenantctlExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => TenantctlExitCode::UsageError,
            CliError::MissingRequiredArgument(_) => TenantctlExitCode::UsageError,
            CliError::ConfigurationError(_) => TenantctlExitCode::ConfigError,
            CliError::FormattingError(_) => TenantctlExitCode::DataError,
            CliError::PolicyFileUnreadable { .. } => TenantctlExitCode::NoInput,
            CliError::PolicyFileInvalid { .. } => TenantctlExitCode::DataError,
            CliError::ClientError(e) => match e {
                ClientError::InvalidIdentifier { .. } | ClientError::InvalidEnumValue { .. } => {
                    TenantctlExitCode::UsageError
                }
                ClientError::MalformedUrl { .. } => TenantctlExitCode::ConfigError,
                ClientError::Timeout { .. } => TenantctlExitCode::TempFail,
                ClientError::Transport { .. } => TenantctlExitCode::NetworkError,
                ClientError::Remote { status, .. }
                    if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN =>
                {
                    TenantctlExitCode::AuthError
                }
                ClientError::Remote { .. } => TenantctlExitCode::ApiError,
                ClientError::Serialization { .. } => TenantctlExitCode::DataError,
            },
        }
    }
}
