//! Shared command parameters for all CLI commands.
//!
//! This module defines common parameters that are used across multiple command modules.
//! It provides a centralized place to define parameter names and common argument configurations.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};
use std::path::PathBuf;

// Verbs
pub const COMMAND_CREATE: &str = "create";
pub const COMMAND_UPDATE: &str = "update";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_DELETE: &str = "delete";
pub const COMMAND_VERSION: &str = "version";

// Resources
pub const COMMAND_USER: &str = "user";
pub const COMMAND_ROLE: &str = "role";
pub const COMMAND_POLICY: &str = "policy";

// Config commands
pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_SHOW: &str = "show";
pub const COMMAND_PATH: &str = "path";
pub const COMMAND_SET: &str = "set";

// Parameter names
pub const PARAMETER_API_KEY: &str = "api-key";
pub const PARAMETER_TENANT_ID: &str = "tenant-id";
pub const PARAMETER_USER_ID: &str = "user-id";
pub const PARAMETER_EMAIL_ID: &str = "email-id";
pub const PARAMETER_USER_ROLE: &str = "user-role";
pub const PARAMETER_POLICY_ID: &str = "policy-id";
pub const PARAMETER_POLICY_FILE: &str = "policy-file";
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_AMBER_BASE_URL: &str = "amber-base-url";
pub const PARAMETER_HTTP_CLIENT_TIMEOUT: &str = "http-client-timeout";
pub const PARAMETER_LOG_LEVEL: &str = "log-level";

/// Create the API key parameter.
///
/// The key is only ever held for the current invocation.
pub fn api_key_parameter() -> Arg {
    Arg::new(PARAMETER_API_KEY)
        .short('a')
        .long(PARAMETER_API_KEY)
        .num_args(1)
        .required(true)
        .env("TENANTCTL_API_KEY")
        .hide_env_values(true)
        .help("API key to be used to connect to the platform services")
}

/// Create the output format parameter.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env("TENANTCTL_FORMAT")
        .default_value("json")
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

/// Create the tenant ID parameter.
pub fn tenant_id_parameter() -> Arg {
    Arg::new(PARAMETER_TENANT_ID)
        .short('t')
        .long(PARAMETER_TENANT_ID)
        .num_args(1)
        .required(false)
        .help("Id of the tenant, defaults to the tenant-id from the configuration")
}

pub fn user_id_parameter() -> Arg {
    Arg::new(PARAMETER_USER_ID)
        .short('u')
        .long(PARAMETER_USER_ID)
        .num_args(1)
        .required(true)
        .help("Id of the specific user")
}

pub fn email_id_parameter() -> Arg {
    Arg::new(PARAMETER_EMAIL_ID)
        .short('e')
        .long(PARAMETER_EMAIL_ID)
        .num_args(1)
        .required(true)
        .help("Email id of the tenant user to be created")
}

/// Create the user role parameter.
///
/// Values are checked against the allowed roles by the action, not by clap,
/// so the error is reported the same way as every other validation failure.
pub fn user_role_parameter() -> Arg {
    Arg::new(PARAMETER_USER_ROLE)
        .short('r')
        .long(PARAMETER_USER_ROLE)
        .num_args(1)
        .required(true)
        .help("Role of the tenant user, should be one of \"Tenant Admin\" or \"User\"")
}

/// Create the policy ID parameter.
pub fn policy_id_parameter() -> Arg {
    Arg::new(PARAMETER_POLICY_ID)
        .short('p')
        .long(PARAMETER_POLICY_ID)
        .num_args(1)
        .required(false)
        .help("Id of the policy")
}

pub fn policy_file_parameter() -> Arg {
    Arg::new(PARAMETER_POLICY_FILE)
        .short('i')
        .long(PARAMETER_POLICY_FILE)
        .num_args(1)
        .required(true)
        .help("Path of the JSON file containing the policy to be uploaded")
        .value_parser(clap::value_parser!(PathBuf))
}

pub fn amber_base_url_parameter() -> Arg {
    Arg::new(PARAMETER_AMBER_BASE_URL)
        .long(PARAMETER_AMBER_BASE_URL)
        .num_args(1)
        .required(false)
        .help("Base URL of the platform (e.g., https://api.example.com)")
}

pub fn http_client_timeout_parameter() -> Arg {
    Arg::new(PARAMETER_HTTP_CLIENT_TIMEOUT)
        .long(PARAMETER_HTTP_CLIENT_TIMEOUT)
        .num_args(1)
        .required(false)
        .help("HTTP request timeout in seconds")
        .value_parser(clap::value_parser!(u64).range(1..))
}

pub fn log_level_parameter() -> Arg {
    Arg::new(PARAMETER_LOG_LEVEL)
        .long(PARAMETER_LOG_LEVEL)
        .num_args(1)
        .required(false)
        .help("Log level (off, error, warn, info, debug, trace)")
}

/// Global flag raising the log level to debug
pub fn verbose_parameter() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Enable verbose logging for debugging")
}
