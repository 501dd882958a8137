//! Configuration action implementations.

use crate::actions::{format_parameter_value, optional_string};
use crate::client::ClientError;
use crate::commands::params::{
    PARAMETER_AMBER_BASE_URL, PARAMETER_HTTP_CLIENT_TIMEOUT, PARAMETER_LOG_LEVEL,
    PARAMETER_TENANT_ID,
};
use crate::configuration::{Configuration, ConfigurationUpdate};
use crate::endpoint::Endpoint;
use crate::error::CliError;
use crate::logging::{is_valid_log_level, LOG_LEVELS};
use crate::param_utils::parse_identifier;
use clap::ArgMatches;
use tracing::info;

/// Read the values passed to `config set`
pub fn update_from_matches(matches: &ArgMatches) -> ConfigurationUpdate {
    ConfigurationUpdate {
        amber_base_url: optional_string(matches, PARAMETER_AMBER_BASE_URL),
        tenant_id: optional_string(matches, PARAMETER_TENANT_ID),
        http_client_timeout: matches.get_one::<u64>(PARAMETER_HTTP_CLIENT_TIMEOUT).copied(),
        log_level: optional_string(matches, PARAMETER_LOG_LEVEL),
    }
}

/// Reject values that would make every later command fail.
pub fn validate_update(update: &ConfigurationUpdate) -> Result<(), CliError> {
    if let Some(url) = &update.amber_base_url {
        Endpoint::new(url, "")?;
    }
    if let Some(tenant_id) = &update.tenant_id {
        parse_identifier(PARAMETER_TENANT_ID, tenant_id)?;
    }
    if let Some(log_level) = &update.log_level {
        if !is_valid_log_level(log_level) {
            return Err(ClientError::InvalidEnumValue {
                field: PARAMETER_LOG_LEVEL.to_string(),
                value: log_level.clone(),
                allowed: LOG_LEVELS.to_vec(),
            }
            .into());
        }
    }
    Ok(())
}

/// Apply `config set` and save the result, returning the file written
pub fn set_configuration(matches: &ArgMatches) -> Result<String, CliError> {
    info!("config set called");

    let update = update_from_matches(matches);
    validate_update(&update)?;

    let mut configuration = Configuration::load_or_default()?;
    configuration.update(update);
    let path = configuration.save_to_default()?;

    Ok(format!("Configuration saved to {}", path.display()))
}

pub fn show_configuration(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    let format = format_parameter_value(matches)?;
    Ok(configuration.format(&format)?)
}

pub fn show_configuration_path() -> Result<String, CliError> {
    let path = Configuration::get_default_configuration_file_path()?;
    Ok(path.display().to_string())
}
