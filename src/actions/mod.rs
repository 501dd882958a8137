//! Command handlers.
//!
//! Each handler receives the loaded configuration and its own arguments,
//! runs validation before any network activity, performs exactly one backend
//! call and returns the rendered output.

use crate::{
    commands::params::{PARAMETER_API_KEY, PARAMETER_FORMAT},
    configuration::Configuration,
    error::CliError,
    format::OutputFormat,
    http_utils::{HttpClient, HttpRequestConfig},
};
use clap::ArgMatches;

pub mod config;
pub mod policies;
pub mod users;

pub(crate) fn required_string(matches: &ArgMatches, name: &str) -> Result<String, CliError> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| CliError::MissingRequiredArgument(name.to_string()))
}

pub(crate) fn optional_string(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.get_one::<String>(name).cloned()
}

pub(crate) fn api_key_parameter_value(matches: &ArgMatches) -> Result<String, CliError> {
    required_string(matches, PARAMETER_API_KEY)
}

pub(crate) fn format_parameter_value(matches: &ArgMatches) -> Result<OutputFormat, CliError> {
    match matches.get_one::<String>(PARAMETER_FORMAT) {
        Some(format) => Ok(OutputFormat::from_name(format)?),
        None => Ok(OutputFormat::default()),
    }
}

pub(crate) fn http_client(configuration: &Configuration) -> Result<HttpClient, CliError> {
    Ok(HttpClient::new(HttpRequestConfig::from_configuration(
        configuration,
    )?)?)
}
