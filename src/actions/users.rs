//! User action implementations.
//!
//! This module contains the tenant user operations: creating a user and
//! changing the role of an existing user.

use crate::actions::{api_key_parameter_value, format_parameter_value, optional_string, required_string};
use crate::commands::params::{
    PARAMETER_EMAIL_ID, PARAMETER_TENANT_ID, PARAMETER_USER_ID, PARAMETER_USER_ROLE,
};
use crate::configuration::Configuration;
use crate::error::CliError;
use crate::format::OutputFormat;
use crate::model::{CreateUserRequest, UpdateUserRoleRequest};
use crate::param_utils::{parse_identifier, parse_role, resolve_tenant_id};
use crate::tms::TmsClient;
use clap::ArgMatches;
use tracing::info;

/// Arguments of `create user`
#[derive(Debug, Clone)]
pub struct CreateUserArgs {
    pub api_key: String,
    /// Falls back to the configured tenant when `None`
    pub tenant_id: Option<String>,
    pub email: String,
    pub role: String,
    pub format: OutputFormat,
}

impl CreateUserArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        Ok(Self {
            api_key: api_key_parameter_value(matches)?,
            tenant_id: optional_string(matches, PARAMETER_TENANT_ID),
            email: required_string(matches, PARAMETER_EMAIL_ID)?,
            role: required_string(matches, PARAMETER_USER_ROLE)?,
            format: format_parameter_value(matches)?,
        })
    }
}

/// Arguments of `update user role`
#[derive(Debug, Clone)]
pub struct UpdateUserRoleArgs {
    pub api_key: String,
    pub tenant_id: Option<String>,
    pub user_id: String,
    pub role: String,
    pub format: OutputFormat,
}

impl UpdateUserRoleArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        Ok(Self {
            api_key: api_key_parameter_value(matches)?,
            tenant_id: optional_string(matches, PARAMETER_TENANT_ID),
            user_id: required_string(matches, PARAMETER_USER_ID)?,
            role: required_string(matches, PARAMETER_USER_ROLE)?,
            format: format_parameter_value(matches)?,
        })
    }
}

/// Create a new user under a tenant
pub async fn create_user(
    configuration: &Configuration,
    args: &CreateUserArgs,
) -> Result<String, CliError> {
    info!("create user called");

    let tenant_id =
        resolve_tenant_id(PARAMETER_TENANT_ID, args.tenant_id.as_deref(), configuration)?;
    let request = CreateUserRequest {
        email: args.email.clone(),
        role: parse_role(PARAMETER_USER_ROLE, &args.role)?,
    };

    let client = TmsClient::new(
        super::http_client(configuration)?,
        configuration.amber_base_url()?,
        tenant_id,
        args.api_key.clone(),
    )?;
    let user = client.create_user(&request).await?;

    Ok(args.format.render(&user)?)
}

/// Update the role of a user under a tenant
pub async fn update_user_role(
    configuration: &Configuration,
    args: &UpdateUserRoleArgs,
) -> Result<String, CliError> {
    info!("update user role called");

    let tenant_id =
        resolve_tenant_id(PARAMETER_TENANT_ID, args.tenant_id.as_deref(), configuration)?;
    let request = UpdateUserRoleRequest {
        user_id: parse_identifier(PARAMETER_USER_ID, &args.user_id)?,
        role: parse_role(PARAMETER_USER_ROLE, &args.role)?,
    };

    let client = TmsClient::new(
        super::http_client(configuration)?,
        configuration.amber_base_url()?,
        tenant_id,
        args.api_key.clone(),
    )?;
    let updated = client.update_user_role(&request).await?;

    Ok(args.format.render(&updated)?)
}

/// Execute user-related subcommands based on the provided arguments
pub async fn execute_create_user(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    create_user(configuration, &CreateUserArgs::from_matches(matches)?).await
}

pub async fn execute_update_user_role(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    update_user_role(configuration, &UpdateUserRoleArgs::from_matches(matches)?).await
}
