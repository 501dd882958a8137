//! Policy action implementations.

use crate::actions::{api_key_parameter_value, format_parameter_value, optional_string, required_string};
use crate::commands::params::{PARAMETER_POLICY_FILE, PARAMETER_POLICY_ID};
use crate::configuration::Configuration;
use crate::error::CliError;
use crate::format::OutputFormat;
use crate::model::PolicyRequest;
use crate::param_utils::parse_identifier;
use crate::pms::PmsClient;
use clap::ArgMatches;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Arguments of `list policy`
#[derive(Debug, Clone)]
pub struct ListPoliciesArgs {
    pub api_key: String,
    /// Fetch a single policy instead of searching
    pub policy_id: Option<String>,
    pub format: OutputFormat,
}

impl ListPoliciesArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        Ok(Self {
            api_key: api_key_parameter_value(matches)?,
            policy_id: optional_string(matches, PARAMETER_POLICY_ID),
            format: format_parameter_value(matches)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreatePolicyArgs {
    pub api_key: String,
    pub policy_file: PathBuf,
    pub format: OutputFormat,
}

impl CreatePolicyArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        let policy_file = matches
            .get_one::<PathBuf>(PARAMETER_POLICY_FILE)
            .cloned()
            .ok_or_else(|| CliError::MissingRequiredArgument(PARAMETER_POLICY_FILE.to_string()))?;

        Ok(Self {
            api_key: api_key_parameter_value(matches)?,
            policy_file,
            format: format_parameter_value(matches)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DeletePolicyArgs {
    pub api_key: String,
    pub policy_id: String,
    pub format: OutputFormat,
}

impl DeletePolicyArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        Ok(Self {
            api_key: api_key_parameter_value(matches)?,
            policy_id: required_string(matches, PARAMETER_POLICY_ID)?,
            format: format_parameter_value(matches)?,
        })
    }
}

/// Confirmation printed after a policy was deleted
#[derive(Debug, Serialize)]
struct DeletedPolicy {
    policy_id: Uuid,
    deleted: bool,
}

fn pms_client(configuration: &Configuration, api_key: &str) -> Result<PmsClient, CliError> {
    Ok(PmsClient::new(
        super::http_client(configuration)?,
        configuration.amber_base_url()?,
        api_key.to_string(),
    )?)
}

/// Read a policy document from disk
pub fn read_policy_file(path: &Path) -> Result<PolicyRequest, CliError> {
    debug!("Reading policy from {}", path.display());
    let contents =
        std::fs::read_to_string(path).map_err(|source| CliError::PolicyFileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|source| CliError::PolicyFileInvalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Get a specific policy, or every policy when no id is given
pub async fn list_policies(
    configuration: &Configuration,
    args: &ListPoliciesArgs,
) -> Result<String, CliError> {
    info!("list policies called");

    match &args.policy_id {
        None => {
            let client = pms_client(configuration, &args.api_key)?;
            let policies = client.search_policies().await?;
            Ok(args.format.render(&policies)?)
        }
        Some(policy_id) => {
            let policy_id = parse_identifier(PARAMETER_POLICY_ID, policy_id)?;
            let client = pms_client(configuration, &args.api_key)?;
            let policy = client.get_policy(&policy_id).await?;
            Ok(args.format.render(&policy)?)
        }
    }
}

/// Upload a new policy read from a JSON file
pub async fn create_policy(
    configuration: &Configuration,
    args: &CreatePolicyArgs,
) -> Result<String, CliError> {
    info!("create policy called");

    let request = read_policy_file(&args.policy_file)?;
    let client = pms_client(configuration, &args.api_key)?;
    let policy = client.create_policy(&request).await?;

    Ok(args.format.render(&policy)?)
}

pub async fn delete_policy(
    configuration: &Configuration,
    args: &DeletePolicyArgs,
) -> Result<String, CliError> {
    info!("delete policy called");

    let policy_id = parse_identifier(PARAMETER_POLICY_ID, &args.policy_id)?;
    let client = pms_client(configuration, &args.api_key)?;
    client.delete_policy(&policy_id).await?;

    Ok(args.format.render(&DeletedPolicy {
        policy_id,
        deleted: true,
    })?)
}

pub async fn execute_list_policies(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    list_policies(configuration, &ListPoliciesArgs::from_matches(matches)?).await
}

pub async fn execute_create_policy(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    create_policy(configuration, &CreatePolicyArgs::from_matches(matches)?).await
}

pub async fn execute_delete_policy(
    configuration: &Configuration,
    matches: &ArgMatches,
) -> Result<String, CliError> {
    delete_policy(configuration, &DeletePolicyArgs::from_matches(matches)?).await
}
