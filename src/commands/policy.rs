//! Policy command definitions.

use crate::commands::params::{
    api_key_parameter, format_parameter, policy_file_parameter, policy_id_parameter,
    COMMAND_POLICY,
};
use clap::Command;

/// `list policy`: a single policy with `--policy-id`, otherwise all of them
pub fn list_policy_command() -> Command {
    Command::new(COMMAND_POLICY)
        .about("Get list of policies or a specific policy of a tenant")
        .visible_alias("policies")
        .arg(api_key_parameter())
        .arg(policy_id_parameter().help(
            "Id of the policy to get; omit the flag to list all policies (an empty value is rejected)",
        ))
        .arg(format_parameter())
}

pub fn create_policy_command() -> Command {
    Command::new(COMMAND_POLICY)
        .about("Uploads a new policy")
        .arg(api_key_parameter())
        .arg(policy_file_parameter())
        .arg(format_parameter())
}

pub fn delete_policy_command() -> Command {
    Command::new(COMMAND_POLICY)
        .about("Deletes a policy")
        .arg(api_key_parameter())
        .arg(policy_id_parameter().required(true))
        .arg(format_parameter())
}
