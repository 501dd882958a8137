//! User command definitions.
//!
//! This module defines the user-related CLI commands and their arguments using the clap crate.

use crate::commands::params::{
    api_key_parameter, email_id_parameter, format_parameter, tenant_id_parameter,
    user_id_parameter, user_role_parameter, COMMAND_ROLE, COMMAND_USER,
};
use clap::Command;

/// `create user`
pub fn create_user_command() -> Command {
    Command::new(COMMAND_USER)
        .about("Creates a new user under a tenant")
        .arg(api_key_parameter())
        .arg(tenant_id_parameter())
        .arg(email_id_parameter())
        .arg(user_role_parameter())
        .arg(format_parameter())
}

/// `update user`, holding `update user role`
pub fn update_user_command() -> Command {
    Command::new(COMMAND_USER)
        .about("Updates a user under a tenant")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_ROLE)
                .about("Updates role of a user under a tenant")
                .arg(api_key_parameter())
                .arg(tenant_id_parameter())
                .arg(user_id_parameter())
                .arg(user_role_parameter())
                .arg(format_parameter()),
        )
}
