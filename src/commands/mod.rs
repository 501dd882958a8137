//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the clap crate.
//! Commands follow a `<verb> <resource>` layout, e.g. `create user` or `list policy`.

use clap::{ArgMatches, Command};

pub mod config;
pub mod params;
pub mod policy;
pub mod user;

use params::{
    verbose_parameter, COMMAND_CREATE, COMMAND_DELETE, COMMAND_LIST, COMMAND_UPDATE,
    COMMAND_VERSION,
};

/// Build the complete command tree.
pub fn cli_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tenant CLI used to run the tasks for tenant admin/user")
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_parameter())
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a resource")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(user::create_user_command())
                .subcommand(policy::create_policy_command()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a resource")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(user::update_user_command()),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List resources")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(policy::list_policy_command()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a resource")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(policy::delete_policy_command()),
        )
        .subcommand(config::config_command())
        .subcommand(Command::new(COMMAND_VERSION).about("Print the version of the CLI"))
}

/// Parse the process arguments; exits with a usage message on error.
pub fn create_cli_commands() -> ArgMatches {
    cli_command().get_matches()
}
