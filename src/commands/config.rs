//! Configuration command definitions.
//!
//! This module defines CLI commands related to configuration management.

use crate::commands::params::{
    amber_base_url_parameter, format_parameter, http_client_timeout_parameter,
    log_level_parameter, tenant_id_parameter, COMMAND_CONFIG, COMMAND_PATH, COMMAND_SET,
    COMMAND_SHOW,
};
use clap::Command;

/// Create the config command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Configuration management")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_SHOW)
                .about("Show the current configuration")
                .arg(format_parameter()),
        )
        .subcommand(Command::new(COMMAND_PATH).about("Show configuration file path"))
        .subcommand(
            Command::new(COMMAND_SET)
                .about("Set configuration properties")
                .arg(amber_base_url_parameter())
                .arg(tenant_id_parameter().help("Tenant used when --tenant-id is omitted"))
                .arg(http_client_timeout_parameter())
                .arg(log_level_parameter()),
        )
}
