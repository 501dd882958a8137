use clap::ArgMatches;
use tenantctl::{
    actions::{config, policies, users},
    commands::params::{
        COMMAND_CONFIG, COMMAND_CREATE, COMMAND_DELETE, COMMAND_LIST, COMMAND_PATH,
        COMMAND_POLICY, COMMAND_ROLE, COMMAND_SET, COMMAND_SHOW, COMMAND_UPDATE, COMMAND_USER,
        COMMAND_VERSION,
    },
    configuration::{Configuration, ConfigurationError},
    error::CliError,
};

fn extract_subcommand_name(sub_matches: &ArgMatches) -> String {
    sub_matches
        .subcommand()
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Dispatch the parsed command line to its action and return the text to print.
///
/// The configuration is handed over as loaded; commands that do not need it
/// (`version`, `config path`, `config set`) run even when loading failed.
pub async fn execute_command(
    matches: &ArgMatches,
    configuration: Result<Configuration, ConfigurationError>,
) -> Result<String, CliError> {
    match matches.subcommand() {
        Some((COMMAND_CREATE, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_USER, sub_matches)) => {
                users::execute_create_user(&configuration?, sub_matches).await
            }
            Some((COMMAND_POLICY, sub_matches)) => {
                policies::execute_create_policy(&configuration?, sub_matches).await
            }
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_UPDATE, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_USER, sub_matches)) => match sub_matches.subcommand() {
                Some((COMMAND_ROLE, sub_matches)) => {
                    users::execute_update_user_role(&configuration?, sub_matches).await
                }
                _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                    sub_matches,
                ))),
            },
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_LIST, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_POLICY, sub_matches)) => {
                policies::execute_list_policies(&configuration?, sub_matches).await
            }
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_DELETE, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_POLICY, sub_matches)) => {
                policies::execute_delete_policy(&configuration?, sub_matches).await
            }
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_CONFIG, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_SHOW, sub_matches)) => {
                config::show_configuration(&configuration?, sub_matches)
            }
            Some((COMMAND_PATH, _)) => config::show_configuration_path(),
            Some((COMMAND_SET, sub_matches)) => config::set_configuration(sub_matches),
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_VERSION, _)) => Ok(format!(
            "{} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )),
        _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
            matches,
        ))),
    }
}
