use tenantctl::{
    commands::create_cli_commands,
    configuration::{Configuration, DEFAULT_LOG_LEVEL},
    error_utils::report_error,
    logging,
};
use tracing::debug;

mod cli;
use cli::execute_command;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let matches = create_cli_commands();

    // Load once; commands that need the configuration report a failure themselves
    let configuration = Configuration::load_default();

    // Intialize the logging subsystem
    let log_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        configuration
            .as_ref()
            .map(|c| c.log_level())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    };
    logging::init(log_level);
    if let Err(e) = &configuration {
        debug!("Configuration not loaded: {}", e);
    }

    match execute_command(&matches, configuration).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            report_error(&e);
            ::std::process::exit(e.exit_code().code());
        }
    }
}
