//! Error reporting for the tenantctl application.
//!
//! Every failure is shown to the user as a single line naming the error kind,
//! followed by the error message and each underlying cause.

use crate::error::CliError;
use std::error::Error;
use tracing::error;

/// Render an error as `<Kind>: <message>: <cause>: ...` on one line.
pub fn render_error(error: &CliError) -> String {
    let mut message = format!("{}: {}", error.kind(), error);

    let mut cause = error.source();
    while let Some(current) = cause {
        let text = current.to_string();
        if !text.is_empty() && !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = current.source();
    }

    message.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Report an error consistently with both logging and user-facing output.
pub fn report_error(error: &CliError) {
    let rendered = render_error(error);
    error!("{}", rendered);
    eprintln!("{}", rendered);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::param_utils::parse_identifier;
    use reqwest::StatusCode;

    #[test]
    fn test_render_invalid_identifier_includes_cause() {
        let error: CliError = parse_identifier("policy-id", "abc").unwrap_err().into();
        let rendered = render_error(&error);
        assert!(rendered.starts_with("InvalidIdentifier: invalid policy-id \"abc\": "));
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn test_render_remote_error_summarizes_body() {
        let error: CliError = ClientError::Remote {
            status: StatusCode::NOT_FOUND,
            body: "{\n  \"message\": \"policy not found\",\n  \"trace\": \"...\"\n}".to_string(),
        }
        .into();
        assert_eq!(
            render_error(&error),
            "RemoteError: server responded with 404 Not Found: policy not found"
        );
    }

    #[test]
    fn test_render_configuration_error() {
        let error: CliError = crate::configuration::Configuration::default()
            .amber_base_url()
            .unwrap_err()
            .into();
        assert_eq!(
            render_error(&error),
            "ConfigurationError: missing value for property \"amber-base-url\""
        );
    }
}
