//! Formatting utilities for the tenantctl client.
//!
//! Successful responses are rendered as indented JSON by default, or as YAML
//! on request. Fields always appear in the declaration order of the response
//! type, so the same response always renders to the same text.

use serde::Serialize;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

pub const JSON: &str = "json";
pub const YAML: &str = "yaml";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
    #[error("YAML serialization error: {0}")]
    YamlSerializationError(#[from] serde_yaml::Error),
}

/// Enum representing the supported output formats
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// JSON indented with two spaces
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        OutputFormat::iter().map(<&'static str>::from).collect()
    }

    pub fn from_name(format_str: &str) -> Result<OutputFormat, FormattingError> {
        OutputFormat::from_str(&format_str.to_lowercase())
            .map_err(|_| FormattingError::UnsupportedOutputFormat(format_str.to_string()))
    }

    /// Render any serializable response
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, FormattingError> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, UserRole};
    use uuid::Uuid;

    fn user_role() -> UserRole {
        UserRole {
            user_id: Uuid::parse_str("5cfb6af4-59ac-4a14-8b83-bd65b1e11777").unwrap(),
            role: Role::User,
        }
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::names(), vec![JSON, YAML]);
        assert_eq!(OutputFormat::from_name("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("yaml").unwrap(), OutputFormat::Yaml);
        assert!(matches!(
            OutputFormat::from_name("csv"),
            Err(FormattingError::UnsupportedOutputFormat(_))
        ));
    }

    #[test]
    fn test_json_is_indented_in_field_order() {
        let output = OutputFormat::Json.render(&user_role()).unwrap();
        assert_eq!(
            output,
            "{\n  \"user_id\": \"5cfb6af4-59ac-4a14-8b83-bd65b1e11777\",\n  \"role\": \"User\"\n}"
        );
    }

    #[test]
    fn test_rendering_is_stable() {
        let first = OutputFormat::Json.render(&user_role()).unwrap();
        let second = OutputFormat::Json.render(&user_role()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_yaml_output() {
        let output = OutputFormat::Yaml.render(&user_role()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("user_id: "));
        assert!(lines[0].contains("5cfb6af4-59ac-4a14-8b83-bd65b1e11777"));
        assert_eq!(lines[1], "role: User");
    }

    #[test]
    fn test_empty_list_renders() {
        let output = OutputFormat::Json.render(&Vec::<UserRole>::new()).unwrap();
        assert_eq!(output, "[]");
    }
}
