use crate::{client::ClientError, configuration::Configuration, model::Role};
use std::str::FromStr;
use tracing::{debug, trace};
use uuid::Uuid;

/// Parse a UUID-formatted parameter value.
///
/// # Arguments
/// * `field` - The parameter name, reported back on failure
/// * `input` - The raw value as given by the user
pub fn parse_identifier(field: &str, input: &str) -> Result<Uuid, ClientError> {
    trace!("Validating {} \"{}\"...", field, input);
    Uuid::parse_str(input).map_err(|source| ClientError::InvalidIdentifier {
        field: field.to_string(),
        input: input.to_string(),
        source,
    })
}

/// Parse a user role, accepting only the exact wire names.
pub fn parse_role(field: &str, input: &str) -> Result<Role, ClientError> {
    Role::from_str(input).map_err(|_| ClientError::InvalidEnumValue {
        field: field.to_string(),
        value: input.to_string(),
        allowed: Role::names(),
    })
}

/// Resolve the tenant to act on.
///
/// The configured default tenant is only used when the parameter was not
/// given at all. An explicit empty value is validated like any other input.
pub fn resolve_tenant_id(
    field: &str,
    tenant_id: Option<&str>,
    configuration: &Configuration,
) -> Result<Uuid, ClientError> {
    match tenant_id {
        Some(tenant_id) => parse_identifier(field, tenant_id),
        None => {
            let fallback = configuration.tenant_id().unwrap_or_default();
            debug!("No tenant given, using configured tenant \"{}\"", fallback);
            parse_identifier(field, fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TENANT: &str = "e169d34f-58ce-4717-9b3a-5c66abd33417";

    fn configuration(tenant_id: Option<&str>) -> Configuration {
        let configuration = Configuration::new("https://api.example.com");
        match tenant_id {
            Some(tenant_id) => configuration.with_tenant_id(tenant_id),
            None => configuration,
        }
    }

    #[test]
    fn test_parse_identifier_accepts_canonical_uuid() {
        let id = parse_identifier("policy-id", TENANT).unwrap();
        assert_eq!(id.to_string(), TENANT);
    }

    #[test]
    fn test_parse_identifier_rejects_malformed_input() {
        for input in ["", "abc", "e169d34f-58ce-4717-9b3a", "e169d34f-58ce-4717-9b3a-5c66abd3341z"] {
            match parse_identifier("user-id", input) {
                Err(ClientError::InvalidIdentifier { field, input: got, .. }) => {
                    assert_eq!(field, "user-id");
                    assert_eq!(got, input);
                }
                other => panic!("expected invalid identifier for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("user-role", "User").unwrap(), Role::User);
        assert_eq!(parse_role("user-role", "Tenant Admin").unwrap(), Role::TenantAdmin);

        for input in ["SuperAdmin", "tenant admin", "", " User"] {
            match parse_role("user-role", input) {
                Err(ClientError::InvalidEnumValue { value, allowed, .. }) => {
                    assert_eq!(value, input);
                    assert_eq!(allowed, vec!["Tenant Admin", "User"]);
                }
                other => panic!("expected invalid enum value for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_tenant_falls_back_to_configuration_when_omitted() {
        let id = resolve_tenant_id("tenant-id", None, &configuration(Some(TENANT))).unwrap();
        assert_eq!(id.to_string(), TENANT);
    }

    #[test]
    fn test_explicit_tenant_wins_over_configuration() {
        let explicit = "5cfb6af4-59ac-4a14-8b83-bd65b1e11777";
        let id =
            resolve_tenant_id("tenant-id", Some(explicit), &configuration(Some(TENANT))).unwrap();
        assert_eq!(id.to_string(), explicit);
    }

    #[test]
    fn test_explicit_empty_tenant_does_not_fall_back() {
        let error =
            resolve_tenant_id("tenant-id", Some(""), &configuration(Some(TENANT))).unwrap_err();
        assert_eq!(error.kind(), "InvalidIdentifier");
    }

    #[test]
    fn test_missing_tenant_everywhere_is_invalid() {
        let error = resolve_tenant_id("tenant-id", None, &configuration(None)).unwrap_err();
        assert_eq!(error.kind(), "InvalidIdentifier");
    }
}
