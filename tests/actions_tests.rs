use serde_json::json;
use tenantctl::{
    actions::{
        policies::{self, DeletePolicyArgs, ListPoliciesArgs},
        users::{self, CreateUserArgs, UpdateUserRoleArgs},
    },
    configuration::Configuration,
    format::OutputFormat,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TENANT_ID: &str = "e169d34f-58ce-4717-9b3a-5c66abd33417";
const CONFIGURED_TENANT_ID: &str = "3f1a9c7e-2b4d-4c6e-8a0b-1c2d3e4f5a6b";
const USER_ID: &str = "5cfb6af4-59ac-4a14-8b83-bd65b1e11777";

fn configuration(server: &MockServer) -> Configuration {
    Configuration::new(&server.uri()).with_http_client_timeout(5)
}

fn update_role_args(tenant_id: Option<&str>, user_id: &str, role: &str) -> UpdateUserRoleArgs {
    UpdateUserRoleArgs {
        api_key: "abc".to_string(),
        tenant_id: tenant_id.map(str::to_string),
        user_id: user_id.to_string(),
        role: role.to_string(),
        format: OutputFormat::Json,
    }
}

#[tokio::test]
async fn update_user_role_renders_response_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/management/v1/tenants/{}/users/{}", TENANT_ID, USER_ID)))
        .and(header("X-API-KEY", "abc"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"user_id": USER_ID, "role": "User"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = users::update_user_role(
        &configuration(&server),
        &update_role_args(Some(TENANT_ID), USER_ID, "User"),
    )
    .await
    .unwrap();

    assert_eq!(
        output,
        format!("{{\n  \"user_id\": \"{}\",\n  \"role\": \"User\"\n}}", USER_ID)
    );
}

#[tokio::test]
async fn invalid_user_id_sends_no_request() {
    let server = MockServer::start().await;

    let error = users::update_user_role(
        &configuration(&server),
        &update_role_args(Some(TENANT_ID), "not-a-uuid", "User"),
    )
    .await
    .unwrap_err();

    assert_eq!(error.kind(), "InvalidIdentifier");
    assert!(error.to_string().contains("not-a-uuid"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_role_sends_no_request() {
    let server = MockServer::start().await;

    let error = users::update_user_role(
        &configuration(&server),
        &update_role_args(Some(TENANT_ID), USER_ID, "SuperAdmin"),
    )
    .await
    .unwrap_err();

    assert_eq!(error.kind(), "InvalidEnumValue");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn explicit_empty_tenant_is_rejected() {
    let server = MockServer::start().await;
    let configuration = configuration(&server).with_tenant_id(CONFIGURED_TENANT_ID);

    let error = users::update_user_role(&configuration, &update_role_args(Some(""), USER_ID, "User"))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), "InvalidIdentifier");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn omitted_tenant_uses_configured_tenant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/management/v1/tenants/{}/users", CONFIGURED_TENANT_ID)))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": USER_ID,
            "email": "jane@example.com",
            "role": "Tenant Admin"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let configuration = configuration(&server).with_tenant_id(CONFIGURED_TENANT_ID);
    let args = CreateUserArgs {
        api_key: "abc".to_string(),
        tenant_id: None,
        email: "jane@example.com".to_string(),
        role: "Tenant Admin".to_string(),
        format: OutputFormat::Json,
    };

    let output = users::create_user(&configuration, &args).await.unwrap();
    let rendered: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(rendered["email"], "jane@example.com");
    assert_eq!(rendered["role"], "Tenant Admin");
}

#[tokio::test]
async fn remote_failure_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/management/v1/policies"))
        .respond_with(ResponseTemplate::new(403).set_body_string(r#"{"message":"forbidden"}"#))
        .mount(&server)
        .await;

    let args = ListPoliciesArgs {
        api_key: "abc".to_string(),
        policy_id: None,
        format: OutputFormat::Json,
    };
    let error = policies::list_policies(&configuration(&server), &args)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), "RemoteError");
    assert!(error.to_string().contains("403"));
    assert!(error.to_string().contains("forbidden"));
}

#[tokio::test]
async fn empty_policy_list_renders_empty_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/management/v1/policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let args = ListPoliciesArgs {
        api_key: "abc".to_string(),
        policy_id: None,
        format: OutputFormat::Json,
    };
    let output = policies::list_policies(&configuration(&server), &args)
        .await
        .unwrap();
    assert_eq!(output, "[]");
}

#[tokio::test]
async fn delete_policy_reports_deleted_id() {
    let server = MockServer::start().await;
    let policy_id = "0b7c2a8e-5f1c-4a44-9c55-8b9d1b3b2e11";
    Mock::given(method("DELETE"))
        .and(path(format!("/management/v1/policies/{}", policy_id)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let args = DeletePolicyArgs {
        api_key: "abc".to_string(),
        policy_id: policy_id.to_string(),
        format: OutputFormat::Json,
    };
    let output = policies::delete_policy(&configuration(&server), &args)
        .await
        .unwrap();
    let rendered: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(rendered["policy_id"], policy_id);
    assert_eq!(rendered["deleted"], true);
}

#[tokio::test]
async fn missing_base_url_is_a_configuration_error() {
    let configuration = Configuration::default();
    let error = users::update_user_role(
        &configuration,
        &update_role_args(Some(TENANT_ID), USER_ID, "User"),
    )
    .await
    .unwrap_err();

    assert_eq!(error.kind(), "ConfigurationError");
}

#[tokio::test]
async fn zero_timeout_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    let configuration = Configuration::new(&server.uri()).with_http_client_timeout(0);
    let args = ListPoliciesArgs {
        api_key: "abc".to_string(),
        policy_id: None,
        format: OutputFormat::Json,
    };

    let error = policies::list_policies(&configuration, &args)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), "ConfigurationError");
    assert!(error.to_string().contains("http-client-timeout"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_policy_id_is_rejected_instead_of_searching() {
    let server = MockServer::start().await;
    let args = ListPoliciesArgs {
        api_key: "abc".to_string(),
        policy_id: Some(String::new()),
        format: OutputFormat::Json,
    };

    let error = policies::list_policies(&configuration(&server), &args)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), "InvalidIdentifier");
    assert!(server.received_requests().await.unwrap().is_empty());
}
