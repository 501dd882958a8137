//! Tenant Management Service client.

use crate::{
    client::ClientError,
    endpoint::{Endpoint, ResourceId, TENANTS_RESOURCE, TMS_BASE_PATH, USERS_RESOURCE},
    http_utils::HttpClient,
    model::{CreateUserRequest, UpdateUserRoleRequest, User, UserRole},
};
use tracing::debug;
use uuid::Uuid;

/// Client for the user operations of one tenant
pub struct TmsClient {
    http: HttpClient,
    endpoint: Endpoint,
    tenant_id: Uuid,
    api_key: String,
}

impl TmsClient {
    pub fn new(
        http: HttpClient,
        base_url: &str,
        tenant_id: Uuid,
        api_key: String,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            http,
            endpoint: Endpoint::new(base_url, TMS_BASE_PATH)?,
            tenant_id,
            api_key,
        })
    }

    fn users_path(&self) -> String {
        format!("{}/{}{}", TENANTS_RESOURCE, self.tenant_id, USERS_RESOURCE)
    }

    /// Create a user under the tenant
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ClientError> {
        let url = self.endpoint.resolve(&self.users_path(), ResourceId::None);
        debug!("Creating user {} in tenant {}", request.email, self.tenant_id);
        self.http.post(url, request, &self.api_key).await
    }

    /// Change the role of an existing user
    pub async fn update_user_role(
        &self,
        request: &UpdateUserRoleRequest,
    ) -> Result<UserRole, ClientError> {
        let user_id = request.user_id.to_string();
        let url = self
            .endpoint
            .resolve(&self.users_path(), ResourceId::Segment(&user_id));
        debug!("Updating role of user {} to {}", user_id, request.role);
        self.http.put(url, request, &self.api_key).await
    }
}
