//! Policy Management Service client.

use crate::{
    client::ClientError,
    endpoint::{Endpoint, ResourceId, PMS_BASE_PATH, POLICIES_RESOURCE},
    http_utils::HttpClient,
    model::{PolicyRequest, PolicyResponse},
};
use tracing::debug;
use uuid::Uuid;

pub struct PmsClient {
    http: HttpClient,
    endpoint: Endpoint,
    api_key: String,
}

impl PmsClient {
    pub fn new(http: HttpClient, base_url: &str, api_key: String) -> Result<Self, ClientError> {
        Ok(Self {
            http,
            endpoint: Endpoint::new(base_url, PMS_BASE_PATH)?,
            api_key,
        })
    }

    pub async fn get_policy(&self, policy_id: &Uuid) -> Result<PolicyResponse, ClientError> {
        let policy_id = policy_id.to_string();
        let url = self
            .endpoint
            .resolve(POLICIES_RESOURCE, ResourceId::Segment(&policy_id));
        debug!("Fetching policy {}", policy_id);
        self.http.get(url, &self.api_key).await
    }

    /// List every policy visible to the API key
    pub async fn search_policies(&self) -> Result<Vec<PolicyResponse>, ClientError> {
        let url = self.endpoint.resolve(POLICIES_RESOURCE, ResourceId::None);
        debug!("Searching policies");
        self.http.get(url, &self.api_key).await
    }

    pub async fn create_policy(
        &self,
        request: &PolicyRequest,
    ) -> Result<PolicyResponse, ClientError> {
        let url = self.endpoint.resolve(POLICIES_RESOURCE, ResourceId::None);
        debug!("Creating policy {}", request.core.policy_name);
        self.http.post(url, request, &self.api_key).await
    }

    pub async fn delete_policy(&self, policy_id: &Uuid) -> Result<(), ClientError> {
        let policy_id = policy_id.to_string();
        let url = self
            .endpoint
            .resolve(POLICIES_RESOURCE, ResourceId::Segment(&policy_id));
        debug!("Deleting policy {}", policy_id);
        self.http.delete(url, &self.api_key).await
    }
}
