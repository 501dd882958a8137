//! Request and response shapes exchanged with the Tenant Management Service
//! (TMS) and the Policy Management Service (PMS).
//!
//! Requests are built fresh for every invocation and responses are read-only
//! projections of what the server returned. Field order in each struct is the
//! order used when the value is rendered for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use uuid::Uuid;

/// Role of a user within a tenant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Role {
    #[serde(rename = "Tenant Admin")]
    #[strum(serialize = "Tenant Admin")]
    TenantAdmin,
    #[serde(rename = "User")]
    #[strum(serialize = "User")]
    User,
}

impl Role {
    /// Returns the wire names of every allowed role
    pub fn names() -> Vec<&'static str> {
        Role::iter().map(<&'static str>::from).collect()
    }
}

/// Body of the create-user call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub role: Role,
}

/// Body of the update-user-role call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRoleRequest {
    pub user_id: Uuid,
    pub role: Role,
}

/// Read a missing or `null` field as its zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A tenant user as returned by the TMS after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    pub role: Role,
}

/// Result of a role update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: Uuid,
    pub role: Role,
}

/// Policy fields shared by requests and responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyCore {
    /// Assigned by the server; the nil UUID when creating a new policy
    #[serde(default)]
    pub policy_id: Uuid,
    pub policy: String,
    pub policy_name: String,
    pub policy_type: String,
    pub service_offer_id: Uuid,
    pub service_offer_name: String,
}

/// Body of the create-policy call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRequest {
    #[serde(flatten)]
    pub core: PolicyCore,
    pub user_id: Uuid,
}

/// A stored policy together with the metadata the PMS attaches to it.
///
/// Metadata the server leaves out or sends as `null` reads as its zero value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyResponse {
    #[serde(flatten)]
    pub core: PolicyCore,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creator_id: Uuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updater_id: Uuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deleted: bool,
    #[serde(rename = "created_time", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "modified_time", default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub policy_hash: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub policy_signature: String,
}
