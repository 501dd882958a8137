//! Endpoint resolution for the backend services.
//!
//! An [`Endpoint`] is the configured base URL joined with a service base path
//! (for example `/management/v1`). Resource paths and identifiers are added as
//! individual path segments, so stray or doubled slashes in the inputs never
//! change the resulting URL.

use crate::client::ClientError;
use url::Url;

/// Base path of the Tenant Management Service
pub const TMS_BASE_PATH: &str = "/management/v1";
/// Base path of the Policy Management Service
pub const PMS_BASE_PATH: &str = "/management/v1";

pub const TENANTS_RESOURCE: &str = "/tenants";
pub const USERS_RESOURCE: &str = "/users";
pub const POLICIES_RESOURCE: &str = "/policies";

/// How a resource identifier is attached to the resolved URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceId<'a> {
    /// No identifier, e.g. list or create
    None,
    /// Appended as a trailing path segment, e.g. get by id
    Segment(&'a str),
    /// Appended as a query parameter, e.g. search
    Query(&'a str, &'a str),
}

/// Root URL of one backend service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    root: Url,
}

impl Endpoint {
    /// Combine the base URL with the service base path.
    pub fn new(base_url: &str, service_path: &str) -> Result<Endpoint, ClientError> {
        let mut root = Url::parse(base_url.trim()).map_err(|source| ClientError::MalformedUrl {
            url: base_url.to_string(),
            source,
        })?;

        if root.cannot_be_a_base() {
            return Err(ClientError::MalformedUrl {
                url: base_url.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }

        push_segments(&mut root, service_path);
        Ok(Endpoint { root })
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Build the URL of a resource below this endpoint.
    ///
    /// `resource` may contain several segments (`/tenants/{id}/users`).
    pub fn resolve(&self, resource: &str, id: ResourceId<'_>) -> Url {
        let mut url = self.root.clone();
        push_segments(&mut url, resource);

        match id {
            ResourceId::None => {}
            ResourceId::Segment(segment) => {
                // cannot_be_a_base was rejected in new()
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.push(segment);
                }
            }
            ResourceId::Query(name, value) => {
                url.query_pairs_mut().append_pair(name, value);
            }
        }

        url
    }
}

/// Resolve a full resource URL in one step.
pub fn resolve_endpoint(
    base_url: &str,
    service_path: &str,
    resource: &str,
    id: ResourceId<'_>,
) -> Result<Url, ClientError> {
    Ok(Endpoint::new(base_url, service_path)?.resolve(resource, id))
}

fn push_segments(url: &mut Url, path: &str) {
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
    }
}
