//! GraphQL request and response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GraphQL request body.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<V> {
    pub query: &'static str,
    pub variables: V,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseByTagVariables {
    pub owner: String,
    pub name: String,
    pub tag_name: String,
}

/// GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryData {
    pub repository: Option<Repository>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub releases: ReleaseConnection,
    pub release: Option<Release>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConnection {
    pub total_count: u32,
}

/// A published release.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Release matching a tag, plus how many releases the repository has.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseAndTotalCount {
    /// `None` when no release carries the requested tag.
    pub release: Option<Release>,
    pub total_count: u32,
}
