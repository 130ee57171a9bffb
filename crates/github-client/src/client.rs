//! GitHub GraphQL HTTP client.

use crate::error::GithubError;
use crate::types::*;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

const RELEASE_BY_TAG_AND_TOTAL_COUNT_QUERY: &str = r#"query ReleaseByTagAndTotalCount($owner: String!, $name: String!, $tagName: String!) {
  repository(owner: $owner, name: $name) {
    releases {
      totalCount
    }
    release(tagName: $tagName) {
      tagName
      description
      updatedAt
    }
  }
}"#;

/// GitHub GraphQL client.
///
/// The personal access token is stored using `SecretString` so it never
/// shows up in logs or debug output.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: SecretString,
}

impl GithubClient {
    /// Create a new GitHub client for the given GraphQL endpoint.
    pub fn new(
        token: impl Into<String>,
        api_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GithubError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            token: SecretString::new(token.into()),
        })
    }

    /// Fetch the release tagged `tag` and the total release count of
    /// `owner/name`.
    #[instrument(skip(self))]
    pub async fn release_by_tag(
        &self,
        owner: &str,
        name: &str,
        tag: &str,
    ) -> Result<ReleaseAndTotalCount, GithubError> {
        let request = GraphQlRequest {
            query: RELEASE_BY_TAG_AND_TOTAL_COUNT_QUERY,
            variables: ReleaseByTagVariables {
                owner: owner.to_string(),
                name: name.to_string(),
                tag_name: tag.to_string(),
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.token.expose_secret()))
            .json(&request)
            .send()
            .await?;

        let body = self
            .handle_response::<GraphQlResponse<RepositoryData>>(response)
            .await?;

        if !body.errors.is_empty() {
            let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
            return Err(GithubError::GraphQl(messages.join("; ")));
        }

        let repository = body
            .data
            .and_then(|d| d.repository)
            .ok_or_else(|| GithubError::RepositoryNotFound(format!("{}/{}", owner, name)))?;

        Ok(ReleaseAndTotalCount {
            release: repository.release,
            total_count: repository.releases.total_count,
        })
    }

    /// Handle HTTP response, converting errors appropriately.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GithubError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            debug!("Response body: {}", body.chars().take(200).collect::<String>());
            serde_json::from_str(&body).map_err(GithubError::from)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract error information from failed response.
    async fn extract_error(&self, response: reqwest::Response) -> GithubError {
        let status = response.status();
        let rate_limited = response
            .headers()
            .get("x-ratelimit-remaining")
            .is_some_and(|remaining| remaining == "0");

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Rate limit exceeded");
                GithubError::RateLimit
            }
            StatusCode::FORBIDDEN if rate_limited => {
                warn!("Rate limit exceeded");
                GithubError::RateLimit
            }
            StatusCode::UNAUTHORIZED => {
                warn!("Authentication failed");
                GithubError::Unauthorized
            }
            _ => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".into());
                GithubError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}
