//! GitHub GraphQL client for release metadata.

mod client;
mod error;
mod release_notes;
mod types;

pub use client::GithubClient;
pub use error::GithubError;
pub use release_notes::humanize_release_notes;
pub use types::*;

/// Public GitHub GraphQL endpoint.
pub const GITHUB_API_URL: &str = "https://api.github.com/graphql";
