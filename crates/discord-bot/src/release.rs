//! Startup synchronization of release metadata from GitHub.

use crate::app_state::AppState;
use crate::error::AppResult;
use github_client::{humanize_release_notes, GithubClient};
use tracing::{error, info};

/// Fetch the release matching the running version and store its date,
/// humanized notes and the total release count.
///
/// A missing release is logged and leaves the release fields unset.
pub async fn sync_release_metadata(
    client: &GithubClient,
    app: &AppState,
    owner: &str,
    repository: &str,
) -> AppResult<()> {
    let version = app.info().version;
    let result = client.release_by_tag(owner, repository, &version).await?;

    app.update_total_release_count(result.total_count);

    match result.release {
        Some(release) => {
            let notes = humanize_release_notes(release.description.as_deref().unwrap_or_default());
            app.update_release(release.updated_at, notes);
            info!(
                "Release {} found ({} releases in total)",
                version, result.total_count
            );
        }
        None => error!("No GitHub release found for version {}", version),
    }

    Ok(())
}
