//! Application metadata shown by the version and release notes commands.

use chrono::{DateTime, Utc};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub version: String,
    pub production: bool,
    /// When this process started.
    pub initialization_date: DateTime<Utc>,
    /// Last update of the release matching `version`.
    pub release_date: Option<DateTime<Utc>>,
    pub release_notes: Option<String>,
    pub total_release_count: Option<u32>,
}

/// Shared application metadata. Release fields are filled once GitHub answers.
#[derive(Debug)]
pub struct AppState {
    info: RwLock<AppInfo>,
}

impl AppState {
    pub fn new(version: impl Into<String>, production: bool) -> Self {
        Self {
            info: RwLock::new(AppInfo {
                version: version.into(),
                production,
                initialization_date: Utc::now(),
                release_date: None,
                release_notes: None,
                total_release_count: None,
            }),
        }
    }

    pub fn info(&self) -> AppInfo {
        self.info
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_production(&self) -> bool {
        self.info
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .production
    }

    pub fn update_release(&self, release_date: DateTime<Utc>, release_notes: String) {
        let mut info = self.info.write().unwrap_or_else(PoisonError::into_inner);
        debug!("app release date updated: {:?} -> {}", info.release_date, release_date);
        info.release_date = Some(release_date);
        info.release_notes = Some(release_notes);
    }

    pub fn update_total_release_count(&self, total_release_count: u32) {
        let mut info = self.info.write().unwrap_or_else(PoisonError::into_inner);
        debug!(
            "app total release count updated: {:?} -> {}",
            info.total_release_count, total_release_count
        );
        info.total_release_count = Some(total_release_count);
    }
}
