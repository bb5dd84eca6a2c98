use std::io;

use tokio::fs;
use tracing::{info, instrument, warn};

use crate::{
    download::{FetchResult, Manager},
    file::{
        env_file::{patch_game_version, resolve_game_version, PatchOutcome},
        Hierarchy,
    },
    metadata::{assets::AssetEntry, manifest::UpdateManifest, versions::VersionList},
    resources::asset_table,
};

/// Outcomes of one download batch.
#[derive(Debug, Default)]
pub struct Summary {
    pub results: Vec<FetchResult>,
}

impl Summary {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &FetchResult> {
        self.results.iter().filter(|result| result.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FetchResult> {
        self.results.iter().filter(|result| !result.is_success())
    }
}

async fn read_versions(hierarchy: &Hierarchy) -> Option<VersionList> {
    let path = hierarchy.versions_path();
    let content = match fs::read(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(?path, "versions.json not found, skipping version update");
            return None;
        }
        Err(e) => {
            warn!(?path, error = %e, "Failed to read versions.json");
            return None;
        }
    };
    match serde_json::from_slice::<VersionList>(&content) {
        Ok(versions) if !versions.is_empty() => Some(versions),
        _ => {
            warn!("versions.json is empty or not an array");
            None
        }
    }
}

/// Points the `.env` game version at the newest entry of a previously
/// downloaded `versions.json`. Failures are logged and swallowed.
#[instrument(skip_all)]
pub async fn update_game_version(hierarchy: &Hierarchy) -> Option<PatchOutcome> {
    let versions = read_versions(hierarchy).await?;
    let Some(latest) = versions.latest() else {
        warn!("First entry of versions.json is not a string");
        return None;
    };
    info!(%latest, "Latest version found");
    match patch_game_version(&hierarchy.env_file, latest).await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            warn!(error = %e, "Failed to update game version");
            None
        }
    }
}

#[instrument(skip_all, fields(count = entries.len()))]
pub async fn sync_assets(
    manager: &Manager,
    hierarchy: &Hierarchy,
    entries: &[AssetEntry],
) -> Summary {
    let results = manager.download_all(entries, &hierarchy.assets_dir).await;
    let summary = Summary { results };
    info!(
        succeeded = summary.succeeded().count(),
        failed = summary.failed().count(),
        "Completed processing {} entries",
        summary.len()
    );
    summary
}

/// Patches the version, then downloads the built-in asset table for it.
pub async fn sync_versioned(manager: &Manager, hierarchy: &Hierarchy) -> Summary {
    sync_versioned_with(manager, hierarchy, asset_table).await
}

/// Same as [`sync_versioned`] with the table built by `table` from the
/// resolved version.
pub async fn sync_versioned_with<F>(
    manager: &Manager,
    hierarchy: &Hierarchy,
    table: F,
) -> Summary
where
    F: FnOnce(&str) -> Vec<AssetEntry>,
{
    update_game_version(hierarchy).await;
    let version = resolve_game_version(&hierarchy.env_file).await;
    sync_assets(manager, hierarchy, &table(&version)).await
}

/// Downloads the entries listed in `update.json`.
///
/// A missing or malformed manifest is the only error; an empty one returns
/// an empty summary without touching the network.
pub async fn sync_from_manifest(
    manager: &Manager,
    hierarchy: &Hierarchy,
) -> crate::Result<Summary> {
    let manifest = UpdateManifest::read(&hierarchy.manifest_path()).await?;
    if manifest.is_empty() {
        warn!("update.json is empty");
        return Ok(Summary::default());
    }
    if manifest.entries.is_empty() {
        warn!("No valid URL entries found in update.json");
        return Ok(Summary::default());
    }
    Ok(sync_assets(manager, hierarchy, &manifest.entries).await)
}
