use std::{
    fmt::Debug,
    io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use futures_util::{stream, StreamExt};
use reqwest::{Client, IntoUrl};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::{file::write_json, metadata::assets::AssetEntry};

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Network error - {0}")]
    Network(#[from] reqwest::Error),
    #[error("Invalid JSON - {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Write(#[from] io::Error),
}

#[derive(Debug)]
pub struct FetchResult {
    pub name: String,
    /// Path of the written file.
    pub outcome: Result<PathBuf, FetchError>,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Requests in flight at once.
    pub concurrency: usize,
    /// Total time allowed per request, body included.
    pub timeout: Duration,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            concurrency: 10,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug)]
pub struct Manager {
    client: Client,
    concurrency: usize,
    downloaded_bytes: AtomicU64,
}

impl Manager {
    pub fn new(client: Client, concurrency: usize) -> Self {
        Self {
            client,
            concurrency: concurrency.max(1),
            downloaded_bytes: AtomicU64::new(0),
        }
    }

    pub fn with_limits(limits: Limits) -> crate::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(limits.timeout)
            .pool_max_idle_per_host(limits.concurrency)
            .build()?;
        Ok(Self::new(client, limits.concurrency))
    }

    pub fn downloaded_bytes(&self) -> u64 {
        self.downloaded_bytes.load(Ordering::Relaxed)
    }

    #[instrument(skip(self))]
    pub async fn fetch_json<U>(&self, url: U) -> Result<Value, FetchError>
    where
        U: IntoUrl + Debug,
    {
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!(?response, "Remote responded");
        let body = response.bytes().await?;
        self.downloaded_bytes
            .fetch_add(body.len() as u64, Ordering::Relaxed);
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches one entry and writes it to `<dir>/<name>.json`.
    pub async fn download_json(&self, entry: &AssetEntry, dir: &Path) -> FetchResult {
        info!("Downloading {}...", entry);
        let outcome = async {
            let data = self.fetch_json(entry.url.as_str()).await?;
            let path = dir.join(entry.file_name());
            write_json(&path, &data).await?;
            Ok::<_, FetchError>(path)
        }
        .await;

        match &outcome {
            Ok(_) => info!("Saved as {}", entry.file_name()),
            Err(e) => error!("Failed to download {}: {}", entry.name, e),
        }
        FetchResult {
            name: entry.name.clone(),
            outcome,
        }
    }

    /// Downloads every entry, never more than `concurrency` at once, and
    /// collects each outcome once all of them settled.
    #[instrument(skip_all, fields(count = entries.len()))]
    pub async fn download_all(&self, entries: &[AssetEntry], dir: &Path) -> Vec<FetchResult> {
        stream::iter(entries)
            .map(|entry| self.download_json(entry, dir))
            .buffer_unordered(self.concurrency)
            .collect()
            .await
    }
}
