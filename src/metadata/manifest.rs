use std::{io, path::Path};

use serde_json::Value;
use tokio::fs;
use tracing::{instrument, warn};

use super::assets::AssetEntry;
use crate::Error;

/// The `update.json` name → URL mapping, in file order.
#[derive(Debug, Default, Clone)]
pub struct UpdateManifest {
    pub entries: Vec<AssetEntry>,
    /// Keys whose value was not a string.
    pub skipped: Vec<String>,
}

impl UpdateManifest {
    /// Returns `None` when the document is not a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };
        let mut manifest = Self::default();
        for (name, url) in map {
            match url {
                Value::String(url) => manifest.entries.push(AssetEntry::new(name, url)),
                other => {
                    warn!(%name, value = %other, "Skipping entry without a string URL");
                    manifest.skipped.push(name);
                }
            }
        }
        Some(manifest)
    }

    #[instrument]
    pub async fn read(path: &Path) -> crate::Result<Self> {
        let content = match fs::read(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ManifestNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(e.into()),
        };
        let value: Value = serde_json::from_slice(&content)?;
        Self::from_value(value).ok_or_else(|| Error::ManifestNotObject(path.to_path_buf()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.skipped.is_empty()
    }
}
