use std::{
    env, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tokio::fs::{create_dir_all, write};
use tracing::{instrument, trace};

pub mod env_file;

pub static DEFAULT_ASSETS_DIR: &str = "src/utils/getLeagueAssets";

/// Where assets are written and which `.env` file tracks the game version.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    pub assets_dir: PathBuf,
    pub env_file: PathBuf,
}

impl Hierarchy {
    /// The `.env` file lives three directories above `assets_dir`. The path
    /// is built lexically so it resolves before `assets_dir` exists.
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        let assets_dir = assets_dir.into();
        let env_file = match assets_dir.ancestors().nth(3) {
            Some(root) if !root.as_os_str().is_empty() => root.join(".env"),
            Some(_) => PathBuf::from(".env"),
            None => assets_dir.join("../../../.env"),
        };
        Self {
            assets_dir,
            env_file,
        }
    }

    pub fn with_default_structure() -> io::Result<Self> {
        Ok(Self::new(env::current_dir()?.join(DEFAULT_ASSETS_DIR)))
    }

    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.assets_dir.join(format!("{}.json", name))
    }

    pub fn versions_path(&self) -> PathBuf {
        self.asset_path("versions")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.assets_dir.join("update.json")
    }
}

/// Writes `data` as 2-space indented JSON, keeping non-ASCII characters as is.
#[instrument(skip(data))]
pub async fn write_json(path: &Path, data: &Value) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).await?;
    }
    let filebuf =
        serde_json::to_vec_pretty(data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    trace!(len = filebuf.len(), "Writing JSON");
    write(path, filebuf).await
}
