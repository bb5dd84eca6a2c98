use std::{io, path::PathBuf, result};

pub mod download;
pub mod file;
pub mod metadata;
pub mod resources;
pub mod sync;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{} not found", .0.display())]
    ManifestNotFound(PathBuf),
    #[error("{} should contain a JSON object", .0.display())]
    ManifestNotObject(PathBuf),
}

pub type Result<T> = result::Result<T, Error>;
