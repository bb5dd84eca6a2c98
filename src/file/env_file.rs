use std::{io, path::Path};

use tokio::fs;
use tracing::{info, instrument, warn};

use crate::resources::DEFAULT_GAME_VERSION;

pub static GAME_VERSION_KEY: &str = "NEXT_PUBLIC_GAME_VERSION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Added,
    Updated { previous: String },
    Unchanged,
}

/// A `KEY=VALUE` file, kept line by line so untouched lines survive a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    lines: Vec<String>,
}

impl EnvFile {
    pub fn parse(content: &str) -> Self {
        let lines = if content.is_empty() {
            Vec::new()
        } else {
            content.split('\n').map(String::from).collect()
        };
        Self { lines }
    }

    /// Returns `Ok(None)` if the file does not exist.
    pub async fn read(path: &Path) -> io::Result<Option<Self>> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(Some(Self::parse(&content))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        let prefix = format!("{}=", key);
        self.lines.iter().position(|line| line.starts_with(&prefix))
    }

    pub fn get<'a>(&'a self, key: &'a str) -> Option<&'a str> {
        self.values(key).next()
    }

    /// Values of every line for `key`, in file order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.lines.iter().filter_map(move |line| {
            line.strip_prefix(key)
                .and_then(|rest| rest.strip_prefix('='))
                .map(str::trim)
        })
    }

    pub fn set(&mut self, key: &str, value: &str) -> PatchOutcome {
        let line = format!("{}={}", key, value);
        match self.position(key) {
            Some(i) => {
                let previous = self.lines[i][key.len() + 1..].trim();
                if previous == value {
                    return PatchOutcome::Unchanged;
                }
                let previous = previous.to_owned();
                self.lines[i] = line;
                PatchOutcome::Updated { previous }
            }
            None => {
                // keep the trailing newline at the end of the file
                if self.lines.last().map_or(false, String::is_empty) {
                    let at = self.lines.len() - 1;
                    self.lines.insert(at, line);
                } else {
                    self.lines.push(line);
                }
                PatchOutcome::Added
            }
        }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Reads the game version from the `.env` file, falling back to the default.
#[instrument]
pub async fn resolve_game_version(path: &Path) -> String {
    match EnvFile::read(path).await {
        Ok(Some(env)) => {
            // an empty line does not hide a later one
            if let Some(version) = env.values(GAME_VERSION_KEY).find(|v| !v.is_empty()) {
                info!(%version, "Using game version from .env");
                return version.to_owned();
            }
        }
        Ok(None) => warn!(".env file not found"),
        Err(e) => warn!(error = %e, "Failed to read .env file"),
    }
    info!(version = DEFAULT_GAME_VERSION, "Using default game version");
    DEFAULT_GAME_VERSION.to_owned()
}

/// Sets the game version line, rewriting the whole file when it changed.
#[instrument]
pub async fn patch_game_version(path: &Path, version: &str) -> crate::Result<PatchOutcome> {
    let mut env = match EnvFile::read(path).await? {
        Some(env) => env,
        None => {
            info!("Creating new .env file");
            EnvFile::default()
        }
    };

    let outcome = env.set(GAME_VERSION_KEY, version);
    match &outcome {
        PatchOutcome::Unchanged => {
            info!(%version, "{} is already up to date", GAME_VERSION_KEY);
            return Ok(outcome);
        }
        PatchOutcome::Updated { previous } => {
            info!(%previous, %version, "Updated {}", GAME_VERSION_KEY)
        }
        PatchOutcome::Added => info!(%version, "Added {} to .env", GAME_VERSION_KEY),
    }
    fs::write(path, env.render()).await?;
    Ok(outcome)
}
