//! Baseline persistence.
//!
//! The baseline is a flat JSON array of service labels (`["22 (SSH)", ...]`).
//! History snapshots are written next to it as `<stem>_<YYYYmmddTHHMM><ext>`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::debug;

pub const DEFAULT_BASELINE_FILE: &str = "baseline.json";
const HISTORY_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M";
const DEFAULT_EXTENSION: &str = "json";

pub type Result<T> = std::result::Result<T, BaselineError>;

#[derive(Error, Debug)]
pub enum BaselineError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed baseline {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A timestamped copy of a baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub timestamp_utc: String,
    pub baseline: Vec<String>,
}

/// What to do with the baseline file after a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineAction {
    /// No baseline existed, write the current scan as the first one.
    Create,
    /// The caller asked to overwrite the baseline.
    Update,
    /// Leave the baseline untouched.
    Keep,
}

impl BaselineAction {
    pub fn decide(baseline_existed: bool, update_requested: bool) -> Self {
        match (baseline_existed, update_requested) {
            (false, _) => BaselineAction::Create,
            (true, true) => BaselineAction::Update,
            (true, false) => BaselineAction::Keep,
        }
    }

    pub fn writes(&self) -> bool {
        !matches!(self, BaselineAction::Keep)
    }
}

/// Reads and writes the baseline file at a fixed path.
#[derive(Debug, Clone)]
pub struct BaselineStore {
    path: PathBuf,
}

impl BaselineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the stored labels. A missing file is an empty baseline.
    pub async fn load(&self) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no baseline on disk");
                return Ok(Vec::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_str(&content).map_err(|source| BaselineError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrites the baseline with `labels`.
    ///
    /// With `keep_history`, a timestamped snapshot is written as well and its
    /// path is returned.
    pub async fn save(&self, labels: &[String], keep_history: bool) -> Result<Option<PathBuf>> {
        self.save_at(labels, keep_history, Utc::now()).await
    }

    async fn save_at(
        &self,
        labels: &[String],
        keep_history: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<PathBuf>> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        write_json_atomic(&self.path, labels).await?;
        debug!(path = %self.path.display(), labels = labels.len(), "baseline written");

        if !keep_history {
            return Ok(None);
        }

        let timestamp: String = now.format(HISTORY_TIMESTAMP_FORMAT).to_string();
        let history_path: PathBuf = self.history_path(&timestamp);
        let snapshot = HistorySnapshot {
            timestamp_utc: timestamp,
            baseline: labels.to_vec(),
        };
        write_json_atomic(&history_path, &snapshot).await?;
        debug!(path = %history_path.display(), "history snapshot written");

        Ok(Some(history_path))
    }

    /// Path of the history snapshot taken at `timestamp`.
    ///
    /// `scans/baseline.json` becomes `scans/baseline_<timestamp>.json`; a
    /// baseline without an extension gets `.json`.
    pub fn history_path(&self, timestamp: &str) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        self.path.with_file_name(format!("{stem}_{timestamp}.{ext}"))
    }

    fn io_error(&self, source: std::io::Error) -> BaselineError {
        BaselineError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for BaselineStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASELINE_FILE)
    }
}

/// Writes pretty JSON to a sibling temp file, then renames it over `path`.
async fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(|source| BaselineError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tmp_name: OsString = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let io_error = |source: std::io::Error| BaselineError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::write(&tmp_path, content).await.map_err(io_error)?;
    fs::rename(&tmp_path, path).await.map_err(io_error)?;
    Ok(())
}
