//! JSON-file backing for `AnalysisRepository`.
//!
//! Layout: `{"version": 1, "analyses": [...]}`, newest first. A bare array
//! (the unversioned layout) is still accepted on read.
//!
//! Writes within this process are serialized by a mutex and land via
//! temp-file-then-rename. Two processes sharing one file can still overwrite
//! each other's writes; that limitation is accepted.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::models::saved::SavedAnalysis;
use crate::store::{AnalysisRepository, StoreError, SCHEMA_VERSION};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Versioned {
        version: u32,
        analyses: Vec<SavedAnalysis>,
    },
    Unversioned(Vec<SavedAnalysis>),
}

#[derive(Debug, Serialize)]
struct StoredDocumentRef<'a> {
    version: u32,
    analyses: &'a [SavedAnalysis],
}

pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the collection. Missing file → empty; unreadable or unparseable
    /// content → empty plus a warning.
    async fn read_collection(&self) -> Vec<SavedAnalysis> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(
                    "Failed to read saved analyses from {}: {e}",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<StoredDocument>(&raw) {
            Ok(StoredDocument::Versioned { version, analyses }) if version <= SCHEMA_VERSION => {
                analyses
            }
            Ok(StoredDocument::Versioned { version, .. }) => {
                warn!(
                    "Saved analyses file has unknown schema version {version}; ignoring it"
                );
                Vec::new()
            }
            Ok(StoredDocument::Unversioned(analyses)) => {
                debug!("Read unversioned saved analyses file");
                analyses
            }
            Err(e) => {
                warn!(
                    "Failed to parse saved analyses from {}: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    async fn write_collection(&self, analyses: &[SavedAnalysis]) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(&StoredDocumentRef {
            version: SCHEMA_VERSION,
            analyses,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl AnalysisRepository for JsonFileStore {
    async fn load_all(&self) -> Vec<SavedAnalysis> {
        let _guard = self.lock.lock().await;
        self.read_collection().await
    }

    async fn save(&self, entry: SavedAnalysis) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut analyses = self.read_collection().await;
        if analyses.iter().any(|a| a.id == entry.id) {
            return Err(StoreError::DuplicateId(entry.id));
        }

        let id = entry.id.clone();
        analyses.insert(0, entry);
        self.write_collection(&analyses).await?;
        info!("Saved analysis {id} ({} total)", analyses.len());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut analyses = self.read_collection().await;
        let before = analyses.len();
        analyses.retain(|a| a.id != id);

        if analyses.len() == before {
            debug!("Delete of unknown saved analysis {id} ignored");
            return Ok(());
        }

        self.write_collection(&analyses).await?;
        info!("Deleted saved analysis {id} ({} remaining)", analyses.len());
        Ok(())
    }
}
