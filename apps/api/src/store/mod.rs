//! Local Persistence Store: past analyses kept as one ordered collection,
//! newest first.
//!
//! Callers only see `AnalysisRepository`; `JsonFileStore` is the default
//! backing. Every write is a whole-collection read-modify-write.

pub mod handlers;
pub mod json_file;

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use thiserror::Error;

use crate::models::saved::SavedAnalysis;

pub use json_file::JsonFileStore;

/// Version written into the persisted document.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Saved analysis id '{0}' already exists")]
    DuplicateId(String),
}

#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Full collection, newest first. Never fails: unreadable state is logged
    /// and treated as empty.
    async fn load_all(&self) -> Vec<SavedAnalysis>;

    /// Prepends `entry` and persists the whole collection.
    async fn save(&self, entry: SavedAnalysis) -> Result<(), StoreError>;

    /// Removes the entry with `id`, if any, and persists the remainder.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    async fn find(&self, id: &str) -> Option<SavedAnalysis> {
        self.load_all().await.into_iter().find(|a| a.id == id)
    }
}

/// Issues millisecond-timestamp ids that never repeat within the process,
/// nor collide with ids already persisted when it was seeded.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    /// Starts past the largest numeric id in `saved`, so a clock that went
    /// backwards across a restart cannot reissue a stored id.
    pub fn seeded_from(saved: &[SavedAnalysis]) -> Self {
        let last = saved
            .iter()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or_default();
        Self {
            last: AtomicU64::new(last),
        }
    }

    pub fn next_id(&self) -> String {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.next_at(now).to_string()
    }

    /// `now`, or one past the last issued id if the clock has not advanced.
    fn next_at(&self, now: u64) -> u64 {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }
}

/// `dd/mm/yyyy, HH:MM:SS`, the pt-BR rendering of a local timestamp.
pub fn format_saved_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d/%m/%Y, %H:%M:%S").to_string()
}

pub fn saved_at_now() -> String {
    format_saved_at(&Local::now())
}
