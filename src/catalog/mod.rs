pub mod video;

pub use video::{Video, VideoRecord};

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Embedded default catalog, used when no catalog file is configured.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Failure while building a catalog. All of these are fatal at startup -
/// a malformed catalog source is not a recoverable runtime condition.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains duplicate video id: {0}")]
    DuplicateId(String),
    #[error("catalog contains no videos")]
    Empty,
}

/// The fixed set of available videos, keyed by id.
///
/// Populated once at construction and read-only afterwards. Construction
/// rejects duplicate ids and empty sources, so every catalog a [`crate::Player`]
/// sees is non-empty with unique ids.
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    videos: HashMap<String, Video>,
}

impl VideoCatalog {
    /// Builds a catalog from raw records, enforcing the load-time invariants.
    pub fn from_records(records: Vec<VideoRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut videos = HashMap::with_capacity(records.len());
        for record in records {
            let video = Video::from(record);
            if let Some(previous) = videos.insert(video.id().to_string(), video) {
                return Err(CatalogError::DuplicateId(previous.id().to_string()));
            }
        }

        Ok(Self { videos })
    }

    /// Parses a JSON array of `{id, title, tags}` records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<VideoRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Loads a catalog from a file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!("Loaded {} videos from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn lookup(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// All videos, unordered. Callers sort for display.
    pub fn all(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
