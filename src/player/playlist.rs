use std::collections::HashMap;

use tracing::{debug, info};

/// A named, ordered sequence of video ids. Duplicates are forbidden; the
/// player checks membership before every insert.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// The name as first typed at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contained ids in insertion order.
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    pub(crate) fn push(&mut self, video_id: String) {
        self.video_ids.push(video_id);
    }

    pub(crate) fn remove(&mut self, video_id: &str) -> bool {
        if let Some(pos) = self.video_ids.iter().position(|id| id == video_id) {
            self.video_ids.remove(pos);
            true
        } else {
            false
        }
    }

    pub(crate) fn clear(&mut self) {
        self.video_ids.clear();
    }
}

/// All playlists of a session.
///
/// Two maps kept in sync: canonical name -> playlist, and lowercased name ->
/// canonical name. The second gives O(1) case-insensitive resolution; the
/// create/remove paths are the only writers, so the maps cannot drift.
#[derive(Debug, Clone, Default)]
pub struct PlaylistSet {
    by_canonical: HashMap<String, Playlist>,
    canonical_by_lower: HashMap<String, String>,
}

impl PlaylistSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a user-supplied name to the stored canonical name, if any
    /// playlist matches case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let canonical = self.canonical_by_lower.get(&name.to_lowercase());
        if canonical.is_none() {
            debug!("No playlist matches '{}'", name);
        }
        canonical.map(String::as_str)
    }

    /// Creates an empty playlist under the as-typed name. Returns false and
    /// changes nothing when a case-insensitive match already exists.
    pub fn create(&mut self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if self.canonical_by_lower.contains_key(&lower) {
            return false;
        }

        self.canonical_by_lower.insert(lower, name.to_string());
        self.by_canonical
            .insert(name.to_string(), Playlist::new(name.to_string()));
        info!("Created playlist '{}'", name);
        true
    }

    /// Removes a playlist by its canonical name, dropping the index entry
    /// with it.
    pub fn remove(&mut self, canonical: &str) -> Option<Playlist> {
        let removed = self.by_canonical.remove(canonical);
        if removed.is_some() {
            self.canonical_by_lower.remove(&canonical.to_lowercase());
            info!("Deleted playlist '{}'", canonical);
        }
        removed
    }

    /// Case-insensitive lookup of a playlist by any casing of its name.
    pub fn find(&self, name: &str) -> Option<&Playlist> {
        let canonical = self.canonical_by_lower.get(&name.to_lowercase())?;
        self.by_canonical.get(canonical)
    }

    /// Like [`find`](Self::find), returning the canonical name alongside the
    /// playlist for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<(String, &mut Playlist)> {
        let canonical = self.canonical_by_lower.get(&name.to_lowercase())?.clone();
        let playlist = self.by_canonical.get_mut(&canonical)?;
        Some((canonical, playlist))
    }

    /// Canonical names, unordered. Callers sort for display.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_canonical.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_canonical.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_canonical.len()
    }
}
