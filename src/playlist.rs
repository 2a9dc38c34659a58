use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::service::Track;
use crate::storage::PlaylistSlot;

const CURRENT_VERSION: u32 = 1;

/// On-disk form of the playlist. Versioned so a future format change can
/// migrate instead of discarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedPlaylist {
    pub version: u32,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl PersistedPlaylist {
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self {
            version: CURRENT_VERSION,
            tracks,
        }
    }
}

/// Outcome of an insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The track was inserted at this position.
    Inserted(usize),
    /// A track with the same id already exists; nothing changed and nothing
    /// was persisted.
    Duplicate,
}

/// The canonical ordered, deduplicated playlist.
///
/// The persisted slot is the source of truth: every read re-parses it, and
/// every mutation is one synchronous read-compute-persist sequence with no
/// suspension point in between. Absent and corrupt data both read as an
/// empty list.
pub struct PlaylistStore {
    slot: Box<dyn PlaylistSlot>,
}

impl PlaylistStore {
    pub fn new(slot: Box<dyn PlaylistSlot>) -> Self {
        Self { slot }
    }

    /// The full playlist, in order. Never fails — a missing slot and an
    /// unparsable one degrade to empty.
    pub fn list(&self) -> Vec<Track> {
        let raw = match self.slot.get() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read playlist slot: {e}");
                return Vec::new();
            }
        };

        match toml::from_str::<PersistedPlaylist>(&raw) {
            Ok(persisted) => persisted.tracks,
            Err(e) => {
                tracing::warn!("Playlist data corrupt, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    fn persist(&self, tracks: Vec<Track>) -> Result<()> {
        let contents = toml::to_string_pretty(&PersistedPlaylist::from_tracks(tracks))
            .context("Failed to serialize playlist")?;
        self.slot
            .set(&contents)
            .context("Failed to write playlist slot")
    }

    /// Position convention: positive positions clamp to the list length;
    /// negative positions map through `len - pos + 1`, which lands past the
    /// end for small magnitudes (so the default of `-1` appends), and clamp
    /// back into range.
    fn normalize_position(pos: i64, len: usize) -> usize {
        let len = len as i64;
        let raw = if pos < 0 { len - pos + 1 } else { pos };
        raw.clamp(0, len) as usize
    }

    /// Insert `track` at `pos` unless its id is already present.
    ///
    /// Returns the actual insertion position so a view can insert
    /// incrementally instead of redrawing from scratch.
    pub fn insert(&self, track: Track, pos: i64) -> Result<InsertOutcome> {
        let mut tracks = self.list();

        if tracks.iter().any(|t| t.id == track.id) {
            return Ok(InsertOutcome::Duplicate);
        }

        let position = Self::normalize_position(pos, tracks.len());
        tracks.insert(position, track);
        self.persist(tracks)?;

        Ok(InsertOutcome::Inserted(position))
    }

    /// Insert at the default position (append).
    pub fn insert_end(&self, track: Track) -> Result<InsertOutcome> {
        self.insert(track, -1)
    }

    /// Remove every entry with this id and persist the result.
    ///
    /// Removing an absent id is a no-op in effect, though the slot is still
    /// rewritten.
    pub fn remove(&self, id: &str) -> Result<()> {
        let tracks: Vec<Track> = self.list().into_iter().filter(|t| t.id != id).collect();
        self.persist(tracks)
    }
}
