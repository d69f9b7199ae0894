//! Persisted player snapshot
//!
//! A single named record holding exactly the preference fields that survive
//! a restart. The catalog and category index are rebuilt fresh every
//! session (the underlying files may have changed), so they are never part
//! of the snapshot; neither is the search query.

use serde::{Deserialize, Serialize};

use chime_core::Song;

use crate::types::RepeatMode;

/// Fixed storage key for the persisted snapshot
pub const STORAGE_KEY: &str = "music-player-storage";

/// The persisted subset of player state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    /// Current song, restored as-is even if the rebuilt catalog no longer
    /// contains it
    pub current_song: Option<Song>,

    /// Volume in `[0, 1]`
    pub volume: f32,

    /// Shuffle flag
    pub shuffle: bool,

    /// Repeat mode
    pub repeat: RepeatMode,

    /// Selected category
    pub selected_category: String,
}
