//! Player events
//!
//! Events are emitted synchronously after each completed store action so
//! that presentation code and the audio bridge reconciler can follow state
//! without polling.

use serde::{Deserialize, Serialize};

use chime_core::Song;

use crate::types::RepeatMode;

/// Events emitted by [`PlayerStore`](crate::PlayerStore)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The catalog was replaced (categories were recomputed)
    CatalogReplaced {
        /// Number of songs in the new catalog
        songs: usize,
    },

    /// The selected category changed
    CategorySelected {
        /// The newly selected category
        category: String,
    },

    /// The current song changed
    SongChanged {
        /// The new current song, or `None` when cleared
        song: Option<Song>,
    },

    /// The desired transport state changed
    PlayingChanged {
        /// Whether playback is now desired
        is_playing: bool,
    },

    /// The volume changed
    VolumeChanged {
        /// New volume in `[0, 1]`
        volume: f32,
    },

    /// Shuffle was toggled
    ShuffleChanged {
        /// New shuffle flag
        shuffle: bool,
    },

    /// The repeat mode changed
    RepeatChanged {
        /// New repeat mode
        repeat: RepeatMode,
    },
}
