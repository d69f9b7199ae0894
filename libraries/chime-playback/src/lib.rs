//! Chime Playback
//!
//! Platform-agnostic player state machine for the Chime music player.
//!
//! This crate provides:
//! - [`PlayerStore`] — the single state container: catalog, category
//!   selection, current song, desired transport state, volume, shuffle,
//!   repeat
//! - Next/previous selection over the active (category-filtered) list,
//!   with shuffle and wrap-around semantics
//! - Preference persistence through an injected
//!   [`SettingsStore`](chime_core::SettingsStore)
//! - A synchronous listener mechanism ([`PlayerEvent`])
//! - The audio bridge boundary: [`AudioOutput`] commands, [`AudioEvent`]
//!   inputs, and [`AudioReconciler`] which keeps the platform media element
//!   converged on the store's desired state
//!
//! # Architecture
//!
//! `chime-playback` performs no I/O of its own beyond the injected settings
//! store and issues no media commands directly. The host owns the real
//! audio element (an HTML audio element behind a WASM bridge, a native
//! player, a silent mock in tests) and implements [`AudioOutput`]; it
//! forwards the element's events and play outcomes back to the reconciler.
//!
//! # Example
//!
//! ```rust
//! use chime_library::build_library;
//! use chime_playback::PlayerStore;
//! use chime_storage::MemoryStore;
//!
//! let library = build_library([
//!     ("Jazz/late_night_vibes.mp3", "/assets/a.mp3"),
//!     ("Pop/summer_hit.mp3", "/assets/b.mp3"),
//! ]);
//! let mut player = PlayerStore::new(library, Box::new(MemoryStore::new()));
//!
//! let first = player.songs()[0].clone();
//! player.select_song(&first);
//! assert!(player.is_playing());
//!
//! player.next_song();
//! assert_eq!(player.current_song().unwrap().title, "summer hit");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bridge;
mod error;
mod events;
mod snapshot;
mod store;
pub mod types;

// Public exports
pub use bridge::{AudioEvent, AudioOutput, AudioReconciler, PlayToken};
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use snapshot::{PlayerSnapshot, STORAGE_KEY};
pub use store::{Listener, PlayerStore};
pub use types::{PlayerConfig, RepeatMode};
