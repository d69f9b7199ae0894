//! Chime Core
//!
//! Platform-agnostic core types, traits, and error handling for the Chime
//! music player.
//!
//! This crate defines:
//! - **Domain Types**: [`Song`]
//! - **Core Traits**: [`SettingsStore`] (opaque key-value persistence)
//! - **Error Handling**: unified [`ChimeError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use chime_core::Song;
//!
//! let song = Song::new(
//!     "/music/Jazz/late_night_vibes.mp3",
//!     "late night vibes",
//!     "Jazz",
//!     "/assets/late_night_vibes.mp3",
//! );
//! assert_eq!(song.category, "Jazz");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod settings;
pub mod types;

// Re-export commonly used types
pub use error::{ChimeError, Result};
pub use settings::SettingsStore;
pub use types::Song;
