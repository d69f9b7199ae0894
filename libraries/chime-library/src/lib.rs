//! Chime Library Builder
//!
//! Pure transform from a flat set of `(path, url)` asset pairs into a
//! normalized song catalog plus a category index.
//!
//! The host environment supplies the pairs (its build pipeline resolves each
//! bundled audio file to a servable URL); this crate only derives structure
//! from the path convention `.../<category>/<filename>.<ext>`.
//!
//! # Example
//!
//! ```rust
//! use chime_library::{LibraryBuilder, ALL_CATEGORY};
//!
//! let library = LibraryBuilder::new().root("/src/data/music").build([
//!     ("/src/data/music/Jazz/late_night_vibes.mp3", "/assets/a.mp3"),
//!     ("/src/data/music/Pop/summer_hit.mp3", "/assets/b.mp3"),
//! ]);
//!
//! assert_eq!(library.songs[0].title, "late night vibes");
//! assert_eq!(library.categories, vec![ALL_CATEGORY, "Jazz", "Pop"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;

pub use builder::{build_library, categories_of, LibraryBuilder};

use chime_core::Song;

/// Synthetic first entry of the category index, meaning "no filter applied"
pub const ALL_CATEGORY: &str = "All";

/// Fallback category for songs with no parent directory segment
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A built music library: the song catalog plus its category index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    /// Songs in discovery order
    pub songs: Vec<Song>,

    /// Sorted, deduplicated category names with [`ALL_CATEGORY`] prepended
    pub categories: Vec<String>,
}

impl Library {
    /// Create an empty library containing only the synthetic "All" category
    pub fn empty() -> Self {
        Self {
            songs: Vec::new(),
            categories: vec![ALL_CATEGORY.to_string()],
        }
    }
}
