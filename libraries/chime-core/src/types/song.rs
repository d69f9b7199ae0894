/// Song domain type
use serde::{Deserialize, Serialize};

/// A playable song in the catalog
///
/// Immutable value once created. The `id` is derived deterministically from
/// the source path and is unique across a catalog: two songs with the same
/// id are the same song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier (the source path)
    pub id: String,

    /// Display title, derived from the file name
    pub title: String,

    /// Category, derived from the parent directory name
    pub category: String,

    /// Playable resource locator for the platform audio element
    pub url: String,
}

impl Song {
    /// Create a new song
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            url: url.into(),
        }
    }
}
