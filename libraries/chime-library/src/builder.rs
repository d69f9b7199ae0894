//! Library building from asset path pairs

use std::collections::BTreeSet;

use chime_core::Song;

use crate::{Library, ALL_CATEGORY, UNCATEGORIZED};

/// Builds a [`Library`] from `(path, url)` asset pairs
///
/// Paths follow the convention `.../<category>/<filename>.<ext>`. An
/// optional catalog root can be set; it is stripped from each path before
/// the category segment is derived, so files directly under the root fall
/// back to [`UNCATEGORIZED`].
#[derive(Debug, Clone, Default)]
pub struct LibraryBuilder {
    /// Catalog root prefix stripped before segmenting
    root: Option<String>,
}

impl LibraryBuilder {
    /// Create a new builder with no catalog root
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog root prefix
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Build a library from `(path, url)` pairs
    ///
    /// Songs come out in the iteration order of the input. Malformed paths
    /// never fail: a path with no directory component gets the sentinel
    /// category, a filename with no extension is its own title.
    pub fn build<I, P, U>(&self, pairs: I) -> Library
    where
        I: IntoIterator<Item = (P, U)>,
        P: Into<String>,
        U: Into<String>,
    {
        let songs: Vec<Song> = pairs
            .into_iter()
            .map(|(path, url)| self.song_from_pair(path.into(), url.into()))
            .collect();

        let categories = categories_of(&songs);

        Library { songs, categories }
    }

    fn song_from_pair(&self, path: String, url: String) -> Song {
        let relative = match &self.root {
            Some(root) => path
                .strip_prefix(root.trim_end_matches('/'))
                .unwrap_or(&path),
            None => &path,
        };

        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();

        let file_name = segments.last().copied().unwrap_or_default();
        let category = if segments.len() >= 2 {
            segments[segments.len() - 2].to_string()
        } else {
            UNCATEGORIZED.to_string()
        };
        let title = title_of(file_name);

        // The full original path stays the id: paths are unique on disk,
        // so ids are unique in the catalog.
        Song {
            id: path,
            title,
            category,
            url,
        }
    }
}

/// Derive a display title from a file name
///
/// Strips a trailing `.<ext>` (only when the extension is non-empty) and
/// replaces underscores with spaces. A file name with no extension is
/// returned unchanged apart from the underscore replacement.
fn title_of(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => stem,
        _ => file_name,
    };
    stem.replace('_', " ")
}

/// Compute the category index for a catalog
///
/// Distinct category values, sorted ascending and deduplicated, with
/// [`ALL_CATEGORY`] as element 0 regardless of input order.
pub fn categories_of(songs: &[Song]) -> Vec<String> {
    let distinct: BTreeSet<&str> = songs.iter().map(|s| s.category.as_str()).collect();

    let mut categories = Vec::with_capacity(distinct.len() + 1);
    categories.push(ALL_CATEGORY.to_string());
    categories.extend(distinct.into_iter().map(String::from));
    categories
}

/// Build a library with no catalog root configured
pub fn build_library<I, P, U>(pairs: I) -> Library
where
    I: IntoIterator<Item = (P, U)>,
    P: Into<String>,
    U: Into<String>,
{
    LibraryBuilder::new().build(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorized_path() {
        let library = LibraryBuilder::new()
            .root("/src/data/music")
            .build([("/src/data/music/Jazz/late_night_vibes.mp3", "/a.mp3")]);

        let song = &library.songs[0];
        assert_eq!(song.category, "Jazz");
        assert_eq!(song.title, "late night vibes");
        assert_eq!(song.id, "/src/data/music/Jazz/late_night_vibes.mp3");
        assert_eq!(song.url, "/a.mp3");
    }

    #[test]
    fn root_level_file_is_uncategorized() {
        let library = LibraryBuilder::new()
            .root("/src/data/music")
            .build([("/src/data/music/song.mp3", "/b.mp3")]);

        let song = &library.songs[0];
        assert_eq!(song.category, UNCATEGORIZED);
        assert_eq!(song.title, "song");
    }

    #[test]
    fn no_root_uses_parent_segment() {
        let library = build_library([("Pop/summer_hit.mp3", "/c.mp3")]);
        assert_eq!(library.songs[0].category, "Pop");
        assert_eq!(library.songs[0].title, "summer hit");
    }

    #[test]
    fn single_segment_path_is_uncategorized() {
        let library = build_library([("lonely.mp3", "/d.mp3")]);
        assert_eq!(library.songs[0].category, UNCATEGORIZED);
    }

    #[test]
    fn title_strips_only_trailing_extension() {
        assert_eq!(title_of("archive.tar.gz"), "archive.tar");
        assert_eq!(title_of("late_night_vibes.mp3"), "late night vibes");
    }

    #[test]
    fn title_without_extension_is_unchanged() {
        assert_eq!(title_of("noext"), "noext");
        // A trailing dot is not an extension
        assert_eq!(title_of("trailing."), "trailing.");
    }

    #[test]
    fn categories_sorted_deduped_with_all_first() {
        let library = build_library([
            ("Rock/one.mp3", "/1"),
            ("Ambient/two.mp3", "/2"),
            ("Rock/three.mp3", "/3"),
            ("Jazz/four.mp3", "/4"),
        ]);

        assert_eq!(library.categories, vec!["All", "Ambient", "Jazz", "Rock"]);
    }

    #[test]
    fn songs_keep_input_order() {
        let library = build_library([("Rock/b.mp3", "/1"), ("Ambient/a.mp3", "/2")]);
        assert_eq!(library.songs[0].id, "Rock/b.mp3");
        assert_eq!(library.songs[1].id, "Ambient/a.mp3");
    }

    #[test]
    fn empty_input_yields_only_all() {
        let library = build_library(Vec::<(String, String)>::new());
        assert!(library.songs.is_empty());
        assert_eq!(library.categories, vec![ALL_CATEGORY]);
    }

    #[test]
    fn degenerate_paths_do_not_panic() {
        let library = build_library([("", "/1"), ("///", "/2")]);
        assert_eq!(library.songs.len(), 2);
        assert_eq!(library.songs[0].category, UNCATEGORIZED);
        assert_eq!(library.songs[0].title, "");
        assert_eq!(library.songs[1].category, UNCATEGORIZED);
    }
}
