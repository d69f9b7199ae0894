//! Player state container
//!
//! [`PlayerStore`] owns all mutable application state and every transition.
//! It is the single shared resource of the system: presentation reads it
//! freely through the accessors and mutates it only through the action
//! methods. All actions are synchronous and run to completion; listeners
//! are notified synchronously after each one.

use rand::Rng;
use tracing::warn;

use chime_core::{SettingsStore, Song};
use chime_library::{categories_of, Library, ALL_CATEGORY};

use crate::events::PlayerEvent;
use crate::snapshot::{PlayerSnapshot, STORAGE_KEY};
use crate::types::{PlayerConfig, RepeatMode};

/// Listener invoked synchronously after each completed action
pub type Listener = Box<dyn FnMut(&PlayerEvent)>;

enum Direction {
    Forward,
    Backward,
}

/// The player state machine
///
/// Owns the catalog, UI selection, transport state, and persisted
/// preferences. Preferences (`current_song`, `volume`, `shuffle`, `repeat`,
/// `selected_category`) are written through the settings store after every
/// change and restored at construction; the catalog is always seeded fresh
/// from a [`Library`].
pub struct PlayerStore {
    songs: Vec<Song>,
    categories: Vec<String>,
    selected_category: String,
    search_query: String,
    current_song: Option<Song>,
    is_playing: bool,
    volume: f32,
    shuffle: bool,
    repeat: RepeatMode,

    settings: Box<dyn SettingsStore>,
    listeners: Vec<Listener>,
}

impl PlayerStore {
    /// Create a player seeded from `library` with default configuration,
    /// then restore any persisted snapshot on top
    pub fn new(library: Library, settings: Box<dyn SettingsStore>) -> Self {
        Self::with_config(library, settings, PlayerConfig::default())
    }

    /// Create a player with explicit initial configuration
    pub fn with_config(
        library: Library,
        settings: Box<dyn SettingsStore>,
        config: PlayerConfig,
    ) -> Self {
        let mut store = Self {
            songs: library.songs,
            categories: library.categories,
            selected_category: config.selected_category,
            search_query: String::new(),
            current_song: None,
            is_playing: false,
            volume: config.volume,
            shuffle: config.shuffle,
            repeat: config.repeat,
            settings,
            listeners: Vec::new(),
        };
        store.restore();
        store
    }

    // ===== Actions =====

    /// Replace the catalog; the category index is recomputed from the new
    /// catalog
    pub fn set_songs(&mut self, songs: Vec<Song>) {
        self.categories = categories_of(&songs);
        self.songs = songs;
        self.emit(PlayerEvent::CatalogReplaced {
            songs: self.songs.len(),
        });
    }

    /// Select a category filter
    ///
    /// Does not touch the current song; the value is not validated against
    /// the known categories.
    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        self.persist();
        self.emit(PlayerEvent::CategorySelected {
            category: self.selected_category.clone(),
        });
    }

    /// Set the search query (reserved for presentation, never persisted)
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Set or clear the current song without starting playback
    pub fn set_current_song(&mut self, song: Option<Song>) {
        self.current_song = song;
        self.persist();
        self.emit(PlayerEvent::SongChanged {
            song: self.current_song.clone(),
        });
    }

    /// Set the desired transport state
    pub fn set_is_playing(&mut self, is_playing: bool) {
        self.is_playing = is_playing;
        self.emit(PlayerEvent::PlayingChanged { is_playing });
    }

    /// Set the volume
    ///
    /// Expected in `[0, 1]` but deliberately not clamped here; the caller
    /// constrains the range.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.persist();
        self.emit(PlayerEvent::VolumeChanged { volume });
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        self.persist();
        self.emit(PlayerEvent::ShuffleChanged {
            shuffle: self.shuffle,
        });
    }

    /// Set the repeat mode
    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
        self.persist();
        self.emit(PlayerEvent::RepeatChanged { repeat });
    }

    /// Advance to the next song in the active list and start playing
    ///
    /// No-op when there is no current song or the active list is empty.
    /// With shuffle on, picks a uniformly random index (which may repeat
    /// the current song).
    pub fn next_song(&mut self) {
        self.step(Direction::Forward);
    }

    /// Go back to the previous song in the active list and start playing
    pub fn prev_song(&mut self) {
        self.step(Direction::Backward);
    }

    /// Select a song from the list
    ///
    /// Selecting the current song toggles play/pause; selecting a
    /// different song makes it current and forces playback on.
    pub fn select_song(&mut self, song: &Song) {
        match &self.current_song {
            Some(current) if current.id == song.id => {
                let toggled = !self.is_playing;
                self.set_is_playing(toggled);
            }
            _ => {
                self.set_current_song(Some(song.clone()));
                self.set_is_playing(true);
            }
        }
    }

    /// Register a listener notified synchronously after each action
    pub fn subscribe(&mut self, listener: impl FnMut(&PlayerEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ===== State access =====

    /// The full catalog in discovery order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// The category index ("All" first, then sorted distinct categories)
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The currently selected category
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// The current search query
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The current song, if any
    pub fn current_song(&self) -> Option<&Song> {
        self.current_song.as_ref()
    }

    /// The desired transport state (the audio element may lag behind until
    /// the bridge reconciles)
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// The volume in `[0, 1]`
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// The shuffle flag
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// The repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// The catalog filtered to the selected category ("All" = no filter)
    pub fn active_list(&self) -> Vec<&Song> {
        if self.selected_category == ALL_CATEGORY {
            self.songs.iter().collect()
        } else {
            self.songs
                .iter()
                .filter(|s| s.category == self.selected_category)
                .collect()
        }
    }

    /// The persisted view of the current state
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            current_song: self.current_song.clone(),
            volume: self.volume,
            shuffle: self.shuffle,
            repeat: self.repeat,
            selected_category: self.selected_category.clone(),
        }
    }

    /// Read access to the settings store
    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }

    // ===== Internals =====

    fn step(&mut self, direction: Direction) {
        let Some(current_id) = self.current_song.as_ref().map(|s| s.id.clone()) else {
            return;
        };

        let active = self.active_list();
        if active.is_empty() {
            return;
        }

        let len = active.len();
        let index = if self.shuffle {
            rand::thread_rng().gen_range(0..len)
        } else {
            // A current song outside the active list yields the -1
            // sentinel: next lands on 0, prev on len - 2.
            let found = active
                .iter()
                .position(|s| s.id == current_id)
                .map_or(-1, |i| i as isize);
            let len = len as isize;
            let stepped = match direction {
                Direction::Forward => found + 1,
                Direction::Backward => found - 1 + len,
            };
            stepped.rem_euclid(len) as usize
        };

        let chosen = active[index].clone();
        self.current_song = Some(chosen);
        self.is_playing = true;
        self.persist();
        self.emit(PlayerEvent::SongChanged {
            song: self.current_song.clone(),
        });
        self.emit(PlayerEvent::PlayingChanged { is_playing: true });
    }

    fn restore(&mut self) {
        let value = match self.settings.get(STORAGE_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return,
            Err(err) => {
                warn!("Failed to read persisted player state: {err}");
                return;
            }
        };

        match serde_json::from_value::<PlayerSnapshot>(value) {
            Ok(snapshot) => {
                self.current_song = snapshot.current_song;
                self.volume = snapshot.volume;
                self.shuffle = snapshot.shuffle;
                self.repeat = snapshot.repeat;
                self.selected_category = snapshot.selected_category;
            }
            Err(err) => warn!("Discarding unreadable player snapshot: {err}"),
        }
    }

    fn persist(&mut self) {
        let snapshot = self.snapshot();
        let value = match serde_json::to_value(&snapshot) {
            Ok(value) => value,
            Err(err) => {
                warn!("Failed to serialize player snapshot: {err}");
                return;
            }
        };
        if let Err(err) = self.settings.set(STORAGE_KEY, &value) {
            warn!("Failed to persist player state: {err}");
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
