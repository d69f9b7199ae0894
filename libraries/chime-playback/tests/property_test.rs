//! Property tests for next/previous navigation

use chime_library::build_library;
use chime_playback::PlayerStore;
use chime_storage::MemoryStore;
use proptest::prelude::*;

fn player_with(n: usize, start: usize) -> PlayerStore {
    let pairs: Vec<(String, String)> = (0..n)
        .map(|i| (format!("Mix/song_{i}.mp3"), format!("/assets/{i}.mp3")))
        .collect();
    let mut store = PlayerStore::new(build_library(pairs), Box::new(MemoryStore::new()));
    let song = store.songs()[start].clone();
    store.set_current_song(Some(song));
    store
}

proptest! {
    /// With shuffle off, next followed by prev returns to the original
    /// song for any non-empty active list.
    #[test]
    fn next_then_prev_is_identity(n in 1usize..12, start_seed in 0usize..12) {
        let start = start_seed % n;
        let mut store = player_with(n, start);
        let original = store.current_song().unwrap().id.clone();

        store.next_song();
        store.prev_song();

        prop_assert_eq!(store.current_song().unwrap().id.clone(), original);
    }

    /// With shuffle off and an active list of length N, N steps forward
    /// from any starting song cycle back to it.
    #[test]
    fn n_steps_cycle_back(n in 1usize..12, start_seed in 0usize..12) {
        let start = start_seed % n;
        let mut store = player_with(n, start);
        let original = store.current_song().unwrap().id.clone();

        for _ in 0..n {
            store.next_song();
        }

        prop_assert_eq!(store.current_song().unwrap().id.clone(), original);
    }

    /// Stepping in either direction always lands inside the active list
    /// and turns playback on, shuffle or not.
    #[test]
    fn step_stays_in_active_list(
        n in 1usize..12,
        start_seed in 0usize..12,
        shuffle in any::<bool>(),
        forward in any::<bool>(),
    ) {
        let start = start_seed % n;
        let mut store = player_with(n, start);
        if shuffle {
            store.toggle_shuffle();
        }

        if forward {
            store.next_song();
        } else {
            store.prev_song();
        }

        let current = store.current_song().unwrap();
        prop_assert!(store.songs().iter().any(|s| s.id == current.id));
        prop_assert!(store.is_playing());
    }
}
