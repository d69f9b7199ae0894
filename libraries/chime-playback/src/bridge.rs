//! Audio bridge boundary
//!
//! The platform's media element is wrapped behind [`AudioOutput`] and owned
//! exclusively by [`AudioReconciler`]. The store never touches the element;
//! the reconciler diffs desired state against what it last applied and
//! issues the minimal commands, and feeds platform events back into the
//! store.
//!
//! Starting playback is asynchronous on real platforms and may fail
//! (autoplay policy, decode error, fetch failure). Every play command is
//! tagged with a monotonic [`PlayToken`]; the host reports the outcome via
//! [`AudioReconciler::complete_play`], and outcomes of superseded commands
//! are ignored so a stale rejection cannot pause a newer playback.

use tracing::{debug, warn};

use crate::error::PlaybackError;
use crate::store::PlayerStore;
use crate::types::RepeatMode;

/// Commands the platform audio element must support
pub trait AudioOutput {
    /// Load the resource at `url`, superseding any previous load
    fn load(&mut self, url: &str);

    /// Start or resume playback of the loaded resource
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Seek to `seconds` from the start
    fn seek(&mut self, seconds: f64);

    /// Apply `volume` in `[0, 1]`
    fn set_volume(&mut self, volume: f32);
}

/// Events emitted by the platform audio element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioEvent {
    /// Playback position advanced
    TimeUpdated {
        /// Current position in seconds
        seconds: f64,
    },

    /// Resource metadata became available
    MetadataLoaded {
        /// Total duration in seconds
        duration: f64,
    },

    /// The loaded resource played to its end
    Ended,
}

/// Tag for one issued play command; the most recent command wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayToken(u64);

/// Keeps the platform audio element converged on the store's desired state
pub struct AudioReconciler<O: AudioOutput> {
    output: O,
    loaded_url: Option<String>,
    applied_playing: bool,
    applied_volume: Option<f32>,
    play_seq: u64,
    position: f64,
    duration: f64,
}

impl<O: AudioOutput> AudioReconciler<O> {
    /// Wrap a platform audio output
    pub fn new(output: O) -> Self {
        Self {
            output,
            loaded_url: None,
            applied_playing: false,
            applied_volume: None,
            play_seq: 0,
            position: 0.0,
            duration: 0.0,
        }
    }

    /// Reconcile the element with the store's desired state
    ///
    /// Call after store actions (directly or from a subscribed listener).
    /// A changed song url triggers `load` and, if playback is desired,
    /// `play`; a transport change alone plays or pauses without reloading;
    /// volume is applied independently of transport state.
    ///
    /// Returns the token of the play command issued, if any.
    pub fn sync(&mut self, store: &PlayerStore) -> Option<PlayToken> {
        if self.applied_volume != Some(store.volume()) {
            self.output.set_volume(store.volume());
            self.applied_volume = Some(store.volume());
        }

        let desired_url = store.current_song().map(|s| s.url.clone());
        if desired_url != self.loaded_url {
            match &desired_url {
                Some(url) => {
                    debug!("Loading {url}");
                    self.output.load(url);
                }
                None => self.output.pause(),
            }
            self.loaded_url = desired_url;
            self.applied_playing = false;
            self.position = 0.0;
            self.duration = 0.0;
        }

        let mut issued = None;
        if self.loaded_url.is_some() && store.is_playing() != self.applied_playing {
            if store.is_playing() {
                issued = Some(self.issue_play());
            } else {
                self.output.pause();
            }
            self.applied_playing = store.is_playing();
        }
        issued
    }

    /// Report the asynchronous outcome of a play command
    ///
    /// Superseded tokens are ignored. A failed current command applies the
    /// corrective `set_is_playing(false)` so desired and actual transport
    /// state reconverge.
    pub fn complete_play(
        &mut self,
        token: PlayToken,
        result: Result<(), PlaybackError>,
        store: &mut PlayerStore,
    ) {
        if token.0 != self.play_seq {
            debug!("Ignoring outcome of superseded play command");
            return;
        }
        if let Err(err) = result {
            warn!("{err}");
            self.applied_playing = false;
            store.set_is_playing(false);
        }
    }

    /// Feed a platform audio event into the player
    ///
    /// On `Ended`: repeat=one restarts the same resource; any other repeat
    /// mode advances through `next_song()` unconditionally. Returns the
    /// token of a play command issued by the restart/advance, if any.
    pub fn handle_event(&mut self, event: AudioEvent, store: &mut PlayerStore) -> Option<PlayToken> {
        match event {
            AudioEvent::TimeUpdated { seconds } => {
                self.position = seconds;
                None
            }
            AudioEvent::MetadataLoaded { duration } => {
                self.duration = duration;
                None
            }
            AudioEvent::Ended => {
                self.applied_playing = false;
                if store.repeat() == RepeatMode::One {
                    self.output.seek(0.0);
                    self.position = 0.0;
                    self.applied_playing = true;
                    return Some(self.issue_play());
                }

                let before = store.current_song().map(|s| s.id.clone());
                store.next_song();
                let after = store.current_song().map(|s| s.id.clone());
                if before == after {
                    // Nothing advanced (no-op or a single-song wrap onto
                    // itself); leave the element stopped at the end.
                    return None;
                }
                self.sync(store)
            }
        }
    }

    /// Seek the element and mirror the new position
    pub fn seek(&mut self, seconds: f64) {
        self.output.seek(seconds);
        self.position = seconds;
    }

    /// Last reported playback position in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Duration of the loaded resource in seconds (0 until metadata loads)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    fn issue_play(&mut self) -> PlayToken {
        self.play_seq += 1;
        self.output.play();
        PlayToken(self.play_seq)
    }
}
