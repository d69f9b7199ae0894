//! Core types for the player state machine

use serde::{Deserialize, Serialize};

use chime_library::ALL_CATEGORY;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// No repeat (advancing past the end still wraps; see `next_song`)
    None,

    /// Loop the current song only
    One,

    /// Loop the whole active list
    #[default]
    All,
}

impl RepeatMode {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::One => "one",
            Self::All => "all",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "one" => Some(Self::One),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

impl std::fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Initial values for a player store
///
/// These apply before any persisted snapshot is restored on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume in `[0, 1]` (default: 0.7)
    pub volume: f32,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: all)
    pub repeat: RepeatMode,

    /// Initially selected category (default: "All")
    pub selected_category: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 0.7,
            shuffle: false,
            repeat: RepeatMode::All,
            selected_category: ALL_CATEGORY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.volume, 0.7);
        assert!(!config.shuffle);
        assert_eq!(config.repeat, RepeatMode::All);
        assert_eq!(config.selected_category, "All");
    }

    #[test]
    fn repeat_mode_round_trip() {
        for mode in [RepeatMode::None, RepeatMode::One, RepeatMode::All] {
            assert_eq!(RepeatMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(RepeatMode::parse("forever"), None);
    }

    #[test]
    fn repeat_mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(RepeatMode::None).unwrap(),
            serde_json::json!("none")
        );
        assert_eq!(
            serde_json::to_value(RepeatMode::All).unwrap(),
            serde_json::json!("all")
        );
    }
}
