//! Domain types for Chime

mod song;

pub use song::Song;
