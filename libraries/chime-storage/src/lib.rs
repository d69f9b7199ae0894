//! Chime Storage
//!
//! [`SettingsStore`](chime_core::SettingsStore) implementations for persisted
//! player preferences:
//!
//! - [`MemoryStore`] — in-memory map, for tests and embedding
//! - [`JsonFileStore`] — a single JSON object file, the durable-storage
//!   analog of browser local storage
//!
//! # Example
//!
//! ```rust,no_run
//! use chime_core::SettingsStore;
//! use chime_storage::JsonFileStore;
//!
//! let mut store = JsonFileStore::open("/tmp/chime-settings.json")?;
//! store.set("ui.theme", &serde_json::json!("dark"))?;
//! # Ok::<(), chime_core::ChimeError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod json_file;
mod memory;

pub use error::{Result, StorageError};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
