//! Settings storage trait
//!
//! Persistent user preferences are stored as key-value pairs with
//! JSON-serialized values. The trait abstracts over the actual backing store
//! (a JSON file on desktop, browser local storage behind a host bridge, an
//! in-memory map in tests).

use crate::error::Result;

/// Opaque key-value persistence capability
///
/// Implementations must be durable between sessions (except test doubles)
/// and must treat values as opaque JSON.
pub trait SettingsStore {
    /// Get the value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &serde_json::Value) -> Result<()>;

    /// Remove the value stored under `key`, if any
    fn remove(&mut self, key: &str) -> Result<()>;
}
