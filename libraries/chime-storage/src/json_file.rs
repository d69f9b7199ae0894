//! JSON-file settings store

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use chime_core::SettingsStore;

use crate::error::Result;

/// Settings store backed by a single JSON object file
///
/// The whole store is one `{ key: value }` object. Reads happen once at
/// open time; every write rewrites the file through a sibling temp file and
/// an atomic rename, so a crash mid-write leaves the previous contents
/// intact.
///
/// A missing file starts empty. Corrupt contents are logged and discarded
/// rather than surfaced: losing preferences must never take the player down.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, serde_json::Value>,
}

impl JsonFileStore {
    /// Open (or create) the store at `path`
    pub fn open(path: impl Into<PathBuf>) -> chime_core::Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => parse_contents(&path, &contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, values })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.values)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn parse_contents(path: &Path, contents: &str) -> HashMap<String, serde_json::Value> {
    match serde_json::from_str(contents) {
        Ok(values) => values,
        Err(err) => {
            warn!(
                "Discarding unreadable settings file {}: {}",
                path.display(),
                err
            );
            HashMap::new()
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> chime_core::Result<Option<serde_json::Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &serde_json::Value) -> chime_core::Result<()> {
        self.values.insert(key.to_string(), value.clone());
        self.persist()?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> chime_core::Result<()> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
