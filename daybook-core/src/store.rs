//! Durable key-value persistence, one file per key under a data directory.
//!
//! Reads are infallible from the caller's point of view: a missing or
//! unreadable key is "absent", a corrupt JSON value falls back to the
//! caller-supplied default. Writes return a `Result` so callers can decide
//! whether a failed save is worth surfacing.

use anyhow::{Context, Result};
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root).with_context(|| format!("creating {}", root.display()))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the stored value, or `None` if the key was never written.
    pub fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    /// Overwrites any prior value for `key`.
    pub fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        fs::write(&path, value).with_context(|| format!("writing {}", path.display()))
    }

    /// Deserializes the value stored under `key`, or returns `default` when
    /// the key is absent or its value does not parse.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.load(key) else {
            return default;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("discarding corrupt value for '{key}': {e}");
                default
            }
        }
    }

    pub fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).with_context(|| format!("serializing '{key}'"))?;
        self.save(key, &raw)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}
