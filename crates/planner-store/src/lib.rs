//! Key-value persistence backends for the planner.
//!
//! The planner core never touches the filesystem directly; it talks to a
//! [`KeyValueStore`]. Two backends are provided: [`FileStore`] keeps one JSON
//! file per key inside a state directory, and [`MemoryStore`] keeps values in
//! a map (tests, ephemeral sessions).

pub mod config;
pub mod file;
pub mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use config::StoreConfig;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors surfaced by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key {0:?} (allowed: ASCII letters, digits, '_', '-', '.')")]
    InvalidKey(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Minimal key-value contract used by the planner's persistence bridge.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Check that a key is safe to use as a file stem.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let ok = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_owned()))
    }
}
