//! Key-value storage for the persisted game state.
//!
//! A backend holds plain strings under string keys, like browser local
//! storage. The session stores one encoded [`GameState`] under its
//! configured key.
//!
//! - [`MemoryStorage`]: in-process map, for tests and embedding
//! - [`FileStorage`]: one file per key in a directory
//!
//! Loading is forgiving: a missing slot or a value that fails to decode
//! both mean "no saved state".

mod codec;
mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::GameState;

pub use codec::{decode_state, encode_state, CodecError};
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Failure of a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
}

/// A synchronous string-keyed slot store.
pub trait Storage {
    /// Read the value under `key`. `Ok(None)` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Load a saved state.
///
/// Returns `None` when the slot is empty, unreadable, or does not decode.
/// Failures are logged, never returned.
pub fn load_state<S: Storage + ?Sized>(storage: &S, key: &str) -> Option<GameState> {
    let encoded = match storage.get(key) {
        Ok(Some(encoded)) => encoded,
        Ok(None) => {
            debug!(key, "no saved state");
            return None;
        }
        Err(error) => {
            warn!(key, %error, "failed to read saved state, ignoring it");
            return None;
        }
    };

    match decode_state(&encoded) {
        Ok(state) => Some(state),
        Err(error) => {
            warn!(key, %error, "discarding malformed saved state");
            None
        }
    }
}

/// Encode and store a state.
pub fn save_state<S: Storage + ?Sized>(
    storage: &mut S,
    key: &str,
    state: &GameState,
) -> crate::Result<()> {
    let encoded = encode_state(state)?;
    storage.set(key, &encoded)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleConfig;

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        let state = PuzzleConfig::classic().initial_state();

        save_state(&mut storage, "slot", &state).unwrap();

        assert_eq!(load_state(&storage, "slot"), Some(state));
    }

    #[test]
    fn test_load_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(load_state(&storage, "slot"), None);
    }

    #[test]
    fn test_load_garbage() {
        let mut storage = MemoryStorage::new();
        storage.set("slot", "%%% not a state %%%").unwrap();

        assert_eq!(load_state(&storage, "slot"), None);
    }

    #[test]
    fn test_storage_as_trait_object() {
        let mut storage: Box<dyn Storage> = Box::new(MemoryStorage::new());
        let state = PuzzleConfig::classic().initial_state();

        save_state(storage.as_mut(), "slot", &state).unwrap();

        assert!(load_state(storage.as_ref(), "slot").is_some());
    }
}
