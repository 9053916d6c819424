//! Key-value persistence.
//!
//! A `KeyValueStore` holds named string slots, the same contract a browser's
//! local storage offers. Two backends are provided:
//! - `FileStore`: one file per key inside a data directory
//! - `MemoryStore`: a plain map, used by tests and ephemeral sessions

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// String-keyed storage of string values.
///
pub trait KeyValueStore {
    /// Return the value stored under `key`, or `None` if the slot is empty.
    ///
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Clear the slot under `key`. Clearing an empty slot is not an error.
    ///
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Check that a key only uses characters that are safe in a file name.
///
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("favorites").is_ok());
        assert!(validate_key("favorites-corrupt").is_ok());
        assert!(validate_key("slot_2").is_ok());
        assert!(matches!(
            validate_key(""),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            validate_key("../escape"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            validate_key("with space"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
