use super::{validate_key, KeyValueStore, StorageError};
use log::*;
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

const SLOT_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

/// Directory-backed store keeping each slot in its own file.
///
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    pub fn open(dir: impl Into<PathBuf>) -> Result<FileStore, StorageError> {
        let dir = dir.into();
        if !dir.exists() {
            debug!("Creating storage directory {}...", dir.display());
            fs::create_dir_all(&dir).map_err(|e| StorageError::CreateDirectoryFailed {
                path: dir.clone(),
                source: e,
            })?;
        }
        Ok(FileStore { dir })
    }

    /// Return the directory holding the slots.
    ///
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed { path, source: e }),
        }
    }

    /// Write to a sibling temp file first and rename it over the slot, so a
    /// failed write never leaves a truncated slot behind.
    ///
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        let temp_path = path.with_extension(TEMP_EXTENSION);
        let write_failed = |e| StorageError::WriteFailed {
            path: temp_path.clone(),
            source: e,
        };

        let mut file = fs::File::create(&temp_path).map_err(write_failed)?;
        file.write_all(value.as_bytes()).map_err(write_failed)?;
        file.flush().map_err(write_failed)?;
        file.sync_all().map_err(write_failed)?;
        drop(file);

        fs::rename(&temp_path, &path).map_err(|e| StorageError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;
        trace!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::RemoveFailed { path, source: e }),
        }
    }
}
