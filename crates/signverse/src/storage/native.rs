// Native filesystem storage implementation for desktop
//
// Uses platform-idiomatic directories:
// - macOS: ~/Library/Application Support/dev.signverse.SignVerse/
// - Linux: ~/.local/share/signverse/
// - Windows: C:\Users\<user>\AppData\Roaming\signverse\SignVerse\data\

use super::KeyValueStorage;
use directories::ProjectDirs;
use signverse_core::StorageError;
use std::{io::ErrorKind, path::PathBuf};

/// Desktop settings storage: each key is a `<key>.json` file in the data directory.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Creates a FileStorage using the platform-idiomatic data directory.
    pub fn new() -> Result<Self, StorageError> {
        let proj_dirs = ProjectDirs::from("dev", "signverse", "SignVerse").ok_or_else(|| {
            StorageError::Unavailable("Failed to determine application data directory".to_string())
        })?;

        Self::with_path(proj_dirs.data_dir().to_path_buf())
    }

    /// Creates a FileStorage rooted at `base_path`.
    pub fn with_path(base_path: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| StorageError::Io(format!("Failed to create directory: {}", e)))?;

        Ok(Self { base_path })
    }

    fn get_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.get_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("Failed to read file: {}", e))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Write to a sibling file and rename so a crash never leaves half a record.
        let path = self.get_path(key);
        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, value)
            .map_err(|e| StorageError::Io(format!("Failed to write file: {}", e)))?;
        std::fs::rename(&tmp_path, &path)
            .map_err(|e| StorageError::Io(format!("Failed to replace file: {}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.get_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("Failed to delete file: {}", e))),
        }
    }
}
