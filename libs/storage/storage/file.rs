use std::path::{Path, PathBuf};

use crate::{utils::files, Storage, StorageBox, StorageConfig};
use serde_derive::{Deserialize, Serialize};

/// Store every key as its own json document inside a directory
pub struct FileStorage {
    root: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct FileStorageConfig {
    /// Directory where the documents are stored (default to ~/.local/share/daydo)
    pub storage_location: Option<String>,
}

impl FileStorageConfig {
    pub fn get_storage_location(&self) -> eyre::Result<PathBuf> {
        let path_raw = self
            .storage_location
            .clone()
            .unwrap_or("~/.local/share/daydo".to_owned());

        Ok(PathBuf::from(shellexpand::full(&path_raw)?.into_owned()))
    }
}

impl StorageConfig for FileStorageConfig {
    fn try_into_storage(self) -> eyre::Result<StorageBox> {
        let root = self.get_storage_location()?;
        Ok(StorageBox::new(FileStorage::try_new(root)?))
    }
}

impl Storage for FileStorage {
    fn describe(&self) -> String {
        format!("file storage at {:?}", self.root)
    }

    fn get(&self, key: &str) -> eyre::Result<Option<String>> {
        let path = self.key_path(key)?;
        tracing::trace!(?path, "reading key");
        files::read_file_content_if_exist(&path)
    }

    fn set(&mut self, key: &str, value: &str) -> eyre::Result<()> {
        let path = self.key_path(key)?;
        tracing::trace!(?path, bytes = value.len(), "writing key");
        files::write_atomic(&path, value)
    }
}

impl FileStorage {
    /// Open the storage directory, creating it when missing
    pub fn try_new(root: impl AsRef<Path>) -> eyre::Result<Self> {
        let root = root.as_ref().to_path_buf();
        files::create_dir_if_not_exists_deep(&root)
            .map_err(|e| eyre::eyre!("Couldn't initialize storage on path {root:?}: {e}"))?;
        files::check_path_is_directory(&root)?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> eyre::Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(eyre::eyre!("Invalid storage key '{key}'"));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_then_get() -> eyre::Result<()> {
        let dir = tempdir()?;
        let mut storage = FileStorage::try_new(dir.path())?;

        assert_eq!(storage.get("todoAppData")?, None);

        storage.set("todoAppData", "[]")?;
        assert_eq!(storage.get("todoAppData")?.as_deref(), Some("[]"));
        assert!(dir.path().join("todoAppData.json").exists());

        storage.set("todoAppData", "[{\"id\":1}]")?;
        assert_eq!(storage.get("todoAppData")?.as_deref(), Some("[{\"id\":1}]"));
        Ok(())
    }

    #[test]
    fn test_values_survive_reopen() -> eyre::Result<()> {
        let dir = tempdir()?;
        {
            let mut storage = FileStorage::try_new(dir.path())?;
            storage.set("todoAppLastReset", "1704074400000")?;
        }

        let storage = FileStorage::try_new(dir.path())?;
        assert_eq!(
            storage.get("todoAppLastReset")?.as_deref(),
            Some("1704074400000")
        );
        Ok(())
    }

    #[test]
    fn test_creates_missing_directory() -> eyre::Result<()> {
        let dir = tempdir()?;
        let root = dir.path().join("a").join("b");
        let mut storage = FileStorage::try_new(&root)?;
        storage.set("key", "value")?;
        assert!(root.join("key.json").exists());
        Ok(())
    }

    #[test]
    fn test_rejects_path_like_keys() -> eyre::Result<()> {
        let dir = tempdir()?;
        let mut storage = FileStorage::try_new(dir.path())?;
        assert!(storage.set("../escape", "value").is_err());
        assert!(storage.get("").is_err());
        Ok(())
    }

    #[test]
    fn test_config_from_toml() -> eyre::Result<()> {
        let dir = tempdir()?;
        let location = dir.path().join("data");
        let details: toml::Value = toml::from_str(&format!(
            "storage_location = {:?}",
            location.to_str().unwrap()
        ))?;

        let config: FileStorageConfig = details.try_into()?;
        assert_eq!(config.get_storage_location()?, location);

        let mut storage = config.try_into_storage()?;
        storage.set("key", "value")?;
        assert!(location.join("key.json").exists());
        Ok(())
    }
}
