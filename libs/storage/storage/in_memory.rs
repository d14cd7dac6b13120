use std::collections::HashMap;

use crate::{Storage, StorageBox, StorageConfig};
use serde_derive::Deserialize;

/// This storage type is used for testing, data is not persisted to disk but
/// only present in memory
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    values: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct InMemoryStorageConfig {}

impl StorageConfig for InMemoryStorageConfig {
    fn try_into_storage(self) -> eyre::Result<StorageBox> {
        Ok(StorageBox::new(InMemoryStorage::new()))
    }
}

impl Storage for InMemoryStorage {
    fn describe(&self) -> String {
        format!("in-memory storage ({} keys)", self.values.len())
    }

    fn get(&self, key: &str) -> eyre::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> eyre::Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a storage pre-filled with the given key/value pairs
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
