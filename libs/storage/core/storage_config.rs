use serde::de::DeserializeOwned;

use super::storage::StorageBox;

pub trait StorageConfig: DeserializeOwned + Default {
    fn try_into_storage(self) -> eyre::Result<StorageBox>;
}
