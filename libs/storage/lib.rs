mod core {
    pub(crate) mod storage;
    pub(crate) mod storage_config;
}

pub use core::{
    storage::{Storage, StorageBox},
    storage_config::StorageConfig,
};

pub mod storage {
    pub mod file;
    pub mod in_memory;
}

pub(crate) mod utils {
    pub mod files;
}

use strum_macros::{Display, EnumString};

/// Storage backends shipped with daydo, named as they appear in the
/// `storage_type` field of a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display)]
pub enum BuiltinStorageType {
    #[strum(serialize = "file")]
    File,
    #[strum(serialize = "in-memory")]
    InMemory,
}

impl BuiltinStorageType {
    pub fn try_from_name(name: &str) -> eyre::Result<Self> {
        name.parse().map_err(|_| {
            eyre::eyre!(
                "Invalid storage type '{name}' specified, please select one of `file`, `in-memory`"
            )
        })
    }
}
