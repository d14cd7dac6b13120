mod config;
mod load_config;

pub use config::{
    Config, CoreConfig, ProfileConfig, DEFAULT_PROFILE_NAME, DEFAULT_RESET_HOUR,
    DEFAULT_STORAGE_TYPE,
};
pub use load_config::{load_if_exist, save};
