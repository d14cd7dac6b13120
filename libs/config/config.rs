use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};

pub const DEFAULT_PROFILE_NAME: &str = "default";
pub const DEFAULT_RESET_HOUR: u32 = 2;
pub const DEFAULT_STORAGE_TYPE: &str = "file";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub profile: HashMap<String, ProfileConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CoreConfig {
    /// Profile used by default when none are specified
    pub default_profile_name: Option<String>,

    /// Local hour (0-23) at which completion flags are cleared (default: 2)
    pub reset_hour: Option<u32>,

    /// Clear every completion flag once a day (default: true)
    pub daily_reset: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    /// Type of storage (e.g. file, in-memory)
    pub storage_type: Option<String>,

    // Rest of the storage config as a flexible structure
    #[serde(flatten)]
    pub details: toml::Value,
}

impl Default for Config {
    fn default() -> Self {
        let mut details = toml::map::Map::new();
        details.insert(
            "storage_location".to_owned(),
            toml::Value::String("~/.local/share/daydo".to_owned()),
        );

        let profile = ProfileConfig {
            storage_type: Some(DEFAULT_STORAGE_TYPE.to_owned()),
            details: toml::Value::Table(details),
        };

        Self {
            core: CoreConfig::default(),
            profile: HashMap::from([(DEFAULT_PROFILE_NAME.to_owned(), profile)]),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            storage_type: None,
            details: toml::Value::Table(toml::map::Map::new()),
        }
    }
}

impl Config {
    /// Resolve a profile by name, falling back to the configured default profile.
    ///
    /// An explicitly requested profile must exist; the implicit default profile
    /// may be absent, in which case an empty profile (all defaults) is returned.
    pub fn get_profile(&self, profile_name: Option<&str>) -> eyre::Result<ProfileConfig> {
        match profile_name {
            Some(name) => self
                .profile
                .get(name)
                .cloned()
                .ok_or_else(|| eyre::eyre!("Profile '{name}' not found in config")),
            None => {
                let name = self.core.get_default_profile_name();
                match self.profile.get(&name) {
                    Some(profile) => Ok(profile.clone()),
                    None if self.core.default_profile_name.is_some() => {
                        Err(eyre::eyre!("Profile '{name}' not found in config"))
                    }
                    None => Ok(ProfileConfig::default()),
                }
            }
        }
    }

    pub fn validate(&self) -> eyre::Result<()> {
        self.core.get_reset_hour()?;
        Ok(())
    }
}

impl CoreConfig {
    /// Return the default profile name is set or "default"
    pub fn get_default_profile_name(&self) -> String {
        self.default_profile_name
            .clone()
            .unwrap_or(DEFAULT_PROFILE_NAME.to_owned())
    }

    pub fn get_reset_hour(&self) -> eyre::Result<u32> {
        match self.reset_hour {
            None => Ok(DEFAULT_RESET_HOUR),
            Some(hour) if hour < 24 => Ok(hour),
            Some(hour) => Err(eyre::eyre!(
                "Invalid reset_hour '{hour}', expected a value between 0 and 23"
            )),
        }
    }

    pub fn is_daily_reset_enabled(&self) -> bool {
        self.daily_reset.unwrap_or(true)
    }
}

impl ProfileConfig {
    pub fn get_storage_type(&self) -> &str {
        self.storage_type.as_deref().unwrap_or(DEFAULT_STORAGE_TYPE)
    }
}
