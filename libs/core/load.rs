use chrono::Local;
use daydo_config::{Config, ProfileConfig};
use daydo_storage::{
    storage::{file::FileStorageConfig, in_memory::InMemoryStorageConfig},
    BuiltinStorageType, StorageBox, StorageConfig,
};

use crate::{
    app::App, clock::SystemClock, persistence::Persistence, presenter::Presenter,
    reset::ResetScheduler,
};

/// Configuration and storage resolved for one profile, ready to start an [`App`].
pub struct Core {
    config: Config,
    storage: StorageBox,
    /// Ok - found | Err - not found with error reason
    found_config_file: Result<(), eyre::Error>,
}

/// Read the configuration file (falling back to defaults when it is missing)
/// and open the storage of the selected profile.
pub fn load(config_path: &str, profile_name: Option<&str>) -> eyre::Result<Core> {
    let mut found_config_file = Ok(());
    let config = match daydo_config::load_if_exist(config_path)? {
        Some(config) => config,
        None => {
            found_config_file = Err(eyre::eyre!(
                "config file '{config_path}' was not found, using default settings"
            ));
            Config::default()
        }
    };

    let profile = config.get_profile(profile_name)?;
    let storage = match BuiltinStorageType::try_from_name(profile.get_storage_type())? {
        BuiltinStorageType::File => open_storage::<FileStorageConfig>(&profile)?,
        BuiltinStorageType::InMemory => open_storage::<InMemoryStorageConfig>(&profile)?,
    };
    tracing::debug!(storage = %storage.describe(), "opened storage");

    Ok(Core {
        config,
        storage,
        found_config_file,
    })
}

fn open_storage<SC>(profile: &ProfileConfig) -> eyre::Result<StorageBox>
where
    SC: StorageConfig,
{
    let storage_config: SC = profile.details.clone().try_into().map_err(|e| {
        eyre::eyre!(
            "Invalid options for storage type '{}': {e}",
            profile.get_storage_type()
        )
    })?;

    storage_config.try_into_storage()
}

impl Core {
    /// Scheduler for the local time zone, `None` when the daily reset is turned
    /// off.
    pub fn reset_scheduler(&self) -> eyre::Result<Option<ResetScheduler<Local>>> {
        if !self.config.core.is_daily_reset_enabled() {
            return Ok(None);
        }

        let reset_hour = self.config.core.get_reset_hour()?;
        Ok(Some(ResetScheduler::new(Local, reset_hour)?))
    }

    /// Run the daily reset if enabled then load the lists.
    pub fn start<P: Presenter>(self, presenter: P) -> eyre::Result<App<P>> {
        let scheduler = self.reset_scheduler()?;
        let persistence = Persistence::new(self.storage);
        let clock = Box::new(SystemClock);

        Ok(match scheduler {
            Some(scheduler) => App::with_daily_reset(persistence, presenter, clock, &scheduler),
            None => App::new(persistence, presenter, clock),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn describe_storage(&self) -> String {
        self.storage.describe()
    }

    pub fn has_found_config_file(&self) -> &Result<(), eyre::Error> {
        &self.found_config_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::NoopPresenter;
    use tempfile::tempdir;

    fn write_config(dir: &std::path::Path, content: &str) -> String {
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_owned()
    }

    #[test]
    fn test_in_memory_profile() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
            [core]
            daily_reset = false

            [profile.default]
            storage_type = "in-memory"
            "#,
        );

        let core = load(&path, None).unwrap();
        assert!(core.has_found_config_file().is_ok());
        assert!(core.reset_scheduler().unwrap().is_none());

        let mut app = core.start(NoopPresenter).unwrap();
        let list_id = app.add_list("Home").unwrap();
        assert!(app.list(list_id).is_some());
        assert!(!app.has_unsaved_changes());
    }

    #[test]
    fn test_file_profile_persists_between_sessions() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let path = write_config(
            dir.path(),
            &format!(
                "[core]\nreset_hour = 5\n\n[profile.work]\nstorage_type = \"file\"\nstorage_location = {:?}\n",
                data_dir.to_str().unwrap()
            ),
        );

        let core = load(&path, Some("work")).unwrap();
        assert_eq!(core.reset_scheduler().unwrap().unwrap().reset_hour(), 5);

        let mut app = core.start(NoopPresenter).unwrap();
        let list_id = app.add_list("Errands").unwrap();
        app.add_todo(list_id, "Post office").unwrap();
        let expected = app.store().clone();
        drop(app);

        let app = load(&path, Some("work")).unwrap().start(NoopPresenter).unwrap();
        assert_eq!(*app.store(), expected);
        assert!(app.last_reset().is_some());
    }

    #[test]
    fn test_unknown_storage_type() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[profile.default]\nstorage_type = \"git\"\n");
        assert!(load(&path, None).is_err());
    }

    #[test]
    fn test_unknown_profile() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[profile.default]\nstorage_type = \"in-memory\"\n");
        assert!(load(&path, Some("nope")).is_err());
    }
}
