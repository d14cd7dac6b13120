use chrono::{DateTime, TimeZone, Utc};
use daydo_storage::StorageBox;

use crate::{
    entities::store::Store,
    reset::{ResetDecision, ResetScheduler},
};

/// Storage key holding the serialized lists
pub const DATA_KEY: &str = "todoAppData";
/// Storage key holding the last reset instant, in epoch milliseconds
pub const LAST_RESET_KEY: &str = "todoAppLastReset";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetOutcome<Tz: TimeZone> {
    Performed {
        /// Number of todos that were completed before the reset
        cleared: usize,
        marker: DateTime<Tz>,
    },
    Skipped {
        next_reset: DateTime<Tz>,
    },
}

/// Whole-document load/save of the store and the reset marker.
pub struct Persistence {
    storage: StorageBox,
}

impl Persistence {
    pub fn new(storage: StorageBox) -> Self {
        Self { storage }
    }

    /// Load the persisted store. Unreadable or malformed data yields an empty
    /// store.
    pub fn load(&self) -> Store {
        match self.try_load() {
            Ok(Some(store)) => store,
            Ok(None) => Store::default(),
            Err(e) => {
                tracing::warn!("Couldn't load saved lists, starting empty: {e}");
                Store::default()
            }
        }
    }

    fn try_load(&self) -> eyre::Result<Option<Store>> {
        let Some(raw) = self.storage.get(DATA_KEY)? else {
            return Ok(None);
        };

        Ok(Some(parse_store(&raw)?))
    }

    pub fn save(&mut self, store: &Store) -> eyre::Result<()> {
        let serialized = serde_json::to_string(store)?;
        self.storage.set(DATA_KEY, &serialized)?;
        Ok(())
    }

    /// Instant of the last reset, `None` when absent or unreadable.
    pub fn last_reset(&self) -> Option<DateTime<Utc>> {
        let raw = match self.storage.get(LAST_RESET_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Couldn't read the last reset marker: {e}");
                return None;
            }
        };

        let marker = raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis);

        if marker.is_none() {
            tracing::warn!("Ignoring malformed last reset marker '{raw}'");
        }
        marker
    }

    fn set_last_reset(&mut self, marker: DateTime<Utc>) -> eyre::Result<()> {
        self.storage
            .set(LAST_RESET_KEY, &marker.timestamp_millis().to_string())
    }

    /// Apply the daily reset rule against the persisted state.
    ///
    /// When a reset is due every persisted todo is marked incomplete before the
    /// marker moves, so a failed write leaves the reset pending for the next
    /// start.
    pub fn check_and_reset<Tz: TimeZone>(
        &mut self,
        scheduler: &ResetScheduler<Tz>,
        now: DateTime<Utc>,
    ) -> eyre::Result<ResetOutcome<Tz>> {
        let new_marker = match scheduler.evaluate(self.last_reset(), now) {
            ResetDecision::NotDue { next_reset } => {
                tracing::debug!(?next_reset, "daily reset not due");
                return Ok(ResetOutcome::Skipped { next_reset });
            }
            ResetDecision::Due { new_marker } => new_marker,
        };

        // A failed read keeps the marker in place so the next start retries
        let cleared = match self.storage.get(DATA_KEY)?.as_deref().map(parse_store) {
            Some(Ok(mut store)) => {
                let cleared = store.clear_completion();
                self.save(&store)?;
                cleared
            }
            Some(Err(e)) => {
                tracing::warn!("Skipping reset of saved lists: {e}");
                0
            }
            None => 0,
        };

        self.set_last_reset(new_marker.with_timezone(&Utc))?;
        tracing::info!(cleared, marker = ?new_marker, "reset todo completion status");

        Ok(ResetOutcome::Performed {
            cleared,
            marker: new_marker,
        })
    }

    pub fn describe(&self) -> String {
        self.storage.describe()
    }
}

fn parse_store(raw: &str) -> eyre::Result<Store> {
    serde_json::from_str(raw).map_err(|e| eyre::eyre!("malformed data under '{DATA_KEY}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use daydo_storage::{storage::in_memory::InMemoryStorage, Storage};
    use serde_json::json;
    use std::{cell::Cell, rc::Rc};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn persistence_with(values: &[(&str, String)]) -> Persistence {
        Persistence::new(StorageBox::new(InMemoryStorage::with_values(
            values.iter().map(|(k, v)| (k.to_string(), v.clone())),
        )))
    }

    fn completed_store() -> String {
        json!([
            {"id": 1, "name": "Home", "todos": [
                {"id": 2, "name": "Dishes", "completed": true},
                {"id": 3, "name": "Laundry", "completed": false}
            ]},
            {"id": 4, "name": "Work", "todos": [
                {"id": 5, "name": "Inbox", "completed": true}
            ]}
        ])
        .to_string()
    }

    #[test]
    fn test_save_then_load() -> eyre::Result<()> {
        let mut persistence = persistence_with(&[]);
        let store: Store = serde_json::from_str(&completed_store())?;

        persistence.save(&store)?;
        assert_eq!(persistence.load(), store);
        Ok(())
    }

    #[test]
    fn test_missing_data_loads_empty() {
        assert_eq!(persistence_with(&[]).load(), Store::default());
    }

    #[test]
    fn test_malformed_data_loads_empty() {
        let persistence = persistence_with(&[(DATA_KEY, "{not json".to_owned())]);
        assert_eq!(persistence.load(), Store::default());

        let persistence = persistence_with(&[(DATA_KEY, json!({"lists": 1}).to_string())]);
        assert_eq!(persistence.load(), Store::default());
    }

    #[test]
    fn test_malformed_marker_is_absent() {
        let persistence = persistence_with(&[(LAST_RESET_KEY, "yesterday".to_owned())]);
        assert_eq!(persistence.last_reset(), None);

        let persistence = persistence_with(&[(LAST_RESET_KEY, "1704074400000".to_owned())]);
        assert_eq!(persistence.last_reset(), Some(utc("2024-01-01T02:00:00Z")));
    }

    #[test]
    fn test_reset_clears_completion_and_moves_marker() -> eyre::Result<()> {
        let scheduler = ResetScheduler::new(Utc, 2)?;
        let mut persistence = persistence_with(&[
            (DATA_KEY, completed_store()),
            (LAST_RESET_KEY, "1704074400000".to_owned()), // 2024-01-01T02:00Z
        ]);

        let outcome = persistence.check_and_reset(&scheduler, utc("2024-01-02T03:00:00Z"))?;
        assert_eq!(
            outcome,
            ResetOutcome::Performed {
                cleared: 2,
                marker: utc("2024-01-02T02:00:00Z")
            }
        );
        assert!(persistence.load().todos().all(|t| !t.completed));
        assert_eq!(persistence.last_reset(), Some(utc("2024-01-02T02:00:00Z")));
        Ok(())
    }

    #[test]
    fn test_reset_not_due_leaves_state() -> eyre::Result<()> {
        let scheduler = ResetScheduler::new(Utc, 2)?;
        let mut persistence = persistence_with(&[
            (DATA_KEY, completed_store()),
            (LAST_RESET_KEY, "1704074400000".to_owned()),
        ]);
        let before = persistence.load();

        let outcome = persistence.check_and_reset(&scheduler, utc("2024-01-01T23:00:00Z"))?;
        assert_eq!(
            outcome,
            ResetOutcome::Skipped {
                next_reset: utc("2024-01-02T02:00:00Z")
            }
        );
        assert_eq!(persistence.load(), before);
        assert_eq!(persistence.last_reset(), Some(utc("2024-01-01T02:00:00Z")));
        Ok(())
    }

    #[test]
    fn test_first_run_without_data_only_writes_marker() -> eyre::Result<()> {
        let scheduler = ResetScheduler::new(Utc, 2)?;
        let mut persistence = persistence_with(&[]);

        let outcome = persistence.check_and_reset(&scheduler, utc("2024-06-01T01:00:00Z"))?;
        assert_eq!(
            outcome,
            ResetOutcome::Performed {
                cleared: 0,
                marker: utc("2024-05-31T02:00:00Z")
            }
        );
        assert_eq!(persistence.last_reset(), Some(utc("2024-05-31T02:00:00Z")));
        assert_eq!(persistence.storage.get(DATA_KEY)?, None);

        // The next boundary still fires the same night
        let outcome = persistence.check_and_reset(&scheduler, utc("2024-06-01T02:30:00Z"))?;
        assert!(matches!(outcome, ResetOutcome::Performed { .. }));
        Ok(())
    }

    #[test]
    fn test_reset_keeps_malformed_data_untouched() -> eyre::Result<()> {
        let scheduler = ResetScheduler::new(Utc, 2)?;
        let mut persistence = persistence_with(&[(DATA_KEY, "garbage".to_owned())]);

        persistence.check_and_reset(&scheduler, utc("2024-06-01T09:00:00Z"))?;
        assert_eq!(persistence.storage.get(DATA_KEY)?.as_deref(), Some("garbage"));
        assert!(persistence.last_reset().is_some());
        Ok(())
    }

    /// Backend whose reads of the lists fail while `failing` is set
    struct UnreadableData {
        inner: InMemoryStorage,
        failing: Rc<Cell<bool>>,
    }

    impl Storage for UnreadableData {
        fn describe(&self) -> String {
            "unreadable data".to_owned()
        }

        fn get(&self, key: &str) -> eyre::Result<Option<String>> {
            if key == DATA_KEY && self.failing.get() {
                return Err(eyre::eyre!("storage disabled"));
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> eyre::Result<()> {
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_failed_read_keeps_reset_pending() -> eyre::Result<()> {
        let scheduler = ResetScheduler::new(Utc, 2)?;
        let failing = Rc::new(Cell::new(true));
        let mut persistence = Persistence::new(StorageBox::new(UnreadableData {
            inner: InMemoryStorage::with_values([
                (DATA_KEY, completed_store()),
                (LAST_RESET_KEY, "1704074400000".to_owned()),
            ]),
            failing: failing.clone(),
        }));

        assert!(persistence
            .check_and_reset(&scheduler, utc("2024-01-02T03:00:00Z"))
            .is_err());
        assert_eq!(persistence.last_reset(), Some(utc("2024-01-01T02:00:00Z")));

        failing.set(false);
        let outcome = persistence.check_and_reset(&scheduler, utc("2024-01-02T09:00:00Z"))?;
        assert_eq!(
            outcome,
            ResetOutcome::Performed {
                cleared: 2,
                marker: utc("2024-01-02T02:00:00Z")
            }
        );
        assert!(persistence.load().todos().all(|t| !t.completed));
        Ok(())
    }
}
