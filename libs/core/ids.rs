use chrono::{DateTime, Utc};

/// Hands out timestamp-shaped ids that are strictly increasing, even when
/// several are requested within the same millisecond or the clock steps back.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Start after `max_id`, the largest id already in use
    pub fn seeded(max_id: Option<u64>) -> Self {
        Self {
            last: max_id.unwrap_or(0),
        }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> u64 {
        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}
