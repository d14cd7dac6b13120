use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone, Utc};

/// Outcome of evaluating the daily reset rule at a given instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetDecision<Tz: TimeZone> {
    /// Completion flags must be cleared and the marker moved to `new_marker`
    Due { new_marker: DateTime<Tz> },
    /// Nothing to do before `next_reset`
    NotDue { next_reset: DateTime<Tz> },
}

/// Decides when completion state is cleared: once per calendar day, when the
/// local wall clock crosses `reset_hour`.
#[derive(Clone, Debug)]
pub struct ResetScheduler<Tz: TimeZone> {
    tz: Tz,
    reset_hour: u32,
}

impl<Tz: TimeZone> ResetScheduler<Tz> {
    pub fn new(tz: Tz, reset_hour: u32) -> eyre::Result<Self> {
        if reset_hour > 23 {
            return Err(eyre::eyre!(
                "Invalid reset hour '{reset_hour}', expected a value between 0 and 23"
            ));
        }
        Ok(Self { tz, reset_hour })
    }

    pub fn reset_hour(&self) -> u32 {
        self.reset_hour
    }

    /// Next boundary after the given marker, `None` when no marker exists (a
    /// reset is due right away).
    pub fn next_reset_time(&self, marker: Option<DateTime<Utc>>) -> Option<DateTime<Tz>> {
        let marker = marker?.with_timezone(&self.tz);
        Some(self.boundary_on(marker.date_naive() + Duration::days(1)))
    }

    pub fn evaluate(&self, marker: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ResetDecision<Tz> {
        let now = now.with_timezone(&self.tz);
        let today = self.boundary_on(now.date_naive());

        let Some(next_reset) = self.next_reset_time(marker) else {
            // First run before today's boundary counts as already reset since
            // yesterday's boundary, so the coming boundary still fires.
            let new_marker = if now < today {
                self.boundary_on(now.date_naive() - Duration::days(1))
            } else {
                today
            };
            return ResetDecision::Due { new_marker };
        };

        if now >= next_reset {
            ResetDecision::Due { new_marker: today }
        } else {
            ResetDecision::NotDue { next_reset }
        }
    }

    /// `reset_hour:00:00` local time on `date`. A boundary that falls in a DST
    /// gap moves forward to the first valid hour, an ambiguous one takes the
    /// earlier instant.
    fn boundary_on(&self, date: NaiveDate) -> DateTime<Tz> {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        let boundary = midnight + Duration::hours(self.reset_hour as i64);

        for shift in 0..=24 {
            match self
                .tz
                .from_local_datetime(&(boundary + Duration::hours(shift)))
            {
                LocalResult::Single(t) => return t,
                LocalResult::Ambiguous(earliest, _) => return earliest,
                LocalResult::None => continue,
            }
        }

        self.tz.from_utc_datetime(&boundary)
    }
}
