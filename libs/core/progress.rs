use serde_derive::Serialize;

use crate::entities::{list::TodoList, store::Store};

/// Completion counters with a display percentage.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Progress {
    /// `completed / total` as a percentage rounded half-up, 0 when there is nothing to do
    pub percent: u8,
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn from_counts(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            // round(100 * c / t) with halves rounded up, in integers
            ((200 * completed + total) / (2 * total)) as u8
        };

        Self {
            percent,
            completed,
            total,
        }
    }

    /// Computed from the exact counts, never from the rounded percentage.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

pub fn list_progress(list: &TodoList) -> Progress {
    Progress::from_counts(list.completed_count(), list.todos.len())
}

pub fn overall_progress(store: &Store) -> Progress {
    let (completed, total) = store
        .lists
        .iter()
        .fold((0, 0), |(completed, total), list| {
            (completed + list.completed_count(), total + list.todos.len())
        });

    Progress::from_counts(completed, total)
}

/// Split lists into (incomplete, complete), keeping their relative order.
pub fn partition_by_completion(lists: &[TodoList]) -> (Vec<&TodoList>, Vec<&TodoList>) {
    lists
        .iter()
        .partition(|list| !list_progress(list).is_complete())
}
