use chrono::{DateTime, TimeZone, Utc};

use crate::{
    clock::Clock,
    confirmation::{ConfirmationRequest, ConfirmationToken, Confirmations, PendingAction},
    entities::{
        list::{ListId, TodoList},
        normalize_name,
        store::Store,
        todo::{Todo, TodoId},
    },
    error::ValidationError,
    ids::IdGenerator,
    persistence::{Persistence, ResetOutcome},
    presenter::{Presenter, View},
    progress::{self, Progress},
    reset::ResetScheduler,
};

/// Owns the in-memory state for the lifetime of a session. Every successful
/// mutation is saved as a whole then rendered.
pub struct App<P: Presenter> {
    store: Store,
    persistence: Persistence,
    ids: IdGenerator,
    confirmations: Confirmations,
    presenter: P,
    clock: Box<dyn Clock>,
    active_list: Option<ListId>,
    unsaved_changes: bool,
}

impl<P: Presenter> App<P> {
    /// Load the persisted store and render it, without running the daily reset.
    pub fn new(persistence: Persistence, presenter: P, clock: Box<dyn Clock>) -> Self {
        let store = persistence.load();
        tracing::debug!(
            lists = store.lists.len(),
            storage = %persistence.describe(),
            "loaded lists"
        );

        let mut app = Self {
            ids: IdGenerator::seeded(store.max_id()),
            store,
            persistence,
            confirmations: Confirmations::default(),
            presenter,
            clock,
            active_list: None,
            unsaved_changes: false,
        };
        app.render();
        app
    }

    /// Run the daily reset check then load the store.
    pub fn with_daily_reset<Tz: TimeZone>(
        mut persistence: Persistence,
        presenter: P,
        clock: Box<dyn Clock>,
        scheduler: &ResetScheduler<Tz>,
    ) -> Self {
        match persistence.check_and_reset(scheduler, clock.now()) {
            Ok(ResetOutcome::Performed { cleared, .. }) => {
                tracing::debug!(cleared, "daily reset performed")
            }
            Ok(ResetOutcome::Skipped { .. }) => {}
            Err(e) => tracing::warn!("Daily reset failed, it will be retried on next start: {e}"),
        }

        Self::new(persistence, presenter, clock)
    }

    pub fn add_list(&mut self, name: &str) -> Result<ListId, ValidationError> {
        let name = normalize_name(name)?;
        let list_id = self.ids.next(self.clock.now());

        tracing::debug!(list_id, "adding list");
        self.store.lists.push(TodoList::new(list_id, name));
        self.commit();
        Ok(list_id)
    }

    /// Append a todo to a list, `None` when the list does not exist.
    pub fn add_todo(&mut self, list_id: ListId, name: &str) -> Result<Option<TodoId>, ValidationError> {
        let name = normalize_name(name)?;
        let now = self.clock.now();

        let Some(list) = self.store.list_mut(list_id) else {
            return Ok(None);
        };

        let todo_id = self.ids.next(now);
        tracing::debug!(list_id, todo_id, "adding todo");
        list.todos.push(Todo::new(todo_id, name));
        self.commit();
        Ok(Some(todo_id))
    }

    /// Remove a list and every todo it holds. Leaving the opened list sends
    /// the presenter back to the overview.
    pub fn delete_list(&mut self, list_id: ListId) -> bool {
        if self.store.remove_list(list_id).is_none() {
            return false;
        }

        tracing::debug!(list_id, "deleted list");
        if self.active_list == Some(list_id) {
            self.active_list = None;
            self.presenter.navigate_to_lists();
        }
        self.commit();
        true
    }

    pub fn delete_todo(&mut self, list_id: ListId, todo_id: TodoId) -> bool {
        let removed = self
            .store
            .list_mut(list_id)
            .and_then(|list| list.remove_todo(todo_id));

        if removed.is_none() {
            return false;
        }

        tracing::debug!(list_id, todo_id, "deleted todo");
        self.commit();
        true
    }

    /// Flip a todo, returning its new completion state.
    pub fn toggle_todo(&mut self, list_id: ListId, todo_id: TodoId) -> Option<bool> {
        let completed = self
            .store
            .list_mut(list_id)?
            .todo_mut(todo_id)?
            .toggle();

        tracing::debug!(list_id, todo_id, completed, "toggled todo");
        self.commit();
        Some(completed)
    }

    pub fn rename_list(&mut self, list_id: ListId, name: &str) -> Result<bool, ValidationError> {
        let name = normalize_name(name)?;

        let Some(list) = self.store.list_mut(list_id) else {
            return Ok(false);
        };

        list.name = name;
        self.commit();
        Ok(true)
    }

    pub fn rename_todo(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        name: &str,
    ) -> Result<bool, ValidationError> {
        let name = normalize_name(name)?;

        let Some(todo) = self
            .store
            .list_mut(list_id)
            .and_then(|list| list.todo_mut(todo_id))
        else {
            return Ok(false);
        };

        todo.name = name;
        self.commit();
        Ok(true)
    }

    pub fn request_delete_list(&mut self, list_id: ListId) -> ConfirmationRequest {
        self.confirmations
            .request(PendingAction::DeleteList { list_id })
    }

    pub fn request_delete_todo(&mut self, list_id: ListId, todo_id: TodoId) -> ConfirmationRequest {
        self.confirmations
            .request(PendingAction::DeleteTodo { list_id, todo_id })
    }

    /// Answer a confirmation request. Returns whether the parked action ran and
    /// changed something.
    pub fn resolve_confirmation(&mut self, token: ConfirmationToken, confirmed: bool) -> bool {
        match self.confirmations.resolve(token, confirmed) {
            Some(PendingAction::DeleteList { list_id }) => self.delete_list(list_id),
            Some(PendingAction::DeleteTodo { list_id, todo_id }) => {
                self.delete_todo(list_id, todo_id)
            }
            None => false,
        }
    }

    /// Switch to the single list view
    pub fn open_list(&mut self, list_id: ListId) -> bool {
        if self.store.list(list_id).is_none() {
            return false;
        }

        self.active_list = Some(list_id);
        self.render();
        true
    }

    /// Switch to the overview
    pub fn show_lists(&mut self) {
        self.active_list = None;
        self.render();
    }

    pub fn render(&mut self) {
        if let Some(list_id) = self.active_list {
            if let Some(list) = self.store.list(list_id) {
                let progress = progress::list_progress(list);
                self.presenter.render(View::List { list, progress });
                return;
            }

            self.active_list = None;
            self.presenter.navigate_to_lists();
        }

        self.presenter.render(View::Lists {
            lists: &self.store.lists,
            overall: progress::overall_progress(&self.store),
        });
    }

    fn commit(&mut self) {
        match self.persistence.save(&self.store) {
            Ok(()) => self.unsaved_changes = false,
            Err(e) => {
                self.unsaved_changes = true;
                tracing::warn!("Couldn't save lists, changes only live in memory: {e}");
            }
        }
        self.render();
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.store.lists
    }

    pub fn list(&self, list_id: ListId) -> Option<&TodoList> {
        self.store.list(list_id)
    }

    pub fn todo(&self, list_id: ListId, todo_id: TodoId) -> Option<&Todo> {
        self.store.list(list_id)?.todo(todo_id)
    }

    pub fn list_progress(&self, list_id: ListId) -> Option<Progress> {
        self.store.list(list_id).map(progress::list_progress)
    }

    pub fn overall_progress(&self) -> Progress {
        progress::overall_progress(&self.store)
    }

    pub fn active_list(&self) -> Option<ListId> {
        self.active_list
    }

    /// True while the last save attempt failed
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub fn last_reset(&self) -> Option<DateTime<Utc>> {
        self.persistence.last_reset()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
