use std::collections::HashMap;

use ulid::Ulid;

use crate::entities::{list::ListId, todo::TodoId};

/// Identifies one pending confirmation request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConfirmationToken(Ulid);

/// Destructive operation waiting for the user's answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    DeleteList { list_id: ListId },
    DeleteTodo { list_id: ListId, todo_id: TodoId },
}

impl PendingAction {
    pub fn title(&self) -> &'static str {
        match self {
            PendingAction::DeleteList { .. } => "Delete List",
            PendingAction::DeleteTodo { .. } => "Delete To-Do",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PendingAction::DeleteList { .. } => {
                "Are you sure you want to delete this list and all its to-dos?"
            }
            PendingAction::DeleteTodo { .. } => "Are you sure you want to delete this to-do?",
        }
    }
}

/// What a front-end needs to ask the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub token: ConfirmationToken,
    pub title: &'static str,
    pub message: &'static str,
    pub action: PendingAction,
}

/// Pending confirmations, each scoped to its own token.
#[derive(Debug, Default)]
pub struct Confirmations {
    pending: HashMap<ConfirmationToken, PendingAction>,
}

impl Confirmations {
    pub fn request(&mut self, action: PendingAction) -> ConfirmationRequest {
        let token = ConfirmationToken(Ulid::new());
        self.pending.insert(token, action);

        ConfirmationRequest {
            token,
            title: action.title(),
            message: action.message(),
            action,
        }
    }

    /// Settle a request. The action is handed back only when confirmed; either
    /// way the token is consumed. Unknown tokens resolve to `None`.
    pub fn resolve(&mut self, token: ConfirmationToken, confirmed: bool) -> Option<PendingAction> {
        let action = self.pending.remove(&token)?;
        confirmed.then_some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmed_request_returns_action() {
        let mut confirmations = Confirmations::default();
        let request = confirmations.request(PendingAction::DeleteList { list_id: 1 });

        assert_eq!(request.title, "Delete List");
        assert_eq!(
            confirmations.resolve(request.token, true),
            Some(PendingAction::DeleteList { list_id: 1 })
        );
        assert!(confirmations.pending.is_empty());
    }

    #[test]
    fn test_cancelled_request_is_dropped() {
        let mut confirmations = Confirmations::default();
        let request = confirmations.request(PendingAction::DeleteTodo {
            list_id: 1,
            todo_id: 2,
        });

        assert_eq!(confirmations.resolve(request.token, false), None);
        assert_eq!(confirmations.resolve(request.token, true), None);
    }

    #[test]
    fn test_requests_are_independent() {
        let mut confirmations = Confirmations::default();
        let first = confirmations.request(PendingAction::DeleteList { list_id: 1 });
        let second = confirmations.request(PendingAction::DeleteList { list_id: 2 });
        assert_ne!(first.token, second.token);

        assert_eq!(
            confirmations.resolve(second.token, true),
            Some(PendingAction::DeleteList { list_id: 2 })
        );
        assert_eq!(
            confirmations.resolve(first.token, true),
            Some(PendingAction::DeleteList { list_id: 1 })
        );
    }
}
