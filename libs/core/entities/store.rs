use serde_derive::{Deserialize, Serialize};

use super::{
    list::{ListId, TodoList},
    todo::Todo,
};

/// Root document, persisted as a whole. Serialized as the bare array of lists.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    pub lists: Vec<TodoList>,
}

impl Store {
    pub fn new(lists: Vec<TodoList>) -> Self {
        Self { lists }
    }

    pub fn list(&self, list_id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    pub fn list_mut(&mut self, list_id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|l| l.id == list_id)
    }

    pub fn remove_list(&mut self, list_id: ListId) -> Option<TodoList> {
        let index = self.lists.iter().position(|l| l.id == list_id)?;
        Some(self.lists.remove(index))
    }

    /// Every todo of every list, in list order then insertion order
    pub fn todos(&self) -> impl Iterator<Item = &Todo> {
        self.lists.iter().flat_map(|l| l.todos.iter())
    }

    /// Mark every todo as incomplete, returning how many were completed
    pub fn clear_completion(&mut self) -> usize {
        let mut cleared = 0;
        for todo in self.lists.iter_mut().flat_map(|l| l.todos.iter_mut()) {
            if todo.completed {
                todo.completed = false;
                cleared += 1;
            }
        }
        cleared
    }

    /// Largest id in use, lists and todos alike
    pub fn max_id(&self) -> Option<u64> {
        self.lists
            .iter()
            .map(|l| l.id)
            .chain(self.todos().map(|t| t.id))
            .max()
    }
}
