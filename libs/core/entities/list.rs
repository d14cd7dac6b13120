use serde_derive::{Deserialize, Serialize};

use super::todo::{Todo, TodoId};

pub type ListId = u64;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    /// Items in insertion order
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            todos: Vec::new(),
        }
    }

    pub fn todo(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == todo_id)
    }

    pub fn todo_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == todo_id)
    }

    pub fn remove_todo(&mut self, todo_id: TodoId) -> Option<Todo> {
        let index = self.todos.iter().position(|t| t.id == todo_id)?;
        Some(self.todos.remove(index))
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}
