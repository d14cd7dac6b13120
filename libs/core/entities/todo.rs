use serde_derive::{Deserialize, Serialize};

pub type TodoId = u64;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
        }
    }

    /// Flip the completion flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
