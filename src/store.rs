//! Store seam between the HTTP facade and whatever holds the records.
//! The in-memory implementation backs the local server and the tests.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use thiserror::Error;

use crate::models::Todo;
use crate::TodoId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    Poisoned,
}

pub trait TodoStore: Send + Sync {
    /// All records, ascending by identifier.
    fn list_todos(&self) -> Result<Vec<Todo>, StoreError>;
    fn get_todo(&self, id: &TodoId) -> Result<Option<Todo>, StoreError>;
    fn put_todo(&self, todo: &Todo) -> Result<(), StoreError>;
    /// Replaces `text` and `completed` and refreshes `updated_at`.
    /// Returns `None` when the identifier is unknown.
    fn update_todo(
        &self,
        id: &TodoId,
        text: &str,
        completed: bool,
    ) -> Result<Option<Todo>, StoreError>;
    fn delete_todo(&self, id: &TodoId) -> Result<Option<Todo>, StoreError>;
}

#[derive(Default)]
pub struct InMemoryStore {
    todos: Mutex<HashMap<TodoId, Todo>>,
}

impl TodoStore for InMemoryStore {
    fn list_todos(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.lock().map_err(|_| StoreError::Poisoned)?;
        let mut list: Vec<Todo> = todos.values().cloned().collect();
        list.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(list)
    }

    fn get_todo(&self, id: &TodoId) -> Result<Option<Todo>, StoreError> {
        let todos = self.todos.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(todos.get(id).cloned())
    }

    fn put_todo(&self, todo: &Todo) -> Result<(), StoreError> {
        let mut todos = self.todos.lock().map_err(|_| StoreError::Poisoned)?;
        todos.insert(todo.id.clone(), todo.clone());
        Ok(())
    }

    fn update_todo(
        &self,
        id: &TodoId,
        text: &str,
        completed: bool,
    ) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.lock().map_err(|_| StoreError::Poisoned)?;
        match todos.get_mut(id) {
            Some(todo) => {
                todo.text = text.to_string();
                todo.completed = completed;
                todo.updated_at = Utc::now();
                Ok(Some(todo.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete_todo(&self, id: &TodoId) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(todos.remove(id))
    }
}
