//! In-memory Store
//!
//! Keeps each user's list in insertion order. Used when the page runs
//! outside a Tauri webview and as the reference store in tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::model::{ToDo, ToDoId, UserId};
use crate::store::{StoreError, StoreResult, ToDoStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    lists: RefCell<HashMap<UserId, Vec<ToDo>>>,
    next_id: Cell<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a user's list, keeping the given order
    pub fn with_todos(user_id: &UserId, todos: Vec<ToDo>) -> Self {
        let store = Self::new();
        store.next_id.set(todos.len() as u64);
        store.lists.borrow_mut().insert(user_id.clone(), todos);
        store
    }

    fn allocate_id(&self) -> ToDoId {
        let next = self.next_id.get() + 1;
        self.next_id.set(next);
        ToDoId::new(format!("mem-{}", next))
    }
}

#[async_trait(?Send)]
impl ToDoStore for MemoryStore {
    async fn get_all_todo(&self, user_id: &UserId) -> StoreResult<Vec<ToDo>> {
        Ok(self.lists.borrow().get(user_id).cloned().unwrap_or_default())
    }

    async fn add_todo(&self, title: &str, user_id: &UserId) -> StoreResult<()> {
        let todo = ToDo {
            id: self.allocate_id(),
            title: title.to_string(),
            status: false,
            date: Utc::now(),
        };
        self.lists.borrow_mut().entry(user_id.clone()).or_default().push(todo);
        Ok(())
    }

    async fn edit_todo(&self, id: &ToDoId, title: &str, status: bool, user_id: &UserId) -> StoreResult<()> {
        let mut lists = self.lists.borrow_mut();
        let todo = lists
            .get_mut(user_id)
            .and_then(|list| list.iter_mut().find(|todo| &todo.id == id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        todo.title = title.to_string();
        todo.status = status;
        Ok(())
    }

    async fn delete_todo(&self, id: &ToDoId, user_id: &UserId) -> StoreResult<()> {
        let mut lists = self.lists.borrow_mut();
        let list = lists
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let before = list.len();
        list.retain(|todo| &todo.id != id);
        if list.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
