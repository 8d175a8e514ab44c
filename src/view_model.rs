//! To-do View-Model
//!
//! Owns the observable `(todos, error)` pair the page renders from and
//! forwards Store calls to a backend. Uses Leptos reactive_stores for
//! field-level reactivity.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use todo_core::{StoreOutcome, StoreRequest, StoreResult, StoreSnapshot, ToDo, ToDoStore, UserId};

/// Observable state of the view-model
#[derive(Clone, Debug, Default, Store)]
pub struct ViewModelState {
    /// `None` until the first successful load
    pub todos: Option<Vec<ToDo>>,
    /// Last failure reported by the backend
    pub error: Option<String>,
}

#[derive(Clone, Copy)]
pub struct ToDoViewModel {
    backend: StoredValue<Rc<dyn ToDoStore>, LocalStorage>,
    state: Store<ViewModelState>,
}

impl ToDoViewModel {
    pub fn new(backend: Rc<dyn ToDoStore>) -> Self {
        Self {
            backend: StoredValue::new_local(backend),
            state: Store::new(ViewModelState::default()),
        }
    }

    /// Tracked read of the observable pair
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            todos: self.state.todos().get(),
            error: self.state.error().get(),
        }
    }

    /// Run a request issued by the screen. Loads publish the list; mutations
    /// refresh it on success. Only a list that cannot be fetched reaches the
    /// error observable; a failed mutation is logged and leaves it alone.
    pub async fn execute(self, request: StoreRequest) -> StoreResult<StoreOutcome> {
        let backend = self.backend.get_value();
        let result = request.execute(backend.as_ref()).await;

        match (&result, request.action.is_mutation()) {
            (Ok(StoreOutcome::Loaded(todos)), _) => self.publish(todos.clone()),
            (Ok(_), true) => self.refresh(backend.as_ref(), &request.user_id).await,
            (Ok(_), false) => {}
            (Err(e), true) => log::warn!("{} failed: {}", request.action.name(), e),
            (Err(e), false) => self.state.error().set(Some(e.to_string())),
        }

        result
    }

    async fn refresh(&self, backend: &dyn ToDoStore, user_id: &UserId) {
        match backend.get_all_todo(user_id).await {
            Ok(todos) => self.publish(todos),
            Err(e) => {
                log::warn!("Refreshing to-dos failed: {}", e);
                self.state.error().set(Some(e.to_string()));
            }
        }
    }

    fn publish(&self, todos: Vec<ToDo>) {
        log::debug!("Store now holds {} to-do(s)", todos.len());
        self.state.todos().set(Some(todos));
        self.state.error().set(None);
    }
}
