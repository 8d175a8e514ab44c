//! To-do App
//!
//! Picks the Store backend and mounts the list page for the configured user.

use std::rc::Rc;

use leptos::prelude::*;

use todo_core::{MemoryStore, ToDoStore, UserId};

use crate::commands::{self, TauriStore};
use crate::components::ToDoListPage;
use crate::config::{AppConfig, Backend};
use crate::view_model::ToDoViewModel;

fn select_backend(backend: Backend) -> Rc<dyn ToDoStore> {
    match backend {
        Backend::Tauri => Rc::new(TauriStore),
        Backend::Memory => Rc::new(MemoryStore::new()),
        Backend::Auto if commands::is_tauri() => Rc::new(TauriStore),
        Backend::Auto => {
            log::info!("No Tauri host found, keeping to-dos in memory");
            Rc::new(MemoryStore::new())
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let view_model = ToDoViewModel::new(select_backend(config.backend));
    let user_id = UserId::new(config.user_id);

    view! {
        <main class="app-layout">
            <ToDoListPage view_model=view_model user_id=user_id />
        </main>
    }
}
