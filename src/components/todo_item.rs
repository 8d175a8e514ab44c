//! To-do Item Component
//!
//! One row of the list: date, status dot, title. Clicking reports the
//! to-do upward.

use chrono::Local;
use leptos::prelude::*;

use todo_core::{ItemRow, ToDo};

#[component]
pub fn ToDoItem(
    todo: ToDo,
    #[prop(into)] on_activate: Callback<ToDo>,
) -> impl IntoView {
    let row = ItemRow::new(&todo, &Local);
    let dot_style = format!(
        "width: 18px; height: 18px; border-radius: 50%; background: {};",
        row.status_color
    );

    view! {
        <div
            class="todo-item"
            style="margin: 8px; padding: 14px; border-radius: 16px; background: #6750A4; cursor: pointer; display: flex; flex-direction: column; gap: 4px;"
            on:click=move |_| on_activate.run(todo.clone())
        >
            <div style="display: flex; align-items: center; justify-content: space-between;">
                <span class="todo-date" style="font-size: 16px; color: lightgray;">{row.timestamp}</span>
                <span class="todo-status" title="Status" style=dot_style></span>
            </div>
            <span class="todo-title" style="font-size: 20px; color: white;">{row.title}</span>
        </div>
    }
}
