//! To-do List Page
//!
//! The single screen: list, floating add button, add/edit dialogs. State
//! transitions live in `ToDoListScreen`; this component renders it and
//! spawns the Store calls it emits, bound to the page's lifetime.

use futures::future::Aborted;
use leptos::prelude::*;
use leptos::task::spawn_local;

use todo_core::{ListView, StoreRequest, TaskScope, ToDo, ToDoListScreen, UserId};

use super::{AddDialog, EditDialog, ToDoItem};
use crate::view_model::ToDoViewModel;

#[component]
pub fn ToDoListPage(view_model: ToDoViewModel, user_id: UserId) -> impl IntoView {
    let screen = RwSignal::new(ToDoListScreen::new(user_id));
    let tasks = StoredValue::new(TaskScope::new());

    // Spawn a Store call; the dialogs never wait for it
    let dispatch = move |request: StoreRequest| {
        let id = request.id;
        let Some(task) = tasks.try_update_value(|scope| scope.track(id, view_model.execute(request))) else {
            return;
        };
        spawn_local(async move {
            match task.await {
                Ok(result) => {
                    tasks.try_update_value(|scope| scope.finish(id));
                    screen.try_update(|s| s.complete(id, &result));
                }
                Err(Aborted) => log::debug!("Store call #{} cancelled", id.0),
            }
        });
    };
    let on_submit = Callback::new(dispatch);

    on_cleanup(move || {
        tasks.try_update_value(|scope| scope.cancel_all());
    });

    // Load once on mount
    Effect::new(move |_| {
        if let Some(request) = screen.try_update_untracked(|s| s.mount()).flatten() {
            dispatch(request);
        }
    });

    // Mirror the view-model's observable state
    Effect::new(move |_| {
        let snapshot = view_model.snapshot();
        screen.update(|s| s.observe(&snapshot));
    });

    let list_view = Memo::new(move |_| screen.with(|s| s.list_view()));
    let rows = move || match list_view.get() {
        ListView::Rows(rows) => rows,
        ListView::Nothing | ListView::Message(_) => Vec::new(),
    };
    let message = move || match list_view.get() {
        ListView::Message(message) => Some(view! {
            <p class="empty-state" style="width: 100%; padding: 20px; text-align: center; font-size: 16px;">
                {message}
            </p>
        }),
        _ => None,
    };

    let on_activate = Callback::new(move |todo: ToDo| screen.update(|s| s.activate(&todo)));

    view! {
        <div class="todo-page" style="display: flex; flex-direction: column; height: 100vh; padding: 8px; box-sizing: border-box;">
            {message}
            <div class="todo-list" style="flex: 1; overflow-y: auto;">
                <For
                    each=rows
                    key=|todo| (todo.id.clone(), todo.title.clone(), todo.status)
                    children=move |todo| view! { <ToDoItem todo=todo on_activate=on_activate /> }
                />
            </div>

            <button
                class="fab"
                title="Add"
                style="position: fixed; right: 24px; bottom: 24px; width: 56px; height: 56px; border-radius: 16px; font-size: 28px; opacity: 0.5;"
                on:click=move |_| screen.update(|s| s.begin_create())
            >
                "+"
            </button>

            <Show when=move || screen.with(|s| s.dialog().is_editing())>
                <EditDialog screen=screen on_submit=on_submit />
            </Show>
            <Show when=move || screen.with(|s| s.dialog().is_adding())>
                <AddDialog screen=screen on_submit=on_submit />
            </Show>
        </div>
    }
}
