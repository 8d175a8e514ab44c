//! Edit Dialog
//!
//! Title field, status checkbox, and Delete/Save for the selected to-do.

use leptos::prelude::*;

use todo_core::{StoreRequest, ToDoListScreen};

use super::Modal;

#[component]
pub fn EditDialog(
    screen: RwSignal<ToDoListScreen>,
    #[prop(into)] on_submit: Callback<StoreRequest>,
) -> impl IntoView {
    let title = move || screen.with(|s| s.dialog().draft_title().unwrap_or_default().to_string());
    let status = move || screen.with(|s| s.dialog().draft_status().unwrap_or(false));
    // Save/Delete stay disabled while this to-do has a call in flight
    let can_confirm = move || screen.with(|s| s.can_confirm_edit());

    let delete = move |_| {
        if let Some(request) = screen.try_update(|s| s.confirm_delete()).flatten() {
            on_submit.run(request);
        }
    };

    let save = move |_| {
        if let Some(request) = screen.try_update(|s| s.confirm_save()).flatten() {
            on_submit.run(request);
        }
    };

    view! {
        <Modal on_dismiss=Callback::new(move |_: ()| screen.update(|s| s.dismiss()))>
            <input
                type="text"
                class="draft-title"
                prop:value=title
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    screen.update(|s| s.set_draft_title(value));
                }
            />
            <label class="status-row" style="display: flex; align-items: center; gap: 6px;">
                <span>"Status"</span>
                <input
                    type="checkbox"
                    prop:checked=status
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        screen.update(|s| s.set_draft_status(checked));
                    }
                />
            </label>
            <div class="dialog-actions" style="display: flex; gap: 8px;">
                <button on:click=delete disabled=move || !can_confirm()>"Delete"</button>
                <button on:click=save disabled=move || !can_confirm()>"Save"</button>
            </div>
        </Modal>
    }
}
