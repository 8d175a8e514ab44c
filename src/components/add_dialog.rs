//! Add Dialog
//!
//! Title field and an "Add" button. Disabled while a previous create is
//! still pending.

use leptos::prelude::*;

use todo_core::{StoreRequest, ToDoListScreen};

use super::Modal;

#[component]
pub fn AddDialog(
    screen: RwSignal<ToDoListScreen>,
    #[prop(into)] on_submit: Callback<StoreRequest>,
) -> impl IntoView {
    let title = move || screen.with(|s| s.dialog().draft_title().unwrap_or_default().to_string());
    let can_add = move || screen.with(|s| s.can_confirm_add());

    let add = move |_| {
        if let Some(request) = screen.try_update(|s| s.confirm_add()).flatten() {
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
            <div class="dialog-actions" style="display: flex; gap: 8px;">
                <button on:click=add disabled=move || !can_add()>"Add"</button>
            </div>
        </Modal>
    }
}
