//! Modal Component
//!
//! Centered dialog over a dimmed backdrop. Clicking the backdrop dismisses.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] on_dismiss: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="modal-backdrop"
            style="position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); display: flex; align-items: center; justify-content: center;"
            on:click=move |_| on_dismiss.run(())
        >
            <div
                class="modal"
                style="background: white; padding: 24px; display: flex; flex-direction: column; gap: 8px; align-items: flex-end; min-width: 260px;"
                on:click=|ev| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
