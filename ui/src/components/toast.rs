//! Toast Notification Surface
//!
//! Singleton transient notification: [`crate::state::AppState::notify`]
//! replaces whatever is showing and schedules the 3 s auto-dismiss; this
//! component only renders the current toast, if any.

use leptos::*;

use crate::state::AppState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        {move || state.toast.get().map(|toast| view! {
            <div class="fixed bottom-6 right-6 z-50">
                <div class=format!(
                    "flex items-center gap-3 px-4 py-3 rounded-lg border bg-slate-800 shadow-2xl {}",
                    toast.kind.container_class()
                )>
                    <span class="text-base font-bold">{toast.kind.glyph()}</span>
                    <span class="text-sm font-medium text-white">{toast.message}</span>
                </div>
            </div>
        })}
    }
}
