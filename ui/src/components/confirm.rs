//! Delete Confirmation Modal
//!
//! Asks before destroying an entity. Declining — the Cancel button or a
//! click on the backdrop — closes the dialog without any network call.

use leptos::*;

use crate::components::common::WarningIcon;

#[component]
pub fn DeleteConfirmModal(
    /// Entity name shown in the dialog body
    name: String,
    /// Secondary line under the name (quantity summary)
    detail: String,
    on_close: impl Fn() + 'static + Clone,
    on_confirm: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let (deleting, set_deleting) = create_signal(false);

    let on_close_backdrop = on_close.clone();
    let on_close_cancel = on_close;
    let on_confirm_clone = on_confirm;

    let handle_confirm = move |_| {
        set_deleting.set(true);
        on_confirm_clone();
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            // Backdrop
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close_backdrop()
            />

            // Modal
            <div class="relative bg-slate-800 rounded-xl border border-slate-700 shadow-2xl w-full max-w-md mx-4">
                // Header with warning icon
                <div class="p-6 text-center">
                    <div class="w-16 h-16 mx-auto mb-4 rounded-full bg-red-500/10 flex items-center justify-center">
                        <WarningIcon class="w-8 h-8 text-red-400" />
                    </div>
                    <h2 class="text-xl font-semibold text-white mb-2">"Delete Item"</h2>
                    <p class="text-slate-400">
                        "Are you sure you want to delete this item? This action cannot be undone."
                    </p>
                </div>

                // Entity details
                <div class="mx-6 mb-6 p-4 bg-slate-900 rounded-lg border border-slate-700">
                    <div class="text-sm font-medium text-white">{name}</div>
                    <div class="text-xs text-slate-400 mt-0.5">{detail}</div>
                </div>

                // Actions
                <div class="flex items-center justify-end gap-3 px-6 py-4 border-t border-slate-700">
                    <button
                        class="px-4 py-2 text-sm font-medium text-slate-400 hover:text-white \
                               rounded-lg transition-colors"
                        on:click=move |_| on_close_cancel()
                        disabled=move || deleting.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 text-sm font-medium bg-red-500 hover:bg-red-600 \
                               text-white rounded-lg transition-colors disabled:opacity-50"
                        disabled=move || deleting.get()
                        on:click=handle_confirm
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Delete Item" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
