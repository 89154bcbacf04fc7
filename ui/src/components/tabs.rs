//! Inventory Tab Bar
//!
//! Signal-driven tabs switching between the two collection panels. Both
//! panels stay mounted; switching tabs only changes visibility, so a
//! panel keeps its loaded cards when the user comes back to it.

use leptos::*;

use crate::state::{AppState, InventoryTab};

#[component]
pub fn InventoryTabs() -> impl IntoView {
    view! {
        <nav class="flex items-center gap-1">
            <TabButton tab=InventoryTab::Materials />
            <TabButton tab=InventoryTab::FoodItems />
        </nav>
    }
}

/// Individual tab button
#[component]
fn TabButton(tab: InventoryTab) -> impl IntoView {
    let state = expect_context::<AppState>();
    let select_state = state.clone();

    view! {
        <button
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if state.active_tab.get() == tab {
                    format!("{} bg-blue-500 text-white", base)
                } else {
                    format!("{} text-slate-400 hover:text-white hover:bg-slate-700", base)
                }
            }
            on:click=move |_| select_state.select_tab(tab)
        >
            {tab.label()}
        </button>
    }
}
