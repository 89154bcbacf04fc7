//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Global state (role, active tab, toast surface)
//! - The header with tab navigation
//! - The two collection panels
//!
//! Both panels are mounted up front and load their collections once;
//! switching tabs only toggles visibility, like the original dashboard.

use leptos::*;

use crate::components::food::FoodPanel;
use crate::components::materials::MaterialsPanel;
use crate::components::tabs::InventoryTabs;
use crate::components::toast::ToastHost;
use crate::state::{AppState, InventoryTab};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state.clone());

    let active_tab = app_state.active_tab;

    view! {
        <div class="min-h-screen flex flex-col bg-slate-900">
            // Header: logo, tabs, role badge
            <header class="bg-slate-800 border-b border-slate-700 flex-shrink-0">
                <div class="h-14 flex items-center px-4 gap-4">
                    <div class="flex items-center gap-2 text-white flex-shrink-0">
                        <div class="w-8 h-8 bg-gradient-to-br from-green-500 to-emerald-600 rounded-lg flex items-center justify-center">
                            <span class="text-white text-sm font-bold">"P"</span>
                        </div>
                        <span class="text-lg font-bold">"Pantry"</span>
                    </div>

                    <div class="ml-6">
                        <InventoryTabs />
                    </div>

                    <div class="ml-auto">
                        <RoleBadge />
                    </div>
                </div>
            </header>

            // Panels
            <main class="flex-1">
                <div class:hidden=move || { active_tab.get() != InventoryTab::Materials }>
                    <MaterialsPanel />
                </div>
                <div class:hidden=move || { active_tab.get() != InventoryTab::FoodItems }>
                    <FoodPanel />
                </div>
            </main>

            <ToastHost />
        </div>
    }
}

/// Capability badge in the header
#[component]
fn RoleBadge() -> impl IntoView {
    let state = expect_context::<AppState>();
    let can_edit = state.role.can_edit();

    view! {
        <div class=move || {
            let base = "flex items-center gap-2 px-3 py-1.5 rounded-full text-xs font-medium";
            if can_edit {
                format!("{} bg-green-500/10 text-green-400", base)
            } else {
                format!("{} bg-slate-700 text-slate-400", base)
            }
        }>
            <div class=move || {
                let base = "w-2 h-2 rounded-full";
                if can_edit {
                    format!("{} bg-green-400", base)
                } else {
                    format!("{} bg-slate-400", base)
                }
            } />
            {state.role.label()}
        </div>
    }
}
