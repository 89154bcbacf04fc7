//! Raw Materials Panel
//!
//! Card grid over the raw-materials collection:
//! - Load/refresh from the backend (prior cards stay put on failure)
//! - Admin-only creation dialog and delete confirmation
//! - Atomic ±1 steppers that patch the affected card in place

use chrono::Utc;
use leptos::*;

use pantry_shared::{NewRawMaterial, RawMaterial};

use crate::client::ClientError;
use crate::components::card::{StockCard, StockLevel};
use crate::components::common::{BoxIcon, CloseIcon, PlusIcon, RefreshIcon};
use crate::components::confirm::DeleteConfirmModal;
use crate::format::{format_quantity, relative_time};
use crate::state::{AppState, ToastKind};

// ============================================================================
// Form types
// ============================================================================

/// Raw text captured from the creation form
#[derive(Clone, Debug, Default)]
struct MaterialFormData {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

/// Validation errors, one slot per field
#[derive(Clone, Debug, Default)]
struct ValidationErrors {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

impl ValidationErrors {
    fn is_valid(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.unit.is_none()
    }
}

/// Validate the creation form, coercing the quantity to a float
fn validate(data: &MaterialFormData) -> (ValidationErrors, Option<f64>) {
    let mut errs = ValidationErrors::default();
    let mut quantity = None;

    if data.name.trim().is_empty() {
        errs.name = Some("Name is required".to_string());
    }

    if data.quantity.trim().is_empty() {
        errs.quantity = Some("Quantity is required".to_string());
    } else {
        match data.quantity.trim().parse::<f64>() {
            Ok(q) if q.is_finite() && q >= 0.0 => quantity = Some(q),
            Ok(_) => errs.quantity = Some("Quantity cannot be negative".to_string()),
            Err(_) => errs.quantity = Some("Quantity must be a number".to_string()),
        }
    }

    if data.unit.trim().is_empty() {
        errs.unit = Some("Unit is required".to_string());
    }

    (errs, quantity)
}

// ============================================================================
// Main component
// ============================================================================

/// Raw materials panel
#[component]
pub fn MaterialsPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (materials, set_materials) = create_signal(Vec::<RawMaterial>::new());
    let (loading, set_loading) = create_signal(true);

    // Modal state
    let (show_create_modal, set_show_create_modal) = create_signal(false);
    let (deleting_material, set_deleting_material) = create_signal(Option::<RawMaterial>::None);

    let can_edit = state.role.can_edit();

    // Fetch the collection; on failure leave whatever is rendered alone
    let load = {
        let state = state.clone();
        move || {
            let state = state.clone();
            spawn_local(async move {
                match state.client().list_materials().await {
                    Ok(items) => {
                        tracing::info!("Loaded {} raw materials", items.len());
                        set_materials.set(items);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load raw materials: {}", e);
                        state.notify(ToastKind::Error, "Failed to load raw materials");
                    }
                }
                set_loading.set(false);
            });
        }
    };

    // Initial load on mount
    {
        let load = load.clone();
        create_effect(move |_| {
            load();
        });
    }

    // Refresh handler
    let on_refresh = {
        let load = load.clone();
        move |_| {
            set_loading.set(true);
            load();
        }
    };

    // Apply a ±1 delta; on success only the affected card changes
    let adjust = {
        let state = state.clone();
        move |id: u32, delta: i32| {
            let state = state.clone();
            spawn_local(async move {
                match state.client().adjust_material(id, delta as f64).await {
                    Ok(updated) => {
                        set_materials.update(|items| {
                            if let Some(item) = items.iter_mut().find(|m| m.id == id) {
                                *item = updated;
                            }
                        });
                        state.notify(ToastKind::Success, "Quantity updated");
                    }
                    Err(ClientError::InsufficientQuantity) => {
                        state.notify(ToastKind::Error, "Cannot reduce quantity below zero");
                    }
                    Err(e) => {
                        tracing::error!("Failed to adjust raw material {}: {}", id, e);
                        state.notify(ToastKind::Error, "Failed to update quantity");
                    }
                }
            });
        }
    };

    // Delete after confirmation, then do a full reload
    let confirm_delete = {
        let state = state.clone();
        let load = load.clone();
        move |material: RawMaterial| {
            let state = state.clone();
            let load = load.clone();
            spawn_local(async move {
                match state.client().delete_material(material.id).await {
                    Ok(()) => {
                        state.notify(ToastKind::Success, "Item deleted");
                        load();
                    }
                    Err(e) => {
                        tracing::error!("Failed to delete raw material {}: {}", material.id, e);
                        state.notify(ToastKind::Error, "Failed to delete item");
                    }
                }
                set_deleting_material.set(None);
            });
        }
    };

    // Creation handler passed to the modal
    let on_created = {
        let state = state.clone();
        let load = load.clone();
        move || {
            set_show_create_modal.set(false);
            state.notify(ToastKind::Success, "Raw material added");
            load();
        }
    };

    let grid_adjust = adjust.clone();

    view! {
        <div class="p-6">
            <div class="max-w-7xl mx-auto">
                // Header
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h1 class="text-2xl font-bold text-white">"Raw Materials"</h1>
                        <p class="text-slate-400 mt-1">"Track ingredient stock levels"</p>
                    </div>

                    <div class="flex items-center gap-3">
                        <button
                            class="flex items-center gap-2 px-4 py-2 bg-slate-700 hover:bg-slate-600 \
                                   text-white rounded-lg transition-colors"
                            on:click=on_refresh
                        >
                            <RefreshIcon class="w-4 h-4" />
                            "Refresh"
                        </button>
                        {can_edit.then(|| view! {
                            <button
                                class="flex items-center gap-2 px-4 py-2 bg-blue-500 hover:bg-blue-600 \
                                       text-white font-medium rounded-lg transition-colors"
                                on:click=move |_| set_show_create_modal.set(true)
                            >
                                <PlusIcon class="w-4 h-4" />
                                "Add Material"
                            </button>
                        })}
                    </div>
                </div>

                // Loading state
                <Show
                    when=move || !loading.get()
                    fallback=move || view! {
                        <div class="flex items-center justify-center py-16">
                            <div class="animate-spin w-8 h-8 border-4 border-blue-500 border-t-transparent rounded-full" />
                        </div>
                    }
                >
                    // Card grid
                    {
                        let grid_adjust = grid_adjust.clone();
                        move || {
                        let items = materials.get();

                        if items.is_empty() {
                            view! { <EmptyState /> }.into_view()
                        } else {
                            let adjust = grid_adjust.clone();
                            view! {
                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4">
                                    {items.into_iter().map(|material| {
                                        let adjust = adjust.clone();
                                        let id = material.id;
                                        let material_delete = material.clone();

                                        view! {
                                            <StockCard
                                                name=material.name.clone()
                                                quantity=format_quantity(material.quantity)
                                                unit=material.unit.clone()
                                                level=StockLevel::for_material(material.quantity)
                                                updated=relative_time(material.last_updated, Utc::now().naive_utc())
                                                category=None
                                                can_edit=can_edit
                                                on_adjust=move |delta| adjust(id, delta)
                                                on_delete=move || set_deleting_material.set(Some(material_delete.clone()))
                                            />
                                        }
                                    }).collect::<Vec<_>>()}
                                </div>
                            }.into_view()
                        }
                    }}
                </Show>

                // Creation dialog
                <Show when=move || show_create_modal.get()>
                    <AddMaterialModal
                        on_close=move || set_show_create_modal.set(false)
                        on_save=on_created.clone()
                    />
                </Show>

                // Delete confirmation
                <Show when=move || deleting_material.get().is_some()>
                    {
                        let confirm_delete = confirm_delete.clone();
                        move || {
                            if let Some(material) = deleting_material.get() {
                                let confirm = confirm_delete.clone();
                                let target = material.clone();
                                view! {
                                    <DeleteConfirmModal
                                        name=material.name.clone()
                                        detail=format!(
                                            "{} {} in stock",
                                            format_quantity(material.quantity),
                                            material.unit
                                        )
                                        on_close=move || set_deleting_material.set(None)
                                        on_confirm=move || confirm(target.clone())
                                    />
                                }.into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }
                    }
                </Show>
            </div>
        </div>
    }
}

// ============================================================================
// Empty state
// ============================================================================

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 bg-slate-800 rounded-xl border border-slate-700">
            <div class="w-16 h-16 rounded-full bg-slate-700 flex items-center justify-center mb-6">
                <BoxIcon class="w-8 h-8 text-slate-400" />
            </div>
            <h2 class="text-xl font-semibold text-white mb-2">"No raw materials yet"</h2>
            <p class="text-slate-400 text-center max-w-md">
                "Start by adding your first item"
            </p>
        </div>
    }
}

// ============================================================================
// Creation modal
// ============================================================================

#[component]
fn AddMaterialModal(
    on_close: impl Fn() + 'static + Clone,
    on_save: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let (form_data, set_form_data) = create_signal(MaterialFormData::default());
    let (errors, set_errors) = create_signal(ValidationErrors::default());
    let (saving, set_saving) = create_signal(false);

    let on_close_backdrop = on_close.clone();
    let on_close_header = on_close.clone();
    let on_close_cancel = on_close;
    let on_save_clone = on_save;

    let handle_save = move |_| {
        let data = form_data.get();
        let (validation_errors, quantity) = validate(&data);
        set_errors.set(validation_errors.clone());

        if !validation_errors.is_valid() {
            return;
        }
        let quantity = match quantity {
            Some(q) => q,
            None => return,
        };

        set_saving.set(true);

        let material = NewRawMaterial {
            name: data.name.trim().to_string(),
            quantity,
            unit: data.unit.trim().to_string(),
        };

        let state = state.clone();
        let on_save = on_save_clone.clone();
        spawn_local(async move {
            match state.client().create_material(&material).await {
                Ok(_) => on_save(),
                Err(e) => {
                    tracing::error!("Failed to add raw material: {}", e);
                    state.notify(ToastKind::Error, "Failed to add material");
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            // Backdrop
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close_backdrop()
            />

            // Modal
            <div class="relative bg-slate-800 rounded-xl border border-slate-700 shadow-2xl w-full max-w-lg mx-4">
                // Header
                <div class="flex items-center justify-between px-6 py-4 border-b border-slate-700">
                    <h2 class="text-lg font-semibold text-white">"Add Raw Material"</h2>
                    <button
                        class="p-1 text-slate-400 hover:text-white rounded transition-colors"
                        on:click=move |_| on_close_header()
                    >
                        <CloseIcon class="w-5 h-5" />
                    </button>
                </div>

                // Body
                <div class="p-6 space-y-4">
                    // Name field
                    <div class="space-y-1">
                        <label class="block text-sm font-medium text-slate-300">"Name"</label>
                        <input
                            type="text"
                            class=move || field_class(errors.get().name.is_some())
                            placeholder="Flour, olive oil, ..."
                            prop:value=move || form_data.get().name
                            on:input=move |e| {
                                set_form_data.update(|d| d.name = event_target_value(&e));
                                set_errors.update(|e| e.name = None);
                            }
                        />
                        {move || errors.get().name.map(|err| view! {
                            <p class="text-xs text-red-400 mt-1">{err}</p>
                        })}
                    </div>

                    // Quantity field
                    <div class="space-y-1">
                        <label class="block text-sm font-medium text-slate-300">"Quantity"</label>
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            class=move || field_class(errors.get().quantity.is_some())
                            placeholder="0.0"
                            prop:value=move || form_data.get().quantity
                            on:input=move |e| {
                                set_form_data.update(|d| d.quantity = event_target_value(&e));
                                set_errors.update(|e| e.quantity = None);
                            }
                        />
                        {move || errors.get().quantity.map(|err| view! {
                            <p class="text-xs text-red-400 mt-1">{err}</p>
                        })}
                    </div>

                    // Unit field
                    <div class="space-y-1">
                        <label class="block text-sm font-medium text-slate-300">"Unit"</label>
                        <input
                            type="text"
                            class=move || field_class(errors.get().unit.is_some())
                            placeholder="kg, liters, pieces, ..."
                            prop:value=move || form_data.get().unit
                            on:input=move |e| {
                                set_form_data.update(|d| d.unit = event_target_value(&e));
                                set_errors.update(|e| e.unit = None);
                            }
                        />
                        {move || errors.get().unit.map(|err| view! {
                            <p class="text-xs text-red-400 mt-1">{err}</p>
                        })}
                    </div>
                </div>

                // Footer
                <div class="flex items-center justify-end gap-3 px-6 py-4 border-t border-slate-700">
                    <button
                        class="px-4 py-2 text-sm font-medium text-slate-400 hover:text-white \
                               rounded-lg transition-colors"
                        on:click=move |_| on_close_cancel()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 text-sm font-medium bg-blue-500 hover:bg-blue-600 \
                               text-white rounded-lg transition-colors disabled:opacity-50"
                        disabled=move || saving.get()
                        on:click=handle_save
                    >
                        {move || if saving.get() { "Saving..." } else { "Add Material" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Input class with an error border when the field is invalid
fn field_class(has_error: bool) -> String {
    let base = "w-full px-3 py-2 rounded-lg bg-slate-900 border text-white text-sm \
                placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-blue-500 \
                focus:border-transparent";
    if has_error {
        format!("{} border-red-500", base)
    } else {
        format!("{} border-slate-700", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, quantity: &str, unit: &str) -> MaterialFormData {
        MaterialFormData {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_fractional_quantity() {
        let (errs, quantity) = validate(&form("Flour", "2.5", "kg"));
        assert!(errs.is_valid());
        assert_eq!(quantity, Some(2.5));
    }

    #[test]
    fn test_validate_accepts_zero_quantity() {
        let (errs, quantity) = validate(&form("Flour", "0", "kg"));
        assert!(errs.is_valid());
        assert_eq!(quantity, Some(0.0));
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let (errs, quantity) = validate(&form("", "", ""));
        assert!(errs.name.is_some());
        assert!(errs.quantity.is_some());
        assert!(errs.unit.is_some());
        assert_eq!(quantity, None);
    }

    #[test]
    fn test_validate_rejects_negative_and_garbage_quantity() {
        let (errs, _) = validate(&form("Flour", "-1", "kg"));
        assert!(errs.quantity.is_some());

        let (errs, _) = validate(&form("Flour", "plenty", "kg"));
        assert!(errs.quantity.is_some());
    }
}
