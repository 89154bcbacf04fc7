//! Inventory Card Component
//!
//! A single inventory card: name, quantity with its unit, stock badge,
//! optional category chip, the "last updated" label, and the admin-only
//! delete and ±1 stepper controls.

use leptos::*;
use pantry_shared::Category;

use crate::components::common::{MinusIcon, PlusIcon, TrashIcon};

/// Low-stock threshold for raw materials (strict less-than)
pub const MATERIAL_LOW_STOCK: f64 = 10.0;

/// Low-stock threshold for food items, in servings (strict less-than)
pub const FOOD_LOW_STOCK: u32 = 5;

/// Presentation-only stock level derived from a quantity
///
/// Never persisted and never sent to the backend; the boundary value
/// itself counts as in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    InStock,
    Low,
}

impl StockLevel {
    pub fn for_material(quantity: f64) -> Self {
        if quantity < MATERIAL_LOW_STOCK {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }

    pub fn for_servings(servings: u32) -> Self {
        if servings < FOOD_LOW_STOCK {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::InStock => "In Stock",
            StockLevel::Low => "Low Stock",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StockLevel::InStock => "bg-green-500/20 text-green-400",
            StockLevel::Low => "bg-amber-500/20 text-amber-400",
        }
    }

    /// Class for the large quantity figure
    pub fn quantity_class(&self) -> &'static str {
        match self {
            StockLevel::InStock => "text-white",
            StockLevel::Low => "text-amber-400",
        }
    }
}

/// One inventory card
///
/// The caller precomputes the display strings so the card stays agnostic
/// of entity kind; `on_adjust` receives the signed stepper delta.
#[component]
pub fn StockCard(
    name: String,
    quantity: String,
    unit: String,
    level: StockLevel,
    updated: String,
    category: Option<Category>,
    can_edit: bool,
    on_adjust: impl Fn(i32) + Clone + 'static,
    on_delete: impl Fn() + Clone + 'static,
) -> impl IntoView {
    let delete_title = format!("Delete {}", name);
    let on_decrement = on_adjust.clone();
    let on_increment = on_adjust;

    view! {
        <div class="bg-slate-800 rounded-xl border border-slate-700 p-4 flex flex-col gap-3 hover:border-slate-600 transition-colors">
            // Header: name + delete control
            <div class="flex items-start justify-between gap-2">
                <h3 class="text-base font-semibold text-white truncate">{name}</h3>
                {can_edit.then(|| view! {
                    <button
                        class="p-1.5 text-slate-400 hover:text-red-400 hover:bg-red-500/10 rounded-lg transition-colors flex-shrink-0"
                        title=delete_title.clone()
                        on:click=move |_| on_delete()
                    >
                        <TrashIcon class="w-4 h-4" />
                    </button>
                })}
            </div>

            // Category chip (food items only)
            {category.map(|c| view! {
                <span class="inline-flex items-center gap-1.5 self-start px-2.5 py-0.5 rounded-full text-xs font-medium bg-violet-500/20 text-violet-400">
                    <span>{c.emoji()}</span>
                    {c.label()}
                </span>
            })}

            // Quantity display + stock badge
            <div class="flex items-baseline gap-2">
                <span class=format!("text-3xl font-bold {}", level.quantity_class())>
                    {quantity}
                </span>
                <span class="text-sm text-slate-400">{unit}</span>
            </div>
            <span class=format!(
                "inline-flex items-center self-start px-2.5 py-0.5 rounded-full text-xs font-medium {}",
                level.badge_class()
            )>
                {level.label()}
            </span>

            // Footer: steppers + last updated
            <div class="flex items-center justify-between gap-2 mt-1">
                {can_edit.then(|| {
                    let on_decrement = on_decrement.clone();
                    let on_increment = on_increment.clone();
                    view! {
                        <div class="flex items-center gap-1">
                            <button
                                class="p-2 bg-slate-700 hover:bg-slate-600 text-white rounded-lg transition-colors"
                                title="Decrease quantity"
                                on:click=move |_| on_decrement(-1)
                            >
                                <MinusIcon class="w-4 h-4" />
                            </button>
                            <button
                                class="p-2 bg-slate-700 hover:bg-slate-600 text-white rounded-lg transition-colors"
                                title="Increase quantity"
                                on:click=move |_| on_increment(1)
                            >
                                <PlusIcon class="w-4 h-4" />
                            </button>
                        </div>
                    }
                })}
                <span class="text-xs text-slate-500 ml-auto">"Updated: " {updated}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_threshold_is_strict() {
        assert_eq!(StockLevel::for_material(9.99), StockLevel::Low);
        assert_eq!(StockLevel::for_material(10.0), StockLevel::InStock);
        assert_eq!(StockLevel::for_material(10.01), StockLevel::InStock);
        assert_eq!(StockLevel::for_material(0.0), StockLevel::Low);
    }

    #[test]
    fn test_food_threshold_is_strict() {
        assert_eq!(StockLevel::for_servings(4), StockLevel::Low);
        assert_eq!(StockLevel::for_servings(5), StockLevel::InStock);
        assert_eq!(StockLevel::for_servings(0), StockLevel::Low);
    }

    #[test]
    fn test_badge_presentation_tracks_level() {
        assert_eq!(StockLevel::Low.label(), "Low Stock");
        assert_eq!(StockLevel::InStock.label(), "In Stock");
        assert_ne!(
            StockLevel::Low.badge_class(),
            StockLevel::InStock.badge_class()
        );
        assert_ne!(
            StockLevel::Low.quantity_class(),
            StockLevel::InStock.quantity_class()
        );
    }
}
