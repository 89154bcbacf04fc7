//! Global State Management
//!
//! This module manages the global application state including:
//! - The viewer's role (edit capability)
//! - The active inventory tab
//! - The singleton toast surface

use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use leptos::*;

use crate::client::InventoryClient;

/// localStorage key for the persisted tab selection
const TAB_STORAGE_KEY: &str = "pantry.active_tab";

/// How long a toast stays up before auto-dismissing
const TOAST_DISMISS_MS: u32 = 3_000;

/// The viewer's capability, stamped on the host page by the backend
///
/// This is presentation-only gating; authorization proper happens on the
/// backend. Everything that renders an edit control consults
/// [`Role::can_edit`] — there is no other admin check in the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Full access: create, delete, adjust
    Admin,
    /// Read-only access
    #[default]
    Viewer,
}

impl Role {
    /// Parse the host page's `data-user-type` value
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Viewer
        }
    }

    /// Read the role off the `<body>` element; defaults to read-only
    pub fn from_document() -> Self {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute("data-user-type"))
            .map(|value| Role::parse(&value))
            .unwrap_or_default()
    }

    /// Single capability predicate for all admin-gated rendering
    pub fn can_edit(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Viewer => "Read-only",
        }
    }
}

/// Which collection panel is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventoryTab {
    #[default]
    Materials,
    FoodItems,
}

impl InventoryTab {
    pub fn label(&self) -> &'static str {
        match self {
            InventoryTab::Materials => "Raw Materials",
            InventoryTab::FoodItems => "Food Items",
        }
    }

    /// Stable identifier used for the persisted preference
    pub fn slug(&self) -> &'static str {
        match self {
            InventoryTab::Materials => "materials",
            InventoryTab::FoodItems => "food-items",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "materials" => Some(InventoryTab::Materials),
            "food-items" => Some(InventoryTab::FoodItems),
            _ => None,
        }
    }
}

/// Kind of toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Glyph shown next to the message
    pub fn glyph(&self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2713}",
            ToastKind::Error => "\u{2715}",
            ToastKind::Info => "\u{24D8}",
        }
    }

    pub fn container_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-500/10 border-green-500/30 text-green-400",
            ToastKind::Error => "bg-red-500/10 border-red-500/30 text-red-400",
            ToastKind::Info => "bg-blue-500/10 border-blue-500/30 text-blue-400",
        }
    }
}

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Sequence number; lets a dismiss timer ignore superseded toasts
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Viewer capability, resolved once at startup
    pub role: Role,

    /// Which panel is visible
    pub active_tab: RwSignal<InventoryTab>,

    /// Currently displayed toast; a new toast supersedes the old one
    pub toast: RwSignal<Option<Toast>>,

    /// Monotonic toast counter
    toast_seq: RwSignal<u64>,

    /// REST client for the inventory backend
    client: InventoryClient,
}

impl AppState {
    /// Create the app state, restoring the saved tab preference
    pub fn new() -> Self {
        let saved_tab = LocalStorage::get::<String>(TAB_STORAGE_KEY)
            .ok()
            .and_then(|slug| InventoryTab::from_slug(&slug))
            .unwrap_or_default();

        Self {
            role: Role::from_document(),
            active_tab: create_rw_signal(saved_tab),
            toast: create_rw_signal(None),
            toast_seq: create_rw_signal(0),
            client: InventoryClient::new(),
        }
    }

    /// Get a handle to the REST client
    pub fn client(&self) -> InventoryClient {
        self.client.clone()
    }

    /// Switch tabs and persist the choice as a UI preference
    pub fn select_tab(&self, tab: InventoryTab) {
        self.active_tab.set(tab);
        if let Err(e) = LocalStorage::set(TAB_STORAGE_KEY, tab.slug()) {
            tracing::warn!("Failed to save tab preference: {}", e);
        }
    }

    /// Show a toast, replacing any toast currently displayed
    ///
    /// The toast auto-dismisses after 3 s unless a newer one has taken
    /// its place by then.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.toast_seq.get_untracked() + 1;
        self.toast_seq.set(id);
        self.toast.set(Some(Toast {
            id,
            kind,
            message: message.into(),
        }));

        let toast = self.toast;
        Timeout::new(TOAST_DISMISS_MS, move || {
            toast.update(|current| {
                if current.as_ref().map(|t| t.id) == Some(id) {
                    *current = None;
                }
            });
        })
        .forget();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("user"), Role::Viewer);
        assert_eq!(Role::parse(""), Role::Viewer);
        assert!(Role::Admin.can_edit());
        assert!(!Role::Viewer.can_edit());
    }

    #[test]
    fn test_tab_slug_round_trip() {
        assert_eq!(
            InventoryTab::from_slug(InventoryTab::Materials.slug()),
            Some(InventoryTab::Materials)
        );
        assert_eq!(
            InventoryTab::from_slug(InventoryTab::FoodItems.slug()),
            Some(InventoryTab::FoodItems)
        );
        assert_eq!(InventoryTab::from_slug("beverages"), None);
    }
}
