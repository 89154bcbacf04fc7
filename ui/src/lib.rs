//! Pantry UI Library
//!
//! This crate provides the browser-side view layer for the Pantry
//! inventory admin page. It fetches the raw-material and food-item
//! collections from the REST backend, renders them as card grids, and
//! issues point mutations (create, delete, quantity adjustments) back.
//!
//! The backend is an external collaborator: this crate holds no
//! authoritative entity state beyond the currently rendered signals.
//!
//! # Modules
//!
//! - [`app`]: Root application component
//! - [`client`]: REST client for the inventory backend
//! - [`components`]: UI components (panels, cards, dialogs, toasts)
//! - [`format`]: Display formatting helpers
//! - [`state`]: Global state management

pub mod app;
pub mod client;
pub mod components;
pub mod format;
pub mod state;

pub use app::App;
