//! Shared types for the Pantry inventory panel
//!
//! This crate contains the wire contract between the browser UI and the
//! inventory backend:
//! - Inventory entities (raw materials, food items)
//! - Creation and adjustment payloads
//! - The backend's timestamp and error-body formats

pub mod types;

pub use types::*;
