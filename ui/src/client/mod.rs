//! Inventory Client Layer
//!
//! This module provides the HTTP interface to the inventory backend's
//! JSON API. Every call is independent: a failed call surfaces as a
//! [`ClientError`] and never mutates UI state on its own, so callers
//! decide what (if anything) to re-render.

mod rest;

pub use rest::InventoryClient;

/// Error types for inventory API operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The adjust endpoint refused a delta that would take the quantity
    /// below zero (HTTP 400)
    #[error("Insufficient quantity")]
    InsufficientQuantity,

    #[error("Item not found")]
    NotFound,

    #[error("Request failed: HTTP {status} {message}")]
    RequestFailed { status: u16, message: String },
}
