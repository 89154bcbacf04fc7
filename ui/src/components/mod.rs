//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `card`: inventory card rendering and the low-stock policy
//! - `confirm`: delete confirmation dialog
//! - `food`: food items panel and its creation dialog
//! - `materials`: raw materials panel and its creation dialog
//! - `tabs`: top-level tab bar
//! - `toast`: transient notification surface
//! - `common`: shared/reusable components

pub mod card;
pub mod common;
pub mod confirm;
pub mod food;
pub mod materials;
pub mod tabs;
pub mod toast;
