//! Shared utilities for the AutoBase project.
//!
//! This crate contains pure helper functions shared across the workspace,
//! mainly the display formatting and HTML escaping used by `business` and `ui`.

pub mod format;

pub use format::{escape_html, format_label, format_mileage};
