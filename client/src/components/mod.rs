//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and read shared state from Leptos context
//! providers.

pub mod identicon;
pub mod navbar;
