//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the one record shared across views; `dashboard` is local to
//! a single dashboard mount.

pub mod dashboard;
pub mod session;
