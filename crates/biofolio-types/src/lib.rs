//! Shared domain types for Biofolio.
//!
//! This crate contains the core domain types used across the workspace:
//! biography records, form submissions, presentation views, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror, base64.

pub mod biography;
pub mod config;
pub mod error;
pub mod view;
