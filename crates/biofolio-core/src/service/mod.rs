//! Business logic services (use cases).
//!
//! Services borrow a store for the duration of one user action. They depend
//! on the store trait, never on a concrete implementation.

pub mod builder;
pub mod presenter;
