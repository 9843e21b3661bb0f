//! Business logic and store trait definitions for Biofolio.
//!
//! This crate defines the store "port" and the session state that
//! implements it, plus the builder and presenter services. It depends only on
//! `biofolio-types` -- never on `biofolio-infra` or any IO crate.

pub mod age;
pub mod repository;
pub mod service;
pub mod session;
