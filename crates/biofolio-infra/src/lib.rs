//! Infrastructure implementations for Biofolio.
//!
//! Everything that touches the filesystem lives here: resolving the data
//! directory, loading `config.toml`, and reading uploaded photos.

pub mod config;
pub mod filesystem;
pub mod photo;
