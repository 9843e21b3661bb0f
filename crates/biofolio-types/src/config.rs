//! Global configuration types for Biofolio.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls form
//! defaults and photo upload limits.

use serde::{Deserialize, Serialize};

/// Top-level configuration for Biofolio.
///
/// Loaded from `~/.biofolio/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Birthdate prefilled in the form (`YYYY-MM-DD`).
    #[serde(default = "default_birthdate")]
    pub default_birthdate: String,

    /// Accepted photo file extensions, compared case-insensitively.
    #[serde(default = "default_photo_extensions")]
    pub photo_extensions: Vec<String>,

    /// Largest accepted photo, in bytes.
    #[serde(default = "default_max_photo_bytes")]
    pub max_photo_bytes: u64,
}

fn default_birthdate() -> String {
    "2000-01-01".to_string()
}

fn default_photo_extensions() -> Vec<String> {
    vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
}

fn default_max_photo_bytes() -> u64 {
    200 * 1024 * 1024
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_birthdate: default_birthdate(),
            photo_extensions: default_photo_extensions(),
            max_photo_bytes: default_max_photo_bytes(),
        }
    }
}
