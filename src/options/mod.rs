//! Centralized options with TOML preset support.
//!
//! Animation timings and icon ordering settings are consolidated here.
//! Options serialize to/from TOML so a page can ship presets alongside its
//! assets.

mod animation;
mod icons;

use std::path::Path;

pub use animation::AnimationOptions;
pub use icons::{IconOptions, DEFAULT_PRIORITY};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BunpeekError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Hover animation timings.
    pub animation: AnimationOptions,
    /// Icon ordering settings.
    pub icons: IconOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BunpeekError> {
        let content =
            std::fs::read_to_string(path).map_err(BunpeekError::Io)?;
        toml::from_str(&content)
            .map_err(|e| BunpeekError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BunpeekError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BunpeekError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BunpeekError::Io)?;
        }
        std::fs::write(path, content).map_err(BunpeekError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
