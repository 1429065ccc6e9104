//! Load additional-effect catalogs from TOML
//!
//! ```toml
//! [[groups]]
//! name = "Combat"
//!
//! [[groups.options]]
//! name = "Aim"
//! description = "Spend a maneuver aiming"
//! difficulty = "B"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::Result;
use crate::effects::{AdditionalEffect, EffectGroup, EffectRegistry};

#[derive(Debug, Deserialize)]
struct EffectFile {
    #[serde(default)]
    groups: Vec<GroupEntry>,
}

#[derive(Debug, Deserialize)]
struct GroupEntry {
    name: String,
    #[serde(default)]
    options: Vec<OptionEntry>,
}

#[derive(Debug, Deserialize)]
struct OptionEntry {
    name: String,
    #[serde(default)]
    description: String,
    difficulty: String,
}

/// Parse an effects catalog from TOML text
pub fn parse_effects(content: &str) -> Result<EffectRegistry> {
    let file: EffectFile = toml::from_str(content)?;
    let mut registry = EffectRegistry::new();

    for group in file.groups {
        let options = group
            .options
            .into_iter()
            .map(|o| AdditionalEffect::new(o.name, o.description, o.difficulty))
            .collect::<Result<Vec<_>>>()?;
        registry.add(EffectGroup::new(group.name, options))?;
    }

    tracing::debug!("Loaded {} effect groups", registry.len());
    Ok(registry)
}

/// Load an effects catalog from disk
pub fn load_effects(path: &Path) -> Result<EffectRegistry> {
    let content = fs::read_to_string(path)?;
    parse_effects(&content)
}
