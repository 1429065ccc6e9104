//! Additional effects
//!
//! An additional effect is a named pool change ("Aim: +B", "Cover: -A")
//! declared as a difficulty string of short codes with an optional sign.
//! Effects are grouped into catalogs loaded from TOML.

mod loader;

pub use loader::{load_effects, parse_effects};

use std::hash::{Hash, Hasher};

use crate::core::error::{DiceError, Result};
use crate::dice::die::DieKind;
use crate::dice::modifier::Modifier;
use crate::dice::pool::parse_short_codes;

/// A named change to a dice pool
///
/// Equality and hashing use (name, description, difficulty) only.
#[derive(Debug, Clone)]
pub struct AdditionalEffect {
    pub name: String,
    pub description: String,
    /// Short codes with optional `+`/`-` prefix, e.g. "-AA"
    pub difficulty: String,
    modifier: Modifier,
    dice: Vec<DieKind>,
}

impl AdditionalEffect {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Result<Self> {
        let difficulty = difficulty.into();
        let trimmed = difficulty.trim();

        let mut chars = trimmed.chars();
        let (modifier, codes) = match chars.next().and_then(Modifier::from_sign) {
            Some(modifier) => (modifier, chars.as_str()),
            None => (Modifier::Add, trimmed),
        };

        let dice = parse_short_codes(codes)?;

        Ok(Self {
            name: name.into(),
            description: description.into(),
            difficulty,
            modifier,
            dice,
        })
    }

    /// Modifier applied once per die
    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn dice(&self) -> &[DieKind] {
        &self.dice
    }
}

impl PartialEq for AdditionalEffect {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.difficulty == other.difficulty
    }
}

impl Eq for AdditionalEffect {}

impl Hash for AdditionalEffect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (&self.name, &self.description, &self.difficulty).hash(state);
    }
}

/// A named list of effect options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectGroup {
    pub name: String,
    pub options: Vec<AdditionalEffect>,
}

impl EffectGroup {
    pub fn new(name: impl Into<String>, options: Vec<AdditionalEffect>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// Longest difficulty string among the options
    pub fn max_difficulty_len(&self) -> usize {
        self.options
            .iter()
            .map(|o| o.difficulty.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn option(&self, name: &str) -> Option<&AdditionalEffect> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// Effect groups keyed by unique name, in insertion order
#[derive(Debug, Clone, Default)]
pub struct EffectRegistry {
    groups: Vec<EffectGroup>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group; names must be unique
    pub fn add(&mut self, group: EffectGroup) -> Result<()> {
        if self.get(&group.name).is_some() {
            return Err(DiceError::DuplicateEffectGroup(group.name));
        }
        self.groups.push(group);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&EffectGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Find an option by name across all groups, first match wins
    pub fn find_option(&self, name: &str) -> Result<&AdditionalEffect> {
        self.groups
            .iter()
            .find_map(|group| group.option(name))
            .ok_or_else(|| DiceError::UnknownEffect(name.to_string()))
    }

    pub fn groups(&self) -> &[EffectGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
