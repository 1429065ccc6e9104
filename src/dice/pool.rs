//! Dice pools
//!
//! A pool is a count per die kind plus optional name/description. It is
//! built from a short-code string ("PAADD" = 1 Proficiency, 2 Ability,
//! 2 Difficulty), mutated through modifiers and additional effects, and
//! rendered back to the same short-code form in canonical order.

use std::str::FromStr;

use rand::Rng;

use crate::core::error::{DiceError, Result};
use crate::dice::die::DieKind;
use crate::dice::face::Face;
use crate::dice::modifier::Modifier;
use crate::effects::AdditionalEffect;
use crate::resolution::{roll, RollResult};

/// Parse a short-code string into one die kind per character
///
/// Surrounding whitespace is ignored and letters are case-insensitive.
/// Any other character is an error.
pub fn parse_short_codes(codes: &str) -> Result<Vec<DieKind>> {
    codes
        .trim()
        .chars()
        .map(|c| DieKind::from_short_code(c).ok_or(DiceError::InvalidShortCode(c)))
        .collect()
}

/// A multiset of dice
///
/// Two pools are equal when they hold the same dice. Name, description
/// and applied effects are not compared.
#[derive(Debug, Clone, Default)]
pub struct DicePool {
    counts: [u32; DieKind::COUNT],
    /// Display name (saved rolls, macros)
    pub name: String,
    pub description: String,
    applied_effects: Vec<AdditionalEffect>,
}

impl DicePool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from a short-code string
    pub fn parse(codes: &str) -> Result<Self> {
        let mut pool = Self::new();
        pool.add_dice(codes)?;
        Ok(pool)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add one die per short code
    ///
    /// Nothing is added if any code is invalid.
    pub fn add_dice(&mut self, codes: &str) -> Result<&mut Self> {
        for kind in parse_short_codes(codes)? {
            self.counts[kind.index()] += 1;
        }
        Ok(self)
    }

    pub fn count(&self, kind: DieKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Counts in canonical order
    pub fn counts(&self) -> impl Iterator<Item = (DieKind, u32)> + '_ {
        DieKind::ALL.iter().map(move |kind| (*kind, self.count(*kind)))
    }

    /// Total number of dice
    pub fn len(&self) -> usize {
        self.counts.iter().map(|c| *c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|c| *c == 0)
    }

    /// Apply a modifier to one die kind
    ///
    /// `None` is a plain add. Remove and Downgrade are no-ops when the
    /// pool holds none of `kind`. Upgrade falls back to adding `kind`
    /// when there is nothing to promote or no stronger die exists.
    pub fn modify(&mut self, kind: DieKind, modifier: Option<Modifier>) -> &mut Self {
        let i = kind.index();

        match modifier.unwrap_or_default() {
            Modifier::Add => self.counts[i] += 1,
            Modifier::Upgrade => match kind.upgrade() {
                Some(stronger) if self.counts[i] > 0 => {
                    self.counts[i] -= 1;
                    self.counts[stronger.index()] += 1;
                }
                _ => self.counts[i] += 1,
            },
            Modifier::Remove => {
                if self.counts[i] > 0 {
                    self.counts[i] -= 1;
                }
            }
            Modifier::Downgrade => {
                if self.counts[i] > 0 {
                    self.counts[i] -= 1;
                    if let Some(weaker) = kind.downgrade() {
                        self.counts[weaker.index()] += 1;
                    }
                }
            }
        }

        tracing::debug!("{:?} {:?} -> {}", modifier, kind, self.roll_str());
        self
    }

    /// Apply an additional effect and remember it
    pub fn add_effect(&mut self, effect: AdditionalEffect) {
        for kind in effect.dice() {
            self.modify(*kind, Some(effect.modifier()));
        }
        tracing::debug!("Applied effect '{}' ({})", effect.name, effect.difficulty);
        self.applied_effects.push(effect);
    }

    /// Revert a previously applied effect
    ///
    /// Each applied instance is reverted at most once. Returns false when
    /// `effect` is not currently applied.
    pub fn remove_effect(&mut self, effect: &AdditionalEffect) -> bool {
        let Some(position) = self.applied_effects.iter().position(|e| e == effect) else {
            return false;
        };

        let applied = self.applied_effects.remove(position);
        let opposite = applied.modifier().opposite();
        for kind in applied.dice() {
            self.modify(*kind, Some(opposite));
        }
        tracing::debug!("Removed effect '{}' ({})", applied.name, applied.difficulty);
        true
    }

    pub fn applied_effects(&self) -> &[AdditionalEffect] {
        &self.applied_effects
    }

    /// One entry per die, in canonical order
    pub fn dice(&self) -> Vec<DieKind> {
        self.counts()
            .flat_map(|(kind, count)| std::iter::repeat(kind).take(count as usize))
            .collect()
    }

    /// One face list per die, in canonical order
    pub fn face_lists(&self, include_percentile: bool) -> Vec<&'static [Face]> {
        self.dice()
            .into_iter()
            .filter(|kind| include_percentile || *kind != DieKind::Percentile)
            .map(|kind| kind.faces())
            .collect()
    }

    /// Short-code rendering in canonical order
    pub fn roll_str(&self) -> String {
        self.counts()
            .flat_map(|(kind, count)| std::iter::repeat(kind.short_code()).take(count as usize))
            .collect()
    }

    /// Roll every die once
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RollResult> {
        roll(self, rng)
    }

    /// Foundry VTT chat macro for this pool
    ///
    /// The percentile die has no Foundry equivalent and is left out.
    pub fn to_foundry_str(&self) -> String {
        let dice: Vec<String> = self
            .counts()
            .filter_map(|(kind, count)| kind.foundry_code().map(|code| format!("{}{}", count, code)))
            .collect();

        let mut args = vec![format!("roll={}", dice.join("+"))];

        if !self.name.is_empty() {
            args.push(format!("title={}", self.name.trim().replace(' ', "|")));
        }

        if !self.description.is_empty() {
            let escaped = self.description.trim().replace(' ', "|").replace('\n', "\\n");
            args.push(format!("description={}", escaped));
        }

        format!("/macro dice {}", args.join(" "))
    }
}

impl FromStr for DicePool {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for DicePool {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for DicePool {}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.roll_str())
    }
}
