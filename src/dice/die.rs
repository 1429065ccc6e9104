//! Die kinds and their upgrade/downgrade families

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::{
    ABILITY_FACES, BOOST_FACES, CHALLENGE_FACES, DIFFICULTY_FACES, PERCENTILE_FACES,
    PROFICIENCY_FACES, SETBACK_FACES,
};
use super::face::Face;

/// Which side of a check a die works for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieFamily {
    /// Boost, Ability, Proficiency
    Positive,
    /// Setback, Difficulty, Challenge
    Negative,
    /// Percentile
    Numeric,
}

/// A die type. Declaration order is the canonical short-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DieKind {
    Proficiency,
    Ability,
    Boost,
    Challenge,
    Difficulty,
    Setback,
    Percentile,
}

impl DieKind {
    pub const COUNT: usize = 7;

    /// All kinds in canonical order
    pub const ALL: [DieKind; Self::COUNT] = [
        DieKind::Proficiency,
        DieKind::Ability,
        DieKind::Boost,
        DieKind::Challenge,
        DieKind::Difficulty,
        DieKind::Setback,
        DieKind::Percentile,
    ];

    /// Position in canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn faces(&self) -> &'static [Face] {
        match self {
            Self::Proficiency => &PROFICIENCY_FACES,
            Self::Ability => &ABILITY_FACES,
            Self::Boost => &BOOST_FACES,
            Self::Challenge => &CHALLENGE_FACES,
            Self::Difficulty => &DIFFICULTY_FACES,
            Self::Setback => &SETBACK_FACES,
            Self::Percentile => &PERCENTILE_FACES,
        }
    }

    /// Next stronger die in the same family
    pub fn upgrade(&self) -> Option<DieKind> {
        match self {
            Self::Boost => Some(Self::Ability),
            Self::Ability => Some(Self::Proficiency),
            Self::Setback => Some(Self::Difficulty),
            Self::Difficulty => Some(Self::Challenge),
            Self::Proficiency | Self::Challenge | Self::Percentile => None,
        }
    }

    /// Next weaker die in the same family
    pub fn downgrade(&self) -> Option<DieKind> {
        match self {
            Self::Proficiency => Some(Self::Ability),
            Self::Ability => Some(Self::Boost),
            Self::Challenge => Some(Self::Difficulty),
            Self::Difficulty => Some(Self::Setback),
            Self::Boost | Self::Setback | Self::Percentile => None,
        }
    }

    pub fn family(&self) -> DieFamily {
        match self {
            Self::Boost | Self::Ability | Self::Proficiency => DieFamily::Positive,
            Self::Setback | Self::Difficulty | Self::Challenge => DieFamily::Negative,
            Self::Percentile => DieFamily::Numeric,
        }
    }

    pub fn short_code(&self) -> char {
        match self {
            Self::Proficiency => 'P',
            Self::Ability => 'A',
            Self::Boost => 'B',
            Self::Challenge => 'C',
            Self::Difficulty => 'D',
            Self::Setback => 'S',
            Self::Percentile => '%',
        }
    }

    /// Look up a kind by short code (case-insensitive)
    pub fn from_short_code(code: char) -> Option<DieKind> {
        let code = code.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|kind| kind.short_code() == code)
    }

    /// Dice code understood by the Foundry VTT Genesys system
    pub fn foundry_code(&self) -> Option<&'static str> {
        match self {
            Self::Proficiency => Some("dp"),
            Self::Ability => Some("da"),
            Self::Boost => Some("db"),
            Self::Challenge => Some("dc"),
            Self::Difficulty => Some("di"),
            Self::Setback => Some("ds"),
            Self::Percentile => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Proficiency => "Proficiency",
            Self::Ability => "Ability",
            Self::Boost => "Boost",
            Self::Challenge => "Challenge",
            Self::Difficulty => "Difficulty",
            Self::Setback => "Setback",
            Self::Percentile => "Percentile",
        }
    }

    /// Draw one face uniformly at random
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Face {
        let faces = self.faces();
        faces[rng.gen_range(0..faces.len())]
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
