//! Symbols printed on narrative dice faces
//!
//! Dice in this system carry symbols rather than numbers. Each pip kind
//! except Blank has a fixed opposite that it cancels when both appear in
//! the same roll.

use serde::{Deserialize, Serialize};

/// A single pip kind on a die face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    Triumph,
    Success,
    Advantage,
    Despair,
    Failure,
    Threat,
    Blank,
}

impl Symbol {
    /// Every symbol, Blank last
    pub const ALL: [Symbol; 7] = [
        Symbol::Triumph,
        Symbol::Success,
        Symbol::Advantage,
        Symbol::Despair,
        Symbol::Failure,
        Symbol::Threat,
        Symbol::Blank,
    ];

    /// Symbols that carry pips, in display order
    pub const PIPS: [Symbol; 6] = [
        Symbol::Triumph,
        Symbol::Success,
        Symbol::Advantage,
        Symbol::Despair,
        Symbol::Failure,
        Symbol::Threat,
    ];

    /// The symbol this one cancels
    ///
    /// Threat and Advantage cancel each other, as do Failure and Success.
    /// Despair cancels a Success and Triumph cancels a Failure, but nothing
    /// cancels a Triumph or Despair pip itself.
    pub fn opposite(&self) -> Option<Symbol> {
        match self {
            Self::Threat => Some(Self::Advantage),
            Self::Advantage => Some(Self::Threat),
            Self::Failure => Some(Self::Success),
            Self::Success => Some(Self::Failure),
            Self::Despair => Some(Self::Success),
            Self::Triumph => Some(Self::Failure),
            Self::Blank => None,
        }
    }

    /// Glyph used in outcome keys and face tables
    pub fn glyph(&self) -> char {
        match self {
            Self::Triumph => '❂',
            Self::Success => '✷',
            Self::Advantage => '▲',
            Self::Despair => '⦻',
            Self::Failure => '⨯',
            Self::Threat => '⎊',
            Self::Blank => '□',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Triumph => "triumph",
            Self::Success => "success",
            Self::Advantage => "advantage",
            Self::Despair => "despair",
            Self::Failure => "failure",
            Self::Threat => "threat",
            Self::Blank => "blank",
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_opposites_are_involutive() {
        for symbol in [Symbol::Success, Symbol::Failure, Symbol::Advantage, Symbol::Threat] {
            let opposite = symbol.opposite().unwrap();
            assert_eq!(opposite.opposite(), Some(symbol));
        }
    }

    #[test]
    fn test_special_opposites() {
        assert_eq!(Symbol::Triumph.opposite(), Some(Symbol::Failure));
        assert_eq!(Symbol::Despair.opposite(), Some(Symbol::Success));
        assert_eq!(Symbol::Blank.opposite(), None);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut glyphs: Vec<char> = Symbol::ALL.iter().map(|s| s.glyph()).collect();
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), Symbol::ALL.len());
    }
}
