//! Die faces
//!
//! A face carries one symbol, two symbols printed together, or a number
//! (percentile die only).

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Lowest and highest value on the percentile die
pub const PERCENTILE_RANGE: std::ops::RangeInclusive<u8> = 1..=100;

/// One printed face of a die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// A single symbol
    Single(Symbol),
    /// Two symbols on the same face, contributed in order
    Double([Symbol; 2]),
    /// Percentile value in 1..=100
    Number(u8),
}

impl Face {
    /// Symbols contributed by this face, in order
    ///
    /// Numeric faces contribute no symbols.
    pub fn symbols(&self) -> &[Symbol] {
        match self {
            Face::Single(symbol) => std::slice::from_ref(symbol),
            Face::Double(pair) => pair,
            Face::Number(_) => &[],
        }
    }

    pub fn number(&self) -> Option<u8> {
        match self {
            Face::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Single(symbol) => write!(f, "{}", symbol),
            Face::Double([first, second]) => write!(f, "{} {}", first, second),
            Face::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_of_each_variant() {
        assert_eq!(Face::Single(Symbol::Success).symbols(), &[Symbol::Success]);
        assert_eq!(
            Face::Double([Symbol::Success, Symbol::Advantage]).symbols(),
            &[Symbol::Success, Symbol::Advantage]
        );
        assert!(Face::Number(42).symbols().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Face::Single(Symbol::Triumph).to_string(), "❂");
        assert_eq!(Face::Double([Symbol::Threat, Symbol::Threat]).to_string(), "⎊ ⎊");
        assert_eq!(Face::Number(7).to_string(), "7");
    }
}
