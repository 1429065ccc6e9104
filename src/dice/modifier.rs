//! Pool modifiers

use serde::{Deserialize, Serialize};

/// A change applied to one die kind in a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Modifier {
    /// One more die of this kind
    #[default]
    Add,
    /// Move one die to the next stronger kind (or add one)
    Upgrade,
    /// One fewer die of this kind, never below zero
    Remove,
    /// Move one die to the next weaker kind (or drop it)
    Downgrade,
}

impl Modifier {
    /// The modifier that reverts this one
    pub fn opposite(&self) -> Modifier {
        match self {
            Self::Add => Self::Remove,
            Self::Remove => Self::Add,
            Self::Upgrade => Self::Downgrade,
            Self::Downgrade => Self::Upgrade,
        }
    }

    /// Sign prefix used in effect difficulty strings
    pub fn from_sign(sign: char) -> Option<Modifier> {
        match sign {
            '+' => Some(Self::Add),
            '-' => Some(Self::Remove),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Upgrade => '↑',
            Self::Remove => '-',
            Self::Downgrade => '↓',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involutive() {
        for modifier in [Modifier::Add, Modifier::Upgrade, Modifier::Remove, Modifier::Downgrade] {
            assert_ne!(modifier.opposite(), modifier);
            assert_eq!(modifier.opposite().opposite(), modifier);
        }
    }

    #[test]
    fn test_signs() {
        assert_eq!(Modifier::from_sign('+'), Some(Modifier::Add));
        assert_eq!(Modifier::from_sign('-'), Some(Modifier::Remove));
        assert_eq!(Modifier::from_sign('P'), None);
    }
}
