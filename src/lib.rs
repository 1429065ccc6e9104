//! Genesys Dice - narrative dice pool roller and exact probability engine

pub mod core;
pub mod dice;
pub mod effects;
pub mod probability;
pub mod resolution;

pub use crate::core::error::{DiceError, Result};
pub use dice::{DicePool, DieKind, Face, Modifier, Symbol};
pub use probability::{enumerate, enumerate_with, Distribution, EnumerationOptions, Outcome};
pub use resolution::{resolve, roll, RollResult, SymbolTotals, Verdict};
