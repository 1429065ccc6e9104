//! Turning rolled faces into net outcomes

pub mod resolver;
pub mod result;
pub mod roll;

pub use resolver::resolve;
pub use result::{RollResult, SymbolTotals, Verdict};
pub use roll::roll;
