//! Roll results
//!
//! Symbol totals are net pips after cancellation and are never negative.

use serde::{Deserialize, Serialize};

use crate::core::error::{DiceError, Result};
use crate::dice::die::DieKind;
use crate::dice::face::{Face, PERCENTILE_RANGE};
use crate::dice::symbol::Symbol;

/// Overall outcome of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Success,
    Failure,
    /// No net successes or failures
    Neutral,
}

impl Verdict {
    /// `Some(true)` for success, `Some(false)` for failure, `None` when neutral
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Verdict::Success => Some(true),
            Verdict::Failure => Some(false),
            Verdict::Neutral => None,
        }
    }
}

/// Net pips per symbol
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SymbolTotals {
    pub triumph: u32,
    pub success: u32,
    pub advantage: u32,
    pub despair: u32,
    pub failure: u32,
    pub threat: u32,
}

impl SymbolTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::Triumph => self.triumph,
            Symbol::Success => self.success,
            Symbol::Advantage => self.advantage,
            Symbol::Despair => self.despair,
            Symbol::Failure => self.failure,
            Symbol::Threat => self.threat,
            Symbol::Blank => 0,
        }
    }

    /// Stream one symbol into the totals
    ///
    /// Triumph and Despair always record their own pip, then count as a
    /// Success or Failure for cancellation.
    pub fn add_symbol(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::Blank => {}
            Symbol::Triumph => {
                self.triumph += 1;
                self.cancel_or_add(Symbol::Success);
            }
            Symbol::Despair => {
                self.despair += 1;
                self.cancel_or_add(Symbol::Failure);
            }
            plain => self.cancel_or_add(plain),
        }
    }

    pub fn add_symbols(&mut self, symbols: &[Symbol]) {
        for symbol in symbols {
            self.add_symbol(*symbol);
        }
    }

    /// One unit of `symbol` cancels one accumulated unit of its opposite,
    /// or is recorded if there is none
    fn cancel_or_add(&mut self, symbol: Symbol) {
        let (own, opposite) = match symbol {
            Symbol::Success => (&mut self.success, &mut self.failure),
            Symbol::Failure => (&mut self.failure, &mut self.success),
            Symbol::Advantage => (&mut self.advantage, &mut self.threat),
            Symbol::Threat => (&mut self.threat, &mut self.advantage),
            Symbol::Triumph | Symbol::Despair | Symbol::Blank => return,
        };

        if *opposite == 0 {
            *own += 1;
        } else {
            *opposite -= 1;
        }
    }

    pub fn verdict(&self) -> Verdict {
        if self.success > 0 {
            Verdict::Success
        } else if self.failure > 0 {
            Verdict::Failure
        } else {
            Verdict::Neutral
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Outcome key: one glyph per pip, space separated, in symbol order
impl std::fmt::Display for SymbolTotals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for symbol in Symbol::PIPS {
            for _ in 0..self.get(symbol) {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{}", symbol.glyph())?;
                first = false;
            }
        }
        Ok(())
    }
}

/// The resolved outcome of one roll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollResult {
    totals: SymbolTotals,
    percentile: Vec<u8>,
    details: Vec<(DieKind, Vec<Face>)>,
}

impl RollResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one face through the cancellation rules
    ///
    /// A numeric face outside 1..=100 cannot come from the catalog and is
    /// reported as an error.
    pub fn add_face(&mut self, face: &Face) -> Result<()> {
        match face {
            Face::Number(n) => {
                if !PERCENTILE_RANGE.contains(n) {
                    return Err(DiceError::InvalidFace(*n));
                }
                self.percentile.push(*n);
            }
            Face::Single(_) | Face::Double(_) => self.totals.add_symbols(face.symbols()),
        }
        Ok(())
    }

    /// Feed a face rolled on a specific die, keeping it for details
    pub fn add_rolled(&mut self, kind: DieKind, face: Face) -> Result<()> {
        self.add_face(&face)?;
        match self.details.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, faces)) => faces.push(face),
            None => self.details.push((kind, vec![face])),
        }
        Ok(())
    }

    pub fn totals(&self) -> &SymbolTotals {
        &self.totals
    }

    pub fn get(&self, symbol: Symbol) -> u32 {
        self.totals.get(symbol)
    }

    /// Percentile values in roll order
    pub fn percentile(&self) -> &[u8] {
        &self.percentile
    }

    /// Rolled faces grouped by die kind, in the order kinds were first rolled
    pub fn details(&self) -> &[(DieKind, Vec<Face>)] {
        &self.details
    }

    pub fn verdict(&self) -> Verdict {
        self.totals.verdict()
    }

    pub fn success(&self) -> Option<bool> {
        self.verdict().as_bool()
    }

    /// One line per die kind: `A: ✷ | ▲ ▲`
    pub fn details_str(&self) -> String {
        self.details
            .iter()
            .map(|(kind, faces)| {
                let faces: Vec<String> = faces.iter().map(|f| f.to_string()).collect();
                format!("{}: {}", kind.short_code(), faces.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.totals)?;
        for (i, n) in self.percentile.iter().enumerate() {
            if i > 0 || !self.totals.is_empty() {
                f.write_str(" ")?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
