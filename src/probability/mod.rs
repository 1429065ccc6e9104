//! Exact outcome distributions
//!
//! Walks the full Cartesian product of the pool's face lists, resolves
//! every combination and groups identical net outcomes. There is no
//! sampling: the cost is the product of the face counts, so it is only
//! practical for table-sized pools. The percentile die is left out of
//! the product.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};

use ahash::AHashMap;
use serde::Serialize;

use crate::core::error::{DiceError, Result};
use crate::dice::face::Face;
use crate::dice::pool::DicePool;
use crate::resolution::result::{SymbolTotals, Verdict};

/// One distinct net outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub totals: SymbolTotals,
    /// Rendered outcome, e.g. "✷ ✷ ▲"
    pub key: String,
    /// Combinations that resolve to this outcome
    pub count: u64,
    /// Share of all combinations, rounded to 2 decimals
    pub percent: f64,
}

/// Full distribution for a pool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    /// Most likely first, ties broken by key
    pub outcomes: Vec<Outcome>,
    pub combinations: u64,
    pub success_count: u64,
    /// Percent of combinations with at least one net success
    pub success_rate: f64,
}

impl Distribution {
    /// Percentage for a rendered outcome key
    pub fn percent(&self, key: &str) -> Option<f64> {
        self.outcomes.iter().find(|o| o.key == key).map(|o| o.percent)
    }

    /// (key, percent) pairs in distribution order
    pub fn percentages(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.outcomes.iter().map(|o| (o.key.as_str(), o.percent))
    }

    /// Sum of the rounded bucket percentages
    pub fn total_percent(&self) -> f64 {
        self.outcomes.iter().map(|o| o.percent).sum()
    }
}

/// Limits for a single enumeration
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerationOptions<'a> {
    /// Refuse pools with more combinations than this
    pub max_combinations: Option<u64>,
    /// Checked before each face of the first die
    pub cancel: Option<&'a AtomicBool>,
}

impl<'a> EnumerationOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, max_combinations: u64) -> Self {
        self.max_combinations = Some(max_combinations);
        self
    }

    pub fn with_cancel(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Number of combinations the enumerator would walk, `None` on overflow
pub fn combination_count(pool: &DicePool) -> Option<u64> {
    pool.face_lists(false)
        .iter()
        .try_fold(1u64, |acc, faces| acc.checked_mul(faces.len() as u64))
}

/// Exact distribution of every outcome of `pool`
pub fn enumerate(pool: &DicePool) -> Distribution {
    let lists = pool.face_lists(false);
    let mut tally = Tally::default();
    let _ = walk(&lists, &mut tally, || ControlFlow::Continue(()));
    tally.finish()
}

/// Exact distribution with a combination limit and cancellation
pub fn enumerate_with(pool: &DicePool, options: &EnumerationOptions) -> Result<Distribution> {
    let lists = pool.face_lists(false);

    if let Some(limit) = options.max_combinations {
        let combinations = combination_count(pool).unwrap_or(u64::MAX);
        if combinations > limit {
            tracing::warn!(
                "Refusing to enumerate {}: {} combinations over limit {}",
                pool,
                combinations,
                limit
            );
            return Err(DiceError::TooManyCombinations { combinations, limit });
        }
    }

    let mut tally = Tally::default();
    let flow = walk(&lists, &mut tally, || match options.cancel {
        Some(flag) if flag.load(Ordering::Relaxed) => ControlFlow::Break(()),
        _ => ControlFlow::Continue(()),
    });

    if flow.is_break() {
        tracing::debug!("Enumeration of {} cancelled after {} combinations", pool, tally.total);
        return Err(DiceError::EnumerationCancelled);
    }

    Ok(tally.finish())
}

#[derive(Default)]
struct Tally {
    buckets: AHashMap<SymbolTotals, u64>,
    total: u64,
    success: u64,
}

impl Tally {
    fn record(&mut self, totals: SymbolTotals) {
        *self.buckets.entry(totals).or_insert(0) += 1;
        self.total += 1;
        if totals.verdict() == Verdict::Success {
            self.success += 1;
        }
    }

    fn finish(self) -> Distribution {
        let total = self.total.max(1) as f64;

        let mut outcomes: Vec<Outcome> = self
            .buckets
            .into_iter()
            .map(|(totals, count)| Outcome {
                key: totals.to_string(),
                totals,
                count,
                percent: round2(count as f64 / total * 100.0),
            })
            .collect();

        outcomes.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.totals.cmp(&b.totals)));

        tracing::debug!(
            "Enumerated {} combinations into {} outcomes",
            self.total,
            outcomes.len()
        );

        Distribution {
            outcomes,
            combinations: self.total,
            success_count: self.success,
            success_rate: round2(self.success as f64 / total * 100.0),
        }
    }
}

/// Visit every combination once, last die varying fastest
///
/// `between` runs before each face of the first die and can stop the walk.
fn walk<F>(lists: &[&[Face]], tally: &mut Tally, mut between: F) -> ControlFlow<()>
where
    F: FnMut() -> ControlFlow<()>,
{
    let Some((first, rest)) = lists.split_first() else {
        tally.record(SymbolTotals::new());
        return ControlFlow::Continue(());
    };

    let mut indices = vec![0usize; rest.len()];

    for lead in first.iter() {
        between()?;

        loop {
            let mut totals = SymbolTotals::new();
            totals.add_symbols(lead.symbols());
            for (faces, &i) in rest.iter().zip(&indices) {
                totals.add_symbols(faces[i].symbols());
            }
            tally.record(totals);

            if !advance(&mut indices, rest) {
                break;
            }
        }
    }

    ControlFlow::Continue(())
}

/// Odometer step; false once every position has wrapped back to zero
fn advance(indices: &mut [usize], lists: &[&[Face]]) -> bool {
    for (i, faces) in indices.iter_mut().zip(lists).rev() {
        *i += 1;
        if *i < faces.len() {
            return true;
        }
        *i = 0;
    }
    false
}

/// Two decimals, ties to the even digit
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
