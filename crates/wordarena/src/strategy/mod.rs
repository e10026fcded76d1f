//! # Fit Strategies
//!
//! A fit strategy chooses where a request of `n` words goes, looking only at
//! a hole-list snapshot. It never sees the arena itself.
//!
//! ## Contract
//!
//! ```text
//!   select_offset(words_requested, holes) -> Some(word offset) | None
//! ```
//!
//! - `None` means "no fit"; the arena reports an allocation failure.
//! - The arena re-checks the returned offset against its capacity, so a
//!   strategy that overshoots causes a failure, never a corruption.
//! - Strategies may keep private state between calls (see
//!   [`RotatingLargest`]); that state belongs to the strategy instance, so
//!   two arenas never share it.
//!
//! Any `FnMut(usize, &HoleList) -> Option<usize>` closure is a strategy.

mod fit;
mod rotating;

pub use fit::{BestFit, FirstFit, WorstFit};
pub use rotating::{RotatingLargest, DEFAULT_ROTATION_SLOTS};

use crate::codec::HoleList;
use serde::{Deserialize, Serialize};

/// Chooses which hole satisfies a request.
pub trait FitStrategy {
    /// Returns the word offset to place `words_requested` words at, or `None`
    /// if nothing fits.
    fn select_offset(&mut self, words_requested: usize, holes: &HoleList) -> Option<usize>;

    /// Short name used in logs and statistics.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> FitStrategy for F
where
    F: FnMut(usize, &HoleList) -> Option<usize>,
{
    fn select_offset(&mut self, words_requested: usize, holes: &HoleList) -> Option<usize> {
        self(words_requested, holes)
    }
}

/// The built-in strategies, by name.
///
/// This is what configuration files refer to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// [`FirstFit`].
    FirstFit,
    /// [`BestFit`].
    #[default]
    BestFit,
    /// [`WorstFit`].
    WorstFit,
    /// [`RotatingLargest`].
    RotatingLargest,
}

impl StrategyKind {
    /// Builds a fresh strategy instance.
    ///
    /// `rotation_slots` is only read by [`StrategyKind::RotatingLargest`].
    ///
    /// # Panics
    ///
    /// Panics if `self` is `RotatingLargest` and `rotation_slots` is zero.
    #[must_use]
    pub fn build(self, rotation_slots: usize) -> Box<dyn FitStrategy> {
        match self {
            Self::FirstFit => Box::new(FirstFit),
            Self::BestFit => Box::new(BestFit),
            Self::WorstFit => Box::new(WorstFit),
            Self::RotatingLargest => Box::new(RotatingLargest::new(rotation_slots)),
        }
    }

    /// The name the built strategy reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstFit => FirstFit::NAME,
            Self::BestFit => BestFit::NAME,
            Self::WorstFit => WorstFit::NAME,
            Self::RotatingLargest => RotatingLargest::NAME,
        }
    }
}
