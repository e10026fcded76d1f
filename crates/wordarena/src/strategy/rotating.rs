//! # Rotating Largest Fit
//!
//! Spreads consecutive requests over the `N` largest eligible holes:
//!
//! ```text
//!   call 1 -> largest eligible hole
//!   call 2 -> second largest
//!   ...
//!   call N -> N-th largest
//!   call N+1 -> largest again
//! ```
//!
//! Holes of equal length rank by ascending offset. If fewer than `k` holes
//! are eligible on the call that wants the `k`-th largest, that call reports
//! no fit. The cursor advances on every call, fit or not.

use super::FitStrategy;
use crate::codec::{Hole, HoleList};

/// Default number of holes to rotate over.
pub const DEFAULT_ROTATION_SLOTS: usize = 3;

/// Stateful strategy rotating over the largest eligible holes.
///
/// The cursor lives in the instance, so every arena owns its own rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotatingLargest {
    /// Number of ranks to rotate over.
    slots: usize,
    /// Rank to hand out on the next call (0 = largest).
    cursor: usize,
}

impl RotatingLargest {
    /// Name reported by this strategy.
    pub const NAME: &'static str = "rotating_largest";

    /// Creates a strategy rotating over the `slots` largest holes.
    ///
    /// # Panics
    ///
    /// Panics if `slots` is zero.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        assert!(slots > 0, "Rotation needs at least one slot");
        Self { slots, cursor: 0 }
    }

    /// Number of ranks in the rotation.
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.slots
    }

    /// Rank the next call will hand out.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for RotatingLargest {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_SLOTS)
    }
}

impl FitStrategy for RotatingLargest {
    fn select_offset(&mut self, words_requested: usize, holes: &HoleList) -> Option<usize> {
        let rank = self.cursor;
        self.cursor = (self.cursor + 1) % self.slots;

        let mut eligible: Vec<Hole> = holes
            .iter()
            .copied()
            .filter(|hole| hole.fits(words_requested))
            .collect();

        // Stable sort keeps ascending offset among equal lengths.
        eligible.sort_by(|a, b| b.length.cmp(&a.length));
        eligible.truncate(self.slots);

        eligible.get(rank).map(|hole| hole.offset)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
