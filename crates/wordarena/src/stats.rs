//! Arena statistics.

use crate::codec::HoleList;

/// Basis points in one whole (100%).
const BASIS_POINTS: usize = 10_000;

/// A snapshot of arena occupancy.
///
/// Obtained by calling [`crate::Arena::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Total words in the arena (0 when not initialized).
    pub capacity_words: usize,
    /// Words currently marked allocated.
    pub allocated_words: usize,
    /// Words currently free.
    pub free_words: usize,
    /// Number of maximal free runs.
    pub hole_count: usize,
    /// Length of the longest free run.
    pub largest_hole: usize,
    /// Blocks with a recorded length (block-length free policy only).
    pub tracked_blocks: usize,
}

impl ArenaStats {
    pub(crate) fn collect(occupancy: &[bool], holes: &HoleList, tracked_blocks: usize) -> Self {
        let free_words = holes.free_words();
        Self {
            capacity_words: occupancy.len(),
            allocated_words: occupancy.len() - free_words,
            free_words,
            hole_count: holes.len(),
            largest_hole: holes.largest().map_or(0, |hole| hole.length),
            tracked_blocks,
        }
    }

    /// Share of allocated words, in basis points.
    #[must_use]
    pub fn utilization_bp(&self) -> u32 {
        ratio_bp(self.allocated_words, self.capacity_words)
    }

    /// External fragmentation in basis points: the share of free words that
    /// lie outside the largest hole. 0 when all free space is one run.
    #[must_use]
    pub fn fragmentation_bp(&self) -> u32 {
        ratio_bp(self.free_words - self.largest_hole, self.free_words)
    }
}

fn ratio_bp(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    // part <= whole, so the result is at most BASIS_POINTS.
    u32::try_from(part * BASIS_POINTS / whole).unwrap_or(u32::MAX)
}
