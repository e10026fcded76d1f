//! # Reference Strategies
//!
//! First, best and worst fit. All three scan holes in ascending offset order
//! and keep the earliest hole on a tie.

use super::FitStrategy;
use crate::codec::HoleList;

/// Takes the first hole that is long enough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FirstFit;

impl FirstFit {
    /// Name reported by this strategy.
    pub const NAME: &'static str = "first_fit";
}

impl FitStrategy for FirstFit {
    fn select_offset(&mut self, words_requested: usize, holes: &HoleList) -> Option<usize> {
        holes
            .iter()
            .find(|hole| hole.fits(words_requested))
            .map(|hole| hole.offset)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Takes the smallest hole that is long enough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BestFit;

impl BestFit {
    /// Name reported by this strategy.
    pub const NAME: &'static str = "best_fit";
}

impl FitStrategy for BestFit {
    fn select_offset(&mut self, words_requested: usize, holes: &HoleList) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;

        for hole in holes.iter().filter(|hole| hole.fits(words_requested)) {
            // Strictly smaller: an equal hole later on never replaces the first.
            if best.map_or(true, |(_, length)| hole.length < length) {
                best = Some((hole.offset, hole.length));
            }
        }

        best.map(|(offset, _)| offset)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Takes the largest hole that is long enough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorstFit;

impl WorstFit {
    /// Name reported by this strategy.
    pub const NAME: &'static str = "worst_fit";
}

impl FitStrategy for WorstFit {
    fn select_offset(&mut self, words_requested: usize, holes: &HoleList) -> Option<usize> {
        let mut worst: Option<(usize, usize)> = None;

        for hole in holes.iter().filter(|hole| hole.fits(words_requested)) {
            if worst.map_or(true, |(_, length)| hole.length > length) {
                worst = Some((hole.offset, hole.length));
            }
        }

        worst.map(|(offset, _)| offset)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holes(pairs: &[(usize, usize)]) -> HoleList {
        HoleList::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_first_fit_takes_lowest_offset() {
        let list = holes(&[(0, 2), (5, 8), (20, 4)]);
        assert_eq!(FirstFit.select_offset(3, &list), Some(5));
        assert_eq!(FirstFit.select_offset(2, &list), Some(0));
        assert_eq!(FirstFit.select_offset(9, &list), None);
    }

    #[test]
    fn test_best_fit_tie_keeps_first() {
        let list = holes(&[(0, 4), (10, 4)]);
        assert_eq!(BestFit.select_offset(4, &list), Some(0));
    }

    #[test]
    fn test_best_fit_picks_smallest_sufficient() {
        let list = holes(&[(10, 4), (24, 3), (37, 2), (49, 1), (60, 36)]);
        assert_eq!(BestFit.select_offset(1, &list), Some(49));
        assert_eq!(BestFit.select_offset(2, &list), Some(37));
        assert_eq!(BestFit.select_offset(3, &list), Some(24));
        assert_eq!(BestFit.select_offset(5, &list), Some(60));
        assert_eq!(BestFit.select_offset(37, &list), None);
    }

    #[test]
    fn test_worst_fit_selection() {
        let list = holes(&[(0, 4), (10, 10), (30, 2)]);
        assert_eq!(WorstFit.select_offset(3, &list), Some(10));
    }

    #[test]
    fn test_worst_fit_tie_keeps_first() {
        let list = holes(&[(0, 6), (10, 6), (20, 2)]);
        assert_eq!(WorstFit.select_offset(1, &list), Some(0));
        assert_eq!(WorstFit.select_offset(7, &list), None);
    }

    #[test]
    fn test_zero_word_request() {
        let list = holes(&[(3, 1), (8, 5)]);
        assert_eq!(FirstFit.select_offset(0, &list), Some(3));
        assert_eq!(BestFit.select_offset(0, &list), Some(3));
        assert_eq!(WorstFit.select_offset(0, &list), Some(8));
        assert_eq!(BestFit.select_offset(0, &HoleList::new()), None);
    }
}
