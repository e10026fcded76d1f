//! # Hole List
//!
//! Ordered view of every maximal free run in an occupancy table.
//!
//! ## Buffer Format
//!
//! ```text
//! [u32: pair count N]
//! [u32: offset 0]   [u32: length 0]
//! ...
//! [u32: offset N-1] [u32: length N-1]
//! ```
//!
//! Offsets and lengths are in words. Pairs are strictly ascending by offset,
//! never empty, and never touch each other (two touching runs would be one
//! hole).
//!
//! ## Text Format
//!
//! ```text
//! [0, 10] - [12, 2] - [20, 6]
//! ```

use crate::error::{ArenaError, ArenaResult};
use crate::MAX_WORDS;
use std::fmt;
use std::str::FromStr;

/// Separator between pairs in the text format.
const PAIR_SEPARATOR: &str = " - ";

/// A maximal run of free words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hole {
    /// Word index of the first free word.
    pub offset: usize,
    /// Number of free words in the run.
    pub length: usize,
}

impl Hole {
    /// Creates a hole descriptor.
    #[inline]
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Word index one past the last free word.
    #[inline]
    #[must_use]
    pub const fn end(self) -> usize {
        self.offset + self.length
    }

    /// Returns true if `words` fit inside this hole.
    #[inline]
    #[must_use]
    pub const fn fits(self, words: usize) -> bool {
        self.length >= words
    }
}

/// Every hole of an occupancy table, ascending by offset.
///
/// A `HoleList` is a snapshot: it is derived from the arena on demand and is
/// owned by whoever asked for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoleList {
    holes: Vec<Hole>,
}

impl HoleList {
    /// Creates an empty hole list (a full or uninitialized arena).
    #[must_use]
    pub const fn new() -> Self {
        Self { holes: Vec::new() }
    }

    /// Derives the hole list of an occupancy table.
    ///
    /// `occupancy[i]` is true when word `i` is allocated.
    #[must_use]
    pub fn from_occupancy(occupancy: &[bool]) -> Self {
        let mut holes = Vec::new();
        let mut run_start = None;

        for (index, &allocated) in occupancy.iter().enumerate() {
            match (allocated, run_start) {
                (false, None) => run_start = Some(index),
                (true, Some(start)) => {
                    holes.push(Hole::new(start, index - start));
                    run_start = None;
                }
                _ => {}
            }
        }

        if let Some(start) = run_start {
            holes.push(Hole::new(start, occupancy.len() - start));
        }

        Self { holes }
    }

    /// Builds a hole list from `(offset, length)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::MalformedHoleList`] if the pairs are not
    /// ascending, touch or overlap, are empty, or reach past [`MAX_WORDS`].
    pub fn from_pairs(pairs: &[(usize, usize)]) -> ArenaResult<Self> {
        let holes = pairs
            .iter()
            .map(|&(offset, length)| Hole::new(offset, length))
            .collect();
        Self::validated(holes)
    }

    /// Decodes the buffer produced by [`HoleList::to_buffer`].
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::MalformedHoleList`] if the count does not match
    /// the number of pairs carried, or the pairs break the ordering rules.
    pub fn from_buffer(buffer: &[u32]) -> ArenaResult<Self> {
        let (&count, pairs) = buffer
            .split_first()
            .ok_or_else(|| malformed("buffer has no pair count".to_string()))?;

        let count = count as usize;
        if pairs.len() != count * 2 {
            return Err(malformed(format!(
                "buffer declares {count} pairs but carries {} values",
                pairs.len()
            )));
        }

        let holes = pairs
            .chunks_exact(2)
            .map(|pair| Hole::new(pair[0] as usize, pair[1] as usize))
            .collect();
        Self::validated(holes)
    }

    /// Encodes the list as a pair count followed by `(offset, length)` pairs.
    ///
    /// Ownership of the returned buffer passes to the caller.
    #[must_use]
    pub fn to_buffer(&self) -> Vec<u32> {
        let mut buffer = Vec::with_capacity(1 + self.holes.len() * 2);
        buffer.push(to_u32(self.holes.len()));
        for hole in &self.holes {
            buffer.push(to_u32(hole.offset));
            buffer.push(to_u32(hole.length));
        }
        buffer
    }

    /// Number of holes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Returns true if there is no free word at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// The holes as a slice, ascending by offset.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Hole] {
        &self.holes
    }

    /// Iterates over the holes in ascending offset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Hole> {
        self.holes.iter()
    }

    /// The longest hole; the lowest offset wins a tie.
    #[must_use]
    pub fn largest(&self) -> Option<Hole> {
        self.holes.iter().fold(None, |best: Option<Hole>, &hole| match best {
            Some(current) if current.length >= hole.length => Some(current),
            _ => Some(hole),
        })
    }

    /// Total number of free words.
    #[must_use]
    pub fn free_words(&self) -> usize {
        self.holes.iter().map(|hole| hole.length).sum()
    }

    fn validated(holes: Vec<Hole>) -> ArenaResult<Self> {
        let mut previous_end: Option<usize> = None;

        for (index, hole) in holes.iter().enumerate() {
            if hole.length == 0 {
                return Err(malformed(format!(
                    "hole {index} at offset {} is empty",
                    hole.offset
                )));
            }

            let end = hole
                .offset
                .checked_add(hole.length)
                .filter(|&end| end <= MAX_WORDS)
                .ok_or_else(|| {
                    malformed(format!(
                        "hole {index} at offset {} runs past {MAX_WORDS} words",
                        hole.offset
                    ))
                })?;

            if let Some(previous_end) = previous_end {
                if hole.offset <= previous_end {
                    return Err(malformed(format!(
                        "hole {index} at offset {} does not start after the previous hole ending at {previous_end}",
                        hole.offset
                    )));
                }
            }

            previous_end = Some(end);
        }

        Ok(Self { holes })
    }
}

impl<'a> IntoIterator for &'a HoleList {
    type Item = &'a Hole;
    type IntoIter = std::slice::Iter<'a, Hole>;

    fn into_iter(self) -> Self::IntoIter {
        self.holes.iter()
    }
}

impl fmt::Display for HoleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, hole) in self.holes.iter().enumerate() {
            if index > 0 {
                f.write_str(PAIR_SEPARATOR)?;
            }
            write!(f, "[{}, {}]", hole.offset, hole.length)?;
        }
        Ok(())
    }
}

impl FromStr for HoleList {
    type Err = ArenaError;

    /// Parses the single-line text format written by a memory-map dump.
    fn from_str(line: &str) -> ArenaResult<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::new());
        }

        let holes = line
            .split(PAIR_SEPARATOR)
            .map(parse_pair)
            .collect::<ArenaResult<Vec<_>>>()?;
        Self::validated(holes)
    }
}

fn parse_pair(text: &str) -> ArenaResult<Hole> {
    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| malformed(format!("expected [offset, length], got {text:?}")))?;

    let (offset, length) = inner
        .split_once(", ")
        .ok_or_else(|| malformed(format!("expected [offset, length], got {text:?}")))?;

    Ok(Hole::new(parse_words(offset)?, parse_words(length)?))
}

fn parse_words(text: &str) -> ArenaResult<usize> {
    text.parse()
        .map_err(|_| malformed(format!("{text:?} is not a word count")))
}

/// Values are bounded by [`MAX_WORDS`], which fits in a `u32`.
fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn malformed(reason: String) -> ArenaError {
    ArenaError::MalformedHoleList(reason)
}
