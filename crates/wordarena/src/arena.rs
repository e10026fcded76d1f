//! # Word Arena
//!
//! A contiguous byte buffer carved into fixed-size words, plus a per-word
//! occupancy table that is the only record of what is allocated.
//!
//! ```text
//!   word size = 8, 26 words
//!
//!   byte  0       80  96 112        160           208
//!         ┌─────────┬───┬───┬─────────┬─────────────┐
//!         │  free   │ A │ . │    B    │    free     │
//!         └─────────┴───┴───┴─────────┴─────────────┘
//!   word  0         10  12  14        20            26
//!
//!   hole list: [0, 10] - [12, 2] - [20, 6]
//!   bitmap:    04 00 | 00 CC 0F 00
//! ```
//!
//! ## Lifecycle
//!
//! ```text
//!   new ──► initialize(n) ──► allocate / free ... ──► shutdown ──┐
//!                ▲                                               │
//!                └───────────────────────────────────────────────┘
//! ```
//!
//! `initialize` may be called again at any time; it discards the previous
//! buffer. `shutdown` is idempotent and runs on drop.
//!
//! ## Freeing
//!
//! Under [`FreePolicy::ForwardScan`] no block length is recorded: `free`
//! clears words forward from the address until it meets a free word. Two
//! blocks placed back to back therefore look like one block, and freeing the
//! first also frees the second. [`FreePolicy::BlockLength`] records each
//! block's length at allocation time and releases exactly that block.
//!
//! # Thread Safety
//!
//! The arena has no internal locking. Use one arena per thread or wrap it in
//! a mutex.

use crate::codec::{bitmap, HoleList};
use crate::config::ArenaConfig;
use crate::error::{ArenaError, ArenaResult};
use crate::stats::ArenaStats;
use crate::strategy::FitStrategy;
use crate::MAX_WORDS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// A byte address inside an arena buffer.
///
/// Addresses are plain numbers: they are only meaningful to the arena that
/// handed them out, and only until that arena is re-initialized or shut down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(usize);

impl Address {
    /// Wraps a raw byte address.
    #[inline]
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw byte address.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// The address `bytes` further on.
    #[inline]
    #[must_use]
    pub const fn offset_by(self, bytes: usize) -> Self {
        Self(self.0 + bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// How `free` decides how many words to release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreePolicy {
    /// Clear forward from the address while words are allocated.
    #[default]
    ForwardScan,
    /// Release exactly the block recorded at the address.
    BlockLength,
}

/// A simulated word-addressed memory arena.
///
/// # Example
///
/// ```rust,ignore
/// let mut arena = Arena::new(8, BestFit);
/// arena.initialize(26)?;
///
/// let block = arena.allocate(80).unwrap(); // 10 words
/// assert_eq!(arena.hole_list().to_string(), "[10, 16]");
///
/// arena.free(block);
/// assert_eq!(arena.hole_list().to_string(), "[0, 26]");
/// ```
pub struct Arena {
    /// Bytes per word.
    word_size: usize,
    /// Words in the current buffer; 0 when not initialized.
    capacity_words: usize,
    /// The arena memory.
    buffer: Option<Box<[u8]>>,
    /// `occupancy[i]` is true when word `i` is allocated.
    occupancy: Vec<bool>,
    /// Block offset -> length, kept under [`FreePolicy::BlockLength`] only.
    blocks: BTreeMap<usize, usize>,
    /// Fixed at construction.
    free_policy: FreePolicy,
    /// Placement strategy used by the next `allocate`.
    strategy: Box<dyn FitStrategy>,
}

impl Arena {
    /// Creates an uninitialized arena with the forward-scan free policy.
    ///
    /// # Panics
    ///
    /// Panics if `word_size` is zero.
    #[must_use]
    pub fn new<S>(word_size: usize, strategy: S) -> Self
    where
        S: FitStrategy + 'static,
    {
        Self::with_free_policy(word_size, strategy, FreePolicy::ForwardScan)
    }

    /// Creates an uninitialized arena with an explicit free policy.
    ///
    /// # Panics
    ///
    /// Panics if `word_size` is zero.
    #[must_use]
    pub fn with_free_policy<S>(word_size: usize, strategy: S, free_policy: FreePolicy) -> Self
    where
        S: FitStrategy + 'static,
    {
        Self::with_boxed_strategy(word_size, Box::new(strategy), free_policy)
    }

    /// Builds an arena from configuration, initializing it when the
    /// configuration names an initial word count.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, if any.
    pub fn from_config(config: &ArenaConfig) -> ArenaResult<Self> {
        config.validate()?;

        let mut arena = Self::with_boxed_strategy(
            config.word_size,
            config.strategy.build(config.rotation_slots),
            config.free_policy,
        );

        if let Some(words) = config.initial_words {
            arena.initialize(words)?;
        }

        Ok(arena)
    }

    fn with_boxed_strategy(
        word_size: usize,
        strategy: Box<dyn FitStrategy>,
        free_policy: FreePolicy,
    ) -> Self {
        assert!(word_size > 0, "Word size must be greater than zero");

        Self {
            word_size,
            capacity_words: 0,
            buffer: None,
            occupancy: Vec::new(),
            blocks: BTreeMap::new(),
            free_policy,
            strategy,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Provisions a fresh, entirely free arena of `number_of_words` words.
    ///
    /// Any previous buffer is discarded first. Asking for zero words leaves
    /// the arena shut down.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::CapacityExceeded`] if `number_of_words` is above
    /// [`MAX_WORDS`] or the byte size does not fit in memory. The arena is
    /// left exactly as it was.
    pub fn initialize(&mut self, number_of_words: usize) -> ArenaResult<()> {
        let bytes = number_of_words
            .checked_mul(self.word_size)
            .filter(|_| number_of_words <= MAX_WORDS);

        let Some(bytes) = bytes else {
            warn!(
                requested = number_of_words,
                ceiling = MAX_WORDS,
                "initialize rejected: exceeds the word ceiling"
            );
            return Err(ArenaError::CapacityExceeded {
                requested: number_of_words,
                ceiling: MAX_WORDS,
            });
        };

        self.release();

        if number_of_words == 0 {
            info!("arena initialized with zero words, left shut down");
            return Ok(());
        }

        self.buffer = Some(vec![0u8; bytes].into_boxed_slice());
        self.occupancy = vec![false; number_of_words];
        self.capacity_words = number_of_words;

        info!(
            words = number_of_words,
            bytes,
            word_size = self.word_size,
            "arena initialized"
        );
        Ok(())
    }

    /// Releases the buffer. Safe to call any number of times.
    pub fn shutdown(&mut self) {
        if self.buffer.is_none() {
            trace!("shutdown on an arena that is not initialized");
            return;
        }

        let words = self.capacity_words;
        self.release();
        info!(words, "arena shut down");
    }

    fn release(&mut self) {
        self.buffer = None;
        self.capacity_words = 0;
        self.occupancy.clear();
        self.blocks.clear();
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    /// Allocates `size_in_bytes` bytes, rounded up to whole words.
    ///
    /// The active strategy picks the offset from the current hole list.
    ///
    /// # Returns
    ///
    /// The byte address of the block, or `None` if the arena is not
    /// initialized, the strategy finds no fit, or the strategy's offset would
    /// run past the end of the arena. A failed call changes nothing.
    pub fn allocate(&mut self, size_in_bytes: usize) -> Option<Address> {
        let Some(start) = self.memory_start() else {
            debug!(size_in_bytes, "allocate failed: arena is not initialized");
            return None;
        };

        let words_needed = size_in_bytes.div_ceil(self.word_size);
        let holes = self.hole_list();

        let Some(offset) = self.strategy.select_offset(words_needed, &holes) else {
            debug!(
                words_needed,
                strategy = self.strategy.name(),
                "allocate failed: no fit"
            );
            return None;
        };

        let range = match offset.checked_add(words_needed) {
            Some(end) if offset < self.capacity_words && end <= self.capacity_words => offset..end,
            _ => {
                debug!(
                    offset,
                    words_needed,
                    capacity_words = self.capacity_words,
                    strategy = self.strategy.name(),
                    "allocate failed: placement overruns the arena"
                );
                return None;
            }
        };

        if self.occupancy[range.clone()].iter().any(|&allocated| allocated) {
            warn!(
                offset,
                words_needed,
                strategy = self.strategy.name(),
                "placement overlaps allocated words"
            );
        }

        self.occupancy[range].fill(true);
        if self.free_policy == FreePolicy::BlockLength && words_needed > 0 {
            self.blocks.insert(offset, words_needed);
        }

        debug!(
            offset,
            words_needed,
            strategy = self.strategy.name(),
            "allocated"
        );
        Some(start.offset_by(offset * self.word_size))
    }

    /// Frees the block starting at `address`.
    ///
    /// Addresses outside the arena, and any address while the arena is not
    /// initialized, are ignored.
    ///
    /// # Returns
    ///
    /// The number of words released (0 when nothing changed).
    pub fn free(&mut self, address: Address) -> usize {
        let Some(offset) = self.offset_of(address) else {
            trace!(%address, "free ignored: address outside the arena");
            return 0;
        };

        let released = match self.free_policy {
            FreePolicy::ForwardScan => self.occupancy[offset..]
                .iter()
                .take_while(|&&allocated| allocated)
                .count(),
            FreePolicy::BlockLength => {
                let Some(length) = self.blocks.remove(&offset) else {
                    trace!(offset, "free ignored: no block starts here");
                    return 0;
                };
                length
            }
        };

        self.occupancy[offset..offset + released].fill(false);
        debug!(offset, released, "freed");
        released
    }

    /// Replaces the placement strategy used by subsequent allocations.
    pub fn set_allocator<S>(&mut self, strategy: S)
    where
        S: FitStrategy + 'static,
    {
        self.set_boxed_allocator(Box::new(strategy));
    }

    /// Replaces the placement strategy with an already boxed one.
    pub fn set_boxed_allocator(&mut self, strategy: Box<dyn FitStrategy>) {
        debug!(
            from = self.strategy.name(),
            to = strategy.name(),
            "strategy replaced"
        );
        self.strategy = strategy;
    }

    // =========================================================================
    // Encodings
    // =========================================================================

    /// The current hole list.
    #[must_use]
    pub fn hole_list(&self) -> HoleList {
        HoleList::from_occupancy(&self.occupancy)
    }

    /// The current hole list as a pair count followed by
    /// `(offset, length)` pairs. Ownership passes to the caller.
    #[must_use]
    pub fn hole_list_buffer(&self) -> Vec<u32> {
        self.hole_list().to_buffer()
    }

    /// The length-prefixed occupancy bitmap. Ownership passes to the caller.
    #[must_use]
    pub fn bitmap(&self) -> Vec<u8> {
        bitmap::encode(&self.occupancy)
    }

    /// Writes the hole list to `path` as a single line:
    /// `[offset, length] - [offset, length] - ...`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::Io`] if the file cannot be written.
    pub fn dump_memory_map(&self, path: impl AsRef<Path>) -> ArenaResult<()> {
        let path = path.as_ref();
        let line = format!("{}\n", self.hole_list());

        fs::write(path, line).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "memory map dumped");
        Ok(())
    }

    /// A snapshot of occupancy statistics.
    #[must_use]
    pub fn stats(&self) -> ArenaStats {
        ArenaStats::collect(&self.occupancy, &self.hole_list(), self.blocks.len())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Bytes per word.
    #[inline]
    #[must_use]
    pub const fn word_size(&self) -> usize {
        self.word_size
    }

    /// Total arena size in bytes (0 when not initialized).
    #[inline]
    #[must_use]
    pub const fn memory_limit(&self) -> usize {
        self.capacity_words * self.word_size
    }

    /// Total arena size in words (0 when not initialized).
    #[inline]
    #[must_use]
    pub const fn capacity_words(&self) -> usize {
        self.capacity_words
    }

    /// Returns true while a buffer is provisioned.
    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.buffer.is_some()
    }

    /// Address of the first byte of the arena.
    #[must_use]
    pub fn memory_start(&self) -> Option<Address> {
        self.buffer
            .as_ref()
            .map(|buffer| Address::new(buffer.as_ptr() as usize))
    }

    /// Address of word `word_offset`, if it lies inside the arena.
    #[must_use]
    pub fn address_of(&self, word_offset: usize) -> Option<Address> {
        if word_offset >= self.capacity_words {
            return None;
        }
        Some(self.memory_start()?.offset_by(word_offset * self.word_size))
    }

    /// Word index containing `address`, if it lies inside the arena.
    #[must_use]
    pub fn offset_of(&self, address: Address) -> Option<usize> {
        let delta = address.get().checked_sub(self.memory_start()?.get())?;
        (delta < self.memory_limit()).then_some(delta / self.word_size)
    }

    /// The occupancy table, one entry per word.
    #[inline]
    #[must_use]
    pub fn occupancy(&self) -> &[bool] {
        &self.occupancy
    }

    /// The whole arena buffer (empty when not initialized).
    #[must_use]
    pub fn memory(&self) -> &[u8] {
        self.buffer.as_deref().unwrap_or_default()
    }

    /// The whole arena buffer, mutably.
    #[must_use]
    pub fn memory_mut(&mut self) -> &mut [u8] {
        self.buffer.as_deref_mut().unwrap_or_default()
    }

    /// `len` bytes starting at `address`, if they lie inside the arena.
    #[must_use]
    pub fn block(&self, address: Address, len: usize) -> Option<&[u8]> {
        let range = self.byte_range(address, len)?;
        self.memory().get(range)
    }

    /// `len` bytes starting at `address`, mutably.
    #[must_use]
    pub fn block_mut(&mut self, address: Address, len: usize) -> Option<&mut [u8]> {
        let range = self.byte_range(address, len)?;
        self.memory_mut().get_mut(range)
    }

    fn byte_range(&self, address: Address, len: usize) -> Option<Range<usize>> {
        let from = address.get().checked_sub(self.memory_start()?.get())?;
        let to = from.checked_add(len)?;
        (to <= self.memory_limit()).then_some(from..to)
    }

    /// How `free` decides block extents.
    #[inline]
    #[must_use]
    pub const fn free_policy(&self) -> FreePolicy {
        self.free_policy
    }

    /// Name of the active strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("word_size", &self.word_size)
            .field("capacity_words", &self.capacity_words)
            .field("free_policy", &self.free_policy)
            .field("strategy", &self.strategy.name())
            .field("holes", &self.hole_list().to_string())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Hole;
    use crate::strategy::{BestFit, FirstFit, WorstFit};

    fn holes(arena: &Arena) -> Vec<(usize, usize)> {
        arena
            .hole_list()
            .iter()
            .map(|hole| (hole.offset, hole.length))
            .collect()
    }

    #[test]
    fn test_initialize_sets_limit_and_all_free() {
        let mut arena = Arena::new(4, FirstFit);
        arena.initialize(100).unwrap();

        assert_eq!(arena.memory_limit(), 400);
        assert_eq!(arena.capacity_words(), 100);
        assert_eq!(arena.memory().len(), 400);
        assert!(arena.occupancy().iter().all(|&allocated| !allocated));
        assert_eq!(holes(&arena), vec![(0, 100)]);
    }

    #[test]
    fn test_initialize_at_ceiling() {
        let mut arena = Arena::new(1, FirstFit);
        arena.initialize(MAX_WORDS).unwrap();
        assert_eq!(arena.hole_list().as_slice(), &[Hole::new(0, MAX_WORDS)]);
    }

    #[test]
    fn test_ceiling_rejection_keeps_state() {
        let mut arena = Arena::new(8, FirstFit);
        arena.initialize(20).unwrap();
        let block = arena.allocate(16).unwrap();
        let start = arena.memory_start();

        let result = arena.initialize(MAX_WORDS + 1);
        assert!(matches!(
            result,
            Err(ArenaError::CapacityExceeded { requested, ceiling })
                if requested == MAX_WORDS + 1 && ceiling == MAX_WORDS
        ));

        assert_eq!(arena.memory_start(), start);
        assert_eq!(arena.offset_of(block), Some(0));
        assert_eq!(holes(&arena), vec![(2, 18)]);
    }

    #[test]
    fn test_ceiling_rejection_on_shut_down_arena() {
        let mut arena = Arena::new(8, FirstFit);
        assert!(arena.initialize(MAX_WORDS + 1).is_err());
        assert!(!arena.is_initialized());
        assert_eq!(arena.memory_limit(), 0);
    }

    #[test]
    fn test_reinitialize_discards_occupancy() {
        let mut arena = Arena::new(2, FirstFit);
        arena.initialize(10).unwrap();
        arena.allocate(6).unwrap();

        arena.initialize(20).unwrap();
        assert_eq!(holes(&arena), vec![(0, 20)]);
        assert_eq!(arena.memory_limit(), 40);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut arena = Arena::new(8, FirstFit);
        arena.shutdown();

        arena.initialize(10).unwrap();
        arena.shutdown();
        arena.shutdown();

        assert!(!arena.is_initialized());
        assert_eq!(arena.memory_limit(), 0);
        assert_eq!(arena.memory_start(), None);
        assert!(arena.occupancy().is_empty());
        assert!(arena.memory().is_empty());
    }

    #[test]
    fn test_initialize_zero_words_stays_shut_down() {
        let mut arena = Arena::new(8, FirstFit);
        arena.initialize(4).unwrap();
        arena.initialize(0).unwrap();

        assert!(!arena.is_initialized());
        assert_eq!(arena.allocate(1), None);
    }

    #[test]
    fn test_uninitialized_arena() {
        let mut arena = Arena::new(8, FirstFit);

        assert_eq!(arena.allocate(8), None);
        assert_eq!(arena.free(Address::new(0x1000)), 0);
        assert!(arena.hole_list().is_empty());
        assert_eq!(arena.hole_list_buffer(), vec![0]);
        assert_eq!(arena.bitmap(), vec![0, 0]);
        assert_eq!(arena.stats(), ArenaStats::default());
    }

    #[test]
    fn test_allocate_rounds_up_to_words() {
        let mut arena = Arena::new(8, FirstFit);
        arena.initialize(10).unwrap();

        let first = arena.allocate(9).unwrap();
        let second = arena.allocate(1).unwrap();

        assert_eq!(arena.offset_of(first), Some(0));
        assert_eq!(arena.offset_of(second), Some(2));
        assert_eq!(second.get() - first.get(), 16);
        assert_eq!(holes(&arena), vec![(3, 7)]);
    }

    #[test]
    fn test_allocate_free_round_trip() {
        let mut arena = Arena::with_free_policy(4, BestFit, FreePolicy::BlockLength);
        arena.initialize(32).unwrap();
        arena.allocate(12).unwrap();
        let middle = arena.allocate(20).unwrap();
        arena.allocate(4).unwrap();
        arena.free(middle);

        let before = arena.hole_list();
        let block = arena.allocate(8).unwrap();
        assert_ne!(arena.hole_list(), before);

        assert_eq!(arena.free(block), 2);
        assert_eq!(arena.hole_list(), before);
    }

    #[test]
    fn test_forward_free_spills_into_adjacent_block() {
        let mut arena = Arena::new(4, FirstFit);
        arena.initialize(30).unwrap();

        let a = arena.allocate(40).unwrap();
        let b = arena.allocate(40).unwrap();
        assert_eq!(arena.offset_of(b), Some(10));

        assert_eq!(arena.free(a), 20);
        assert_eq!(holes(&arena), vec![(0, 30)]);

        // B is already gone.
        assert_eq!(arena.free(b), 0);
    }

    #[test]
    fn test_forward_free_stops_at_free_word() {
        let mut arena = Arena::new(4, FirstFit);
        arena.initialize(30).unwrap();

        let a = arena.allocate(40).unwrap();
        let b = arena.allocate(40).unwrap();

        assert_eq!(arena.free(b), 10);
        assert_eq!(holes(&arena), vec![(10, 20)]);
        assert_eq!(arena.free(a), 10);
        assert_eq!(holes(&arena), vec![(0, 30)]);
    }

    #[test]
    fn test_block_length_free_is_exact() {
        let mut arena = Arena::with_free_policy(4, FirstFit, FreePolicy::BlockLength);
        arena.initialize(30).unwrap();

        let a = arena.allocate(40).unwrap();
        let b = arena.allocate(40).unwrap();

        assert_eq!(arena.free(a), 10);
        assert_eq!(holes(&arena), vec![(0, 10), (20, 10)]);
        assert_eq!(arena.stats().tracked_blocks, 1);

        // Not the start of a block.
        assert_eq!(arena.free(b.offset_by(4)), 0);
        assert_eq!(arena.free(b), 10);
        assert_eq!(arena.free(b), 0);
        assert_eq!(holes(&arena), vec![(0, 30)]);
    }

    #[test]
    fn test_free_ignores_foreign_addresses() {
        let mut arena = Arena::new(8, FirstFit);
        arena.initialize(4).unwrap();
        arena.allocate(32).unwrap();

        let start = arena.memory_start().unwrap();
        assert_eq!(arena.free(start.offset_by(32)), 0);
        assert_eq!(arena.free(Address::new(start.get() - 1)), 0);
        assert!(arena.hole_list().is_empty());
    }

    #[test]
    fn test_free_inside_word_uses_containing_word() {
        let mut arena = Arena::new(8, FirstFit);
        arena.initialize(4).unwrap();
        let block = arena.allocate(16).unwrap();

        assert_eq!(arena.free(block.offset_by(3)), 2);
    }

    #[test]
    fn test_zero_byte_allocation() {
        let mut arena = Arena::new(8, BestFit);
        arena.initialize(4).unwrap();

        let block = arena.allocate(0).unwrap();
        assert_eq!(Some(block), arena.memory_start());
        assert_eq!(holes(&arena), vec![(0, 4)]);

        arena.allocate(32).unwrap();
        assert_eq!(arena.allocate(0), None);
    }

    #[test]
    fn test_out_of_memory() {
        let mut arena = Arena::new(2, WorstFit);
        arena.initialize(20).unwrap();

        assert!(arena.allocate(40).is_some());
        assert_eq!(arena.allocate(2), None);
    }

    #[test]
    fn test_overrunning_strategy_is_rejected() {
        let mut arena = Arena::new(4, |_: usize, _: &HoleList| Some(8_usize));
        arena.initialize(10).unwrap();

        assert!(arena.allocate(8).is_some());
        assert_eq!(arena.allocate(12), None);
        assert_eq!(holes(&arena), vec![(0, 8)]);

        arena.set_allocator(|_: usize, _: &HoleList| Some(10_usize));
        assert_eq!(arena.allocate(0), None);
    }

    #[test]
    fn test_set_allocator_switches_placement() {
        let mut arena = Arena::with_free_policy(1, BestFit, FreePolicy::BlockLength);
        arena.initialize(20).unwrap();
        let a = arena.allocate(4).unwrap();
        arena.allocate(1).unwrap();
        arena.free(a);
        // Holes: [0, 4] - [5, 15]

        arena.set_allocator(WorstFit);
        assert_eq!(arena.strategy_name(), "worst_fit");
        let block = arena.allocate(2).unwrap();
        assert_eq!(arena.offset_of(block), Some(5));

        arena.set_allocator(BestFit);
        let block = arena.allocate(2).unwrap();
        assert_eq!(arena.offset_of(block), Some(0));
    }

    #[test]
    fn test_block_windows() {
        let mut arena = Arena::new(8, FirstFit);
        arena.initialize(4).unwrap();
        let block = arena.allocate(16).unwrap();

        arena
            .block_mut(block, 8)
            .unwrap()
            .copy_from_slice(&42u64.to_le_bytes());
        assert_eq!(&arena.memory()[..8], &42u64.to_le_bytes());
        assert_eq!(arena.block(block, 32).map(<[u8]>::len), Some(32));
        assert_eq!(arena.block(block, 33), None);
    }

    #[test]
    fn test_address_of_and_offset_of_agree() {
        let mut arena = Arena::new(4, FirstFit);
        arena.initialize(8).unwrap();

        for word in 0..8 {
            let address = arena.address_of(word).unwrap();
            assert_eq!(arena.offset_of(address), Some(word));
        }
        assert_eq!(arena.address_of(8), None);
    }

    #[test]
    fn test_dump_to_unwritable_path_fails() {
        let mut arena = Arena::new(8, FirstFit);
        arena.initialize(4).unwrap();

        let result = arena.dump_memory_map(std::env::temp_dir());
        assert!(matches!(result, Err(ArenaError::Io { .. })));
    }

    #[test]
    fn test_debug_shows_holes() {
        let mut arena = Arena::new(8, BestFit);
        arena.initialize(4).unwrap();
        let text = format!("{arena:?}");
        assert!(text.contains("best_fit"));
        assert!(text.contains("[0, 4]"));
    }
}
