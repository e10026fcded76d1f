//! # Word Arena
//!
//! A simulated memory arena: a contiguous buffer divided into fixed-size
//! words, handed out in word-granular blocks by a pluggable fit strategy.
//!
//! ## Design Principles
//!
//! 1. **One source of truth** - a per-word occupancy table; the hole list and
//!    bitmap are derived from it on demand
//! 2. **Strategies are values** - anything implementing [`FitStrategy`],
//!    including plain closures, can place blocks
//! 3. **No real memory management** - the arena owns one heap buffer and
//!    never maps pages
//!
//! ## Example
//!
//! ```rust,ignore
//! use wordarena::{Arena, BestFit, FreePolicy, WorstFit};
//!
//! let mut arena = Arena::with_free_policy(8, BestFit, FreePolicy::BlockLength);
//! arena.initialize(26)?;
//!
//! let a = arena.allocate(80).unwrap();
//! arena.allocate(16).unwrap();
//! let c = arena.allocate(16).unwrap();
//! arena.allocate(48).unwrap();
//! arena.free(a);
//! arena.free(c);
//!
//! assert_eq!(arena.hole_list().to_string(), "[0, 10] - [12, 2] - [20, 6]");
//! assert_eq!(arena.bitmap(), vec![0x04, 0x00, 0x00, 0xCC, 0x0F, 0x00]);
//!
//! arena.set_allocator(WorstFit);
//! arena.dump_memory_map("arena.map")?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod arena;
pub mod codec;
pub mod config;
pub mod error;
pub mod stats;
pub mod strategy;

pub use arena::{Address, Arena, FreePolicy};
pub use codec::{Hole, HoleList};
pub use config::ArenaConfig;
pub use error::{ArenaError, ArenaResult};
pub use stats::ArenaStats;
pub use strategy::{BestFit, FirstFit, FitStrategy, RotatingLargest, StrategyKind, WorstFit};

/// Hard ceiling on arena size, in words.
pub const MAX_WORDS: usize = 65_536;
