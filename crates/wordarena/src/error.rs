//! # Arena Error Types
//!
//! All errors that can be reported by the arena, its codecs and its
//! configuration loader. Allocation failure is not an error: `allocate`
//! reports it as `None`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving an arena.
#[derive(Error, Debug)]
pub enum ArenaError {
    /// `initialize` asked for more words than the simulation allows.
    #[error("capacity exceeded: requested {requested} words, ceiling is {ceiling}")]
    CapacityExceeded {
        /// Number of words requested.
        requested: usize,
        /// Hard ceiling in words.
        ceiling: usize,
    },

    /// Word size must be at least one byte.
    #[error("invalid word size: {0}")]
    InvalidWordSize(usize),

    /// Invalid configuration file or value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A hole-list buffer or dump line could not be decoded.
    #[error("malformed hole list: {0}")]
    MalformedHoleList(String),

    /// A bitmap buffer could not be decoded.
    #[error("malformed bitmap: {0}")]
    MalformedBitmap(String),

    /// A file could not be read or written.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Result type for arena operations.
pub type ArenaResult<T> = Result<T, ArenaError>;
