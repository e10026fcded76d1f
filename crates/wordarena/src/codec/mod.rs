//! # Occupancy Encodings
//!
//! Derived, never stored, views of the arena's occupancy table:
//! - **Hole list**: maximal free runs, the input every fit strategy reads
//! - **Bitmap**: one bit per word behind a 16-bit length prefix

pub mod bitmap;
mod holes;

pub use holes::{Hole, HoleList};
