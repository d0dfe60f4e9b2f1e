//! Exhaustive polyomino tilings of small rectangles
//!
//! The search places rotated polyominoes hole by hole in row-major order and
//! enumerates every complete tiling of a grid. Tilings are then reduced to
//! distinct shape sequences, which feed a seeded level assembler that emits
//! colored piece tokens for the game runtime.

#![forbid(unsafe_code)]

/// Tiling search, coverage verification and deduplication
pub mod algorithm;
/// Level assembly from unique tilings
pub mod assembly;
/// Input/output operations and error handling
pub mod io;
/// Shape catalog and oriented piece geometry
pub mod spatial;

pub use algorithm::dedup::{dedupe, unique_tiling_names, unique_tilings};
pub use algorithm::search::{
    Tilings, enumerate_tilings, enumerate_tilings_bounded, enumerate_tilings_parallel,
};
pub use io::error::{NominoError, Result};
