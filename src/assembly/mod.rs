//! Level assembly from unique tilings
//!
//! Turns tilings into shuffled, colored piece sequences and serializes them
//! as tokens for the game runtime.

/// Building blocks and the seeded level generator
pub mod level;
/// Colors, level pieces and token serialization
pub mod token;

pub use level::{LevelConfig, LevelGenerator};
pub use token::{LevelPiece, NominoColor};
