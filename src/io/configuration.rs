//! Search constants and runtime configuration defaults

use crate::assembly::token::NominoColor;

/// Marker written into every filled footprint cell of the default catalog
pub const DEFAULT_FILL_MARKER: u8 = 1;

/// Grid sizes used for level assembly when none are requested
pub const DEFAULT_SIZES: [(usize, usize); 1] = [(3, 4)];

/// Size index of each block live at the start of a level
pub const DEFAULT_BLOCK_SIZES: [usize; 3] = [0, 0, 0];

/// Colors a building block may be painted with
pub const DEFAULT_PALETTE: [NominoColor; 5] = [
    NominoColor::Red,
    NominoColor::Gold,
    NominoColor::Pink,
    NominoColor::Blue,
    NominoColor::Green,
];

/// Number of leading level positions eligible for insertion
pub const DEFAULT_NUM_SELECTABLE: usize = 3;

/// Pieces a level must contain before exhausted blocks stop being refilled
pub const DEFAULT_MIN_PIECES: usize = 12;

/// Fixed seed for reproducible level assembly
pub const DEFAULT_SEED: u64 = 42;

/// Number of levels generated per run
pub const DEFAULT_LEVEL_COUNT: usize = 1;

// Rendering settings
/// Side length of one grid cell in exported images, in pixels
pub const CELL_PIXEL_SIZE: u32 = 32;
/// Width of the outline drawn between different placements, in pixels
pub const PLACEMENT_BORDER_PIXELS: u32 = 2;
/// Outline color between placements
pub const BORDER_COLOR: [u8; 4] = [24, 24, 24, 255];

// Progress bar display settings
/// Threshold for collapsing per-size progress into one bar
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Refresh the search counter every this many tilings
pub const PROGRESS_REPORT_INTERVAL: usize = 256;

/// Separator placed between serialized level tokens
pub const TOKEN_SEPARATOR: &str = ",\n";
