//! Random level assembly from unique tilings
//!
//! A level is built from building blocks: each block is one randomly chosen
//! tiling of a configured grid size, painted a single random color. Pieces are
//! drawn from random live blocks and shuffled into the front of the level, and
//! exhausted blocks are refilled until the level holds enough pieces.

use std::collections::VecDeque;

use log::debug;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::dedup::unique_tilings;
use crate::assembly::token::{LevelPiece, NominoColor};
use crate::io::configuration::{
    DEFAULT_BLOCK_SIZES, DEFAULT_MIN_PIECES, DEFAULT_NUM_SELECTABLE, DEFAULT_PALETTE, DEFAULT_SEED,
    DEFAULT_SIZES,
};
use crate::io::error::{NominoError, Result, invalid_parameter};
use crate::spatial::shape::{Catalog, ShapeId};

/// Level assembly parameters
#[derive(Debug, Clone)]
pub struct LevelConfig {
    /// Grid sizes (rows, columns) building blocks are drawn from
    pub sizes: Vec<(usize, usize)>,
    /// Size index of every block live at the start of a level
    pub block_sizes: Vec<usize>,
    /// Colors blocks are painted with
    pub palette: Vec<NominoColor>,
    /// Leading level positions a new piece may be inserted at
    pub num_selectable: usize,
    /// Pieces drawn before exhausted blocks stop being refilled
    pub min_pieces: usize,
    /// Seed for every random choice
    pub seed: u64,
    /// Shapes tilings are built from
    pub catalog: Catalog,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            block_sizes: DEFAULT_BLOCK_SIZES.to_vec(),
            palette: DEFAULT_PALETTE.to_vec(),
            num_selectable: DEFAULT_NUM_SELECTABLE,
            min_pieces: DEFAULT_MIN_PIECES,
            seed: DEFAULT_SEED,
            catalog: Catalog::default(),
        }
    }
}

impl LevelConfig {
    /// Reject configurations assembly cannot run with
    ///
    /// # Errors
    ///
    /// Returns [`NominoError::InvalidParameter`] for an empty size list, block
    /// list or palette, a block referring to an unknown size, or a zero
    /// selection window.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(invalid_parameter(
                "sizes",
                &"[]",
                &"at least one grid size is required",
            ));
        }
        if self.block_sizes.is_empty() {
            return Err(invalid_parameter(
                "block_sizes",
                &"[]",
                &"at least one block per level is required",
            ));
        }
        if let Some(&index) = self.block_sizes.iter().find(|&&i| i >= self.sizes.len()) {
            return Err(invalid_parameter(
                "block_sizes",
                &index,
                &format!("only {} sizes are configured", self.sizes.len()),
            ));
        }
        if self.palette.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"at least one color is required",
            ));
        }
        if self.num_selectable == 0 {
            return Err(invalid_parameter(
                "num_selectable",
                &self.num_selectable,
                &"must be positive",
            ));
        }
        Ok(())
    }
}

/// One tiling being drained front to back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingBlock {
    pieces: VecDeque<ShapeId>,
}

impl BuildingBlock {
    /// Block holding the given tiling
    pub fn new(tiling: &[ShapeId]) -> Self {
        Self {
            pieces: tiling.iter().copied().collect(),
        }
    }

    /// Take the next shape, front first
    pub fn pop(&mut self) -> Option<ShapeId> {
        self.pieces.pop_front()
    }

    /// Shapes left in the block
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether the block is drained
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

// A live block with the size it was drawn from and the color it was painted
struct LiveBlock {
    block: BuildingBlock,
    size_index: usize,
    color: NominoColor,
}

/// Seeded level assembler over precomputed unique tilings
#[derive(Debug)]
pub struct LevelGenerator {
    config: LevelConfig,
    tilings: Vec<Vec<Vec<ShapeId>>>,
    rng: StdRng,
}

impl LevelGenerator {
    /// Enumerate unique tilings for every configured size and prepare assembly
    ///
    /// # Errors
    ///
    /// Returns [`NominoError::InvalidParameter`] for an unusable configuration,
    /// [`NominoError::InvalidDimensions`] for a zero-sized grid and
    /// [`NominoError::NoTilings`] for a size the catalog cannot tile.
    pub fn new(config: LevelConfig) -> Result<Self> {
        config.validate()?;
        let tilings = config
            .sizes
            .iter()
            .map(|&(rows, columns)| unique_tilings(rows, columns, &config.catalog))
            .collect::<Result<Vec<_>>>()?;
        Self::from_tilings(config, tilings)
    }

    /// Prepare assembly from tilings computed elsewhere, one list per size
    ///
    /// # Errors
    ///
    /// Returns [`NominoError::InvalidParameter`] for an unusable configuration
    /// or a tiling list count that does not match the sizes, and
    /// [`NominoError::NoTilings`] when a size has no tilings.
    pub fn from_tilings(config: LevelConfig, tilings: Vec<Vec<Vec<ShapeId>>>) -> Result<Self> {
        config.validate()?;
        if tilings.len() != config.sizes.len() {
            return Err(invalid_parameter(
                "tilings",
                &tilings.len(),
                &format!("expected one tiling list per size ({})", config.sizes.len()),
            ));
        }
        for (&(rows, columns), size_tilings) in config.sizes.iter().zip(&tilings) {
            if size_tilings.is_empty() {
                return Err(NominoError::NoTilings { rows, columns });
            }
        }

        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            tilings,
            rng,
        })
    }

    /// Assembly parameters
    pub const fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Unique tilings available for a size index
    pub fn tilings(&self, size_index: usize) -> Option<&[Vec<ShapeId>]> {
        self.tilings.get(size_index).map(Vec::as_slice)
    }

    /// Uniformly chosen tiling of the given size as a fresh block
    ///
    /// # Errors
    ///
    /// Returns [`NominoError::InvalidParameter`] for an unknown size index.
    pub fn building_block(&mut self, size_index: usize) -> Result<BuildingBlock> {
        self.tilings
            .get(size_index)
            .and_then(|tilings| tilings.choose(&mut self.rng))
            .map(|tiling| BuildingBlock::new(tiling))
            .ok_or_else(|| {
                invalid_parameter(
                    "size_index",
                    &size_index,
                    &format!("only {} sizes are configured", self.tilings.len()),
                )
            })
    }

    /// Uniformly chosen palette color
    pub fn random_color(&mut self) -> NominoColor {
        self.config
            .palette
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(NominoColor::Red)
    }

    /// Insert a piece near the front of the level
    ///
    /// An empty level takes the piece directly. A level shorter than the
    /// selection window gets it at a uniform existing position; otherwise a
    /// uniform position inside the window is used.
    pub fn level_insert(&mut self, level: &mut Vec<LevelPiece>, piece: LevelPiece) {
        let window = level.len().min(self.config.num_selectable);
        let index = if window == 0 {
            0
        } else {
            self.rng.random_range(0..window)
        };
        level.insert(index, piece);
    }

    /// Assemble one level from the configured block sizes
    ///
    /// # Errors
    ///
    /// Returns [`NominoError::InvalidParameter`] if a block size index is
    /// unknown.
    pub fn generate_level(&mut self) -> Result<Vec<LevelPiece>> {
        let block_sizes = self.config.block_sizes.clone();
        self.generate_level_from(&block_sizes)
    }

    /// Assemble one level starting with one block per entry of `size_indices`
    ///
    /// # Errors
    ///
    /// Returns [`NominoError::InvalidParameter`] if a size index is unknown.
    pub fn generate_level_from(&mut self, size_indices: &[usize]) -> Result<Vec<LevelPiece>> {
        let mut live = Vec::with_capacity(size_indices.len());
        let mut drawn = 0;
        for &size_index in size_indices {
            let block = self.building_block(size_index)?;
            drawn += block.len();
            let color = self.random_color();
            live.push(LiveBlock {
                block,
                size_index,
                color,
            });
        }

        let mut level = Vec::with_capacity(drawn.max(self.config.min_pieces));
        while !live.is_empty() {
            let index = self.rng.random_range(0..live.len());
            let Some(current) = live.get_mut(index) else {
                break;
            };

            if let Some(shape) = current.block.pop() {
                let piece = LevelPiece {
                    shape,
                    color: current.color,
                };
                self.level_insert(&mut level, piece);
            }

            if live.get(index).is_some_and(|entry| entry.block.is_empty()) {
                let exhausted = live.remove(index);
                if drawn < self.config.min_pieces {
                    let block = self.building_block(exhausted.size_index)?;
                    drawn += block.len();
                    debug!(
                        "refilled block of size {:?} ({drawn} pieces drawn)",
                        self.config.sizes.get(exhausted.size_index)
                    );
                    let color = self.random_color();
                    live.insert(
                        index,
                        LiveBlock {
                            block,
                            size_index: exhausted.size_index,
                            color,
                        },
                    );
                }
            }
        }

        level.reverse();
        Ok(level)
    }
}
