//! Command-line interface for tiling enumeration and level assembly

use crate::algorithm::board::Board;
use crate::algorithm::dedup::dedupe;
use crate::algorithm::search::{enumerate_tilings, enumerate_tilings_parallel};
use crate::assembly::level::{LevelConfig, LevelGenerator};
use crate::assembly::token::{NominoColor, render_level};
use crate::io::configuration::{
    DEFAULT_BLOCK_SIZES, DEFAULT_LEVEL_COUNT, DEFAULT_MIN_PIECES, DEFAULT_NUM_SELECTABLE,
    DEFAULT_PALETTE, DEFAULT_SEED, PROGRESS_REPORT_INTERVAL,
};
use crate::io::error::{NominoError, Result, WithPath};
use crate::io::image::export_tiling_as_png;
use crate::io::progress::ProgressManager;
use crate::spatial::shape::{Catalog, ShapeId, default_fill};
use clap::Parser;
use log::{info, warn};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

/// Grid dimensions written as `ROWSxCOLUMNS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl FromStr for GridSize {
    type Err = NominoError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| crate::io::error::invalid_parameter("size", &s, &reason);
        let (rows, columns) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| invalid("expected ROWSxCOLUMNS, e.g. 3x4"))?;
        let rows = rows
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid(&format!("rows: {e}")))?;
        let columns = columns
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid(&format!("columns: {e}")))?;
        if rows == 0 || columns == 0 {
            return Err(NominoError::InvalidDimensions { rows, columns });
        }
        Ok(Self { rows, columns })
    }
}

fn parse_grid_size(s: &str) -> std::result::Result<GridSize, String> {
    s.parse().map_err(|e: NominoError| e.to_string())
}

fn parse_color(s: &str) -> std::result::Result<NominoColor, String> {
    s.parse().map_err(|e: NominoError| e.to_string())
}

#[derive(Parser)]
#[command(name = "nominofill")]
#[command(
    author,
    version,
    about = "Enumerate polyomino tilings of small rectangles and assemble puzzle levels"
)]
/// Command-line arguments for the tiling and level tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Grid sizes to tile, as ROWSxCOLUMNS
    #[arg(value_name = "SIZE", value_parser = parse_grid_size, default_value = "3x4", num_args = 1..)]
    pub sizes: Vec<GridSize>,

    /// Random seed for reproducible levels
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = DEFAULT_LEVEL_COUNT)]
    pub levels: usize,

    /// Building blocks live at the start of each level, cycling through sizes
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZES.len())]
    pub blocks: usize,

    /// Pieces drawn before exhausted blocks stop being refilled
    #[arg(short, long, default_value_t = DEFAULT_MIN_PIECES)]
    pub min_pieces: usize,

    /// Leading level positions a new piece may be inserted at
    #[arg(short, long, default_value_t = DEFAULT_NUM_SELECTABLE)]
    pub num_selectable: usize,

    /// Colors blocks and rendered tilings are painted with, comma-separated
    #[arg(
        long,
        value_name = "COLORS",
        value_parser = parse_color,
        value_delimiter = ',',
        default_values_t = DEFAULT_PALETTE
    )]
    pub palette: Vec<NominoColor>,

    /// Include the 2-cell domino in the catalog
    #[arg(short, long)]
    pub domino: bool,

    /// Print unique tilings instead of generating levels
    #[arg(long)]
    pub list: bool,

    /// Export every unique tiling as PNG into this directory
    #[arg(short, long, value_name = "DIR")]
    pub render: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Abort a size after expanding this many boards
    #[arg(long, value_name = "N")]
    pub max_boards: Option<usize>,

    /// Explore search branches on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Catalog selected by the flags
    pub fn catalog(&self) -> Catalog {
        if self.domino {
            Catalog::with_domino(default_fill())
        } else {
            Catalog::standard(default_fill())
        }
    }

    /// Level assembly parameters selected by the flags
    pub fn level_config(&self) -> LevelConfig {
        let size_count = self.sizes.len().max(1);
        LevelConfig {
            sizes: self
                .sizes
                .iter()
                .map(|size| (size.rows, size.columns))
                .collect(),
            block_sizes: (0..self.blocks).map(|i| i % size_count).collect(),
            palette: self.palette.clone(),
            num_selectable: self.num_selectable,
            min_pieces: self.min_pieces,
            seed: self.seed,
            catalog: self.catalog(),
        }
    }
}

/// Orchestrates enumeration, rendering and level output with progress tracking
pub struct LevelRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LevelRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a size is invalid, the search budget runs out, a
    /// size used for levels has no tilings, or output cannot be written.
    pub fn run(&mut self) -> Result<()> {
        let catalog = self.cli.catalog();
        let unique = self.enumerate_sizes(&catalog)?;

        if let Some(dir) = self.cli.render.clone() {
            self.render_tilings(&unique, &dir)?;
        }

        let output = if self.cli.list {
            self.format_listing(&unique)
        } else {
            let tilings: Vec<Vec<Vec<ShapeId>>> = unique
                .iter()
                .map(|boards| boards.iter().map(Board::signature).collect())
                .collect();
            let mut generator = LevelGenerator::from_tilings(self.cli.level_config(), tilings)?;
            let mut levels = Vec::with_capacity(self.cli.levels);
            for _ in 0..self.cli.levels {
                levels.push(render_level(&generator.generate_level()?));
            }
            levels.join("\n\n")
        };

        self.write_output(&output)
    }

    /// Unique tilings for every requested size, in request order
    ///
    /// # Errors
    ///
    /// Returns an error if a size is invalid or the search budget runs out.
    pub fn enumerate_sizes(&mut self, catalog: &Catalog) -> Result<Vec<Vec<Board>>> {
        if self.cli.parallel && self.cli.max_boards.is_some() {
            warn!("--max-boards bounds the sequential search only; ignoring --parallel");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.sizes.len());
        }

        let sizes = self.cli.sizes.clone();
        let mut unique = Vec::with_capacity(sizes.len());
        for (index, size) in sizes.iter().enumerate() {
            let start_time = Instant::now();
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_size(index, size.rows, size.columns);
            }

            let tilings = if self.cli.parallel && self.cli.max_boards.is_none() {
                enumerate_tilings_parallel(size.rows, size.columns, catalog)?
            } else {
                self.enumerate_sequential(index, *size, catalog)?
            };
            let total = tilings.len();
            let deduped = dedupe(tilings);
            info!(
                "{size}: {total} tilings, {} unique in {:?}",
                deduped.len(),
                start_time.elapsed()
            );

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_size(index, deduped.len(), start_time.elapsed());
            }
            unique.push(deduped);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(unique)
    }

    fn enumerate_sequential(
        &mut self,
        index: usize,
        size: GridSize,
        catalog: &Catalog,
    ) -> Result<Vec<Board>> {
        let mut tilings = enumerate_tilings(size.rows, size.columns, catalog)?;
        if let Some(limit) = self.cli.max_boards {
            tilings = tilings.with_budget(limit);
        }

        let mut found = Vec::new();
        for board in tilings.by_ref() {
            found.push(board);
            if found.len() % PROGRESS_REPORT_INTERVAL == 0 {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.update_found(index, found.len());
                }
            }
        }

        if tilings.budget_exhausted() {
            return Err(NominoError::SearchBudgetExceeded {
                limit: self.cli.max_boards.unwrap_or_default(),
            });
        }
        Ok(found)
    }

    fn render_tilings(&self, unique: &[Vec<Board>], dir: &Path) -> Result<()> {
        for (size, boards) in self.cli.sizes.iter().zip(unique) {
            for (index, board) in boards.iter().enumerate() {
                let path = dir.join(format!("{size}_{index:03}.png"));
                export_tiling_as_png(board, &self.cli.palette, &path)?;
            }
            info!("{size}: rendered {} tilings into {}", boards.len(), dir.display());
        }
        Ok(())
    }

    fn format_listing(&self, unique: &[Vec<Board>]) -> String {
        let mut sections = Vec::with_capacity(unique.len());
        for (size, boards) in self.cli.sizes.iter().zip(unique) {
            let mut lines = vec![format!("# {size}: {} unique tilings", boards.len())];
            for board in boards {
                let names: Vec<&str> = board.signature().into_iter().map(ShapeId::name).collect();
                lines.push(names.join(", "));
            }
            sections.push(lines.join("\n"));
        }
        sections.join("\n\n")
    }

    fn write_output(&self, output: &str) -> Result<()> {
        match &self.cli.output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
                }
                std::fs::write(path, format!("{output}\n")).with_path(path, "write output")
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{output}").with_path(Path::new("<stdout>"), "write output")
            }
        }
    }
}
