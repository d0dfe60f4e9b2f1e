//! Per-size search progress with automatic batching for long size lists

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display while grid sizes are enumerated
///
/// Shows one spinner per size for short lists and adds a single batch bar
/// when more sizes are requested than individual spinners are kept.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    size_bars: Vec<ProgressBar>,
    /// Stores (`label`, `tilings_found`, `done`) for rolling window display
    size_states: Vec<(String, usize, bool)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static SEARCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix:>7} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sizes: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            size_bars: Vec::new(),
            size_states: Vec::new(),
        }
    }

    /// Initialize progress displays for `size_count` grid sizes
    pub fn initialize(&mut self, size_count: usize) {
        if size_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(size_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = size_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SEARCH_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(100));
            self.size_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Begin tracking the search for one grid size
    pub fn start_size(&mut self, index: usize, rows: usize, columns: usize) {
        if index >= self.size_states.len() {
            self.size_states.resize(index + 1, (String::new(), 0, false));
        }
        if let Some(state) = self.size_states.get_mut(index) {
            *state = (format!("{rows}x{columns}"), 0, false);
        }
        self.update_bars();
    }

    /// Report how many tilings the search has produced so far
    pub fn update_found(&mut self, index: usize, found: usize) {
        if let Some(state) = self.size_states.get_mut(index) {
            state.1 = found;
        }
        self.update_bars();
    }

    /// Mark a size as finished with its unique tiling count
    pub fn complete_size(&mut self, index: usize, unique: usize, _elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.size_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = unique;
            state.2 = true;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All sizes enumerated");
        }
        for bar in &self.size_bars {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    /// Update the spinners to show the last N sizes
    fn update_bars(&self) {
        let active: Vec<&(String, usize, bool)> = self
            .size_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (label, found, done)) in visible.iter().enumerate() {
            if let Some(bar) = self.size_bars.get(bar_idx) {
                bar.set_prefix(label.clone());
                if *done {
                    bar.set_message(format!("{found} unique tilings"));
                } else {
                    bar.set_message(format!("{found} tilings found"));
                }
            }
        }

        for bar_idx in visible.len()..self.size_bars.len() {
            if let Some(bar) = self.size_bars.get(bar_idx) {
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
