//! Batch progress display for multi-file runs

use crate::io::configuration::MIN_FILES_FOR_PROGRESS;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many images of a batch have been processed
///
/// Single-image runs draw nothing; larger batches get one bar on stderr.
pub struct ProgressManager {
    bar: ProgressBar,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager that has not been sized yet
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            file_count: 0,
        }
    }

    /// Size the bar for a batch of `file_count` images
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        if file_count >= MIN_FILES_FOR_PROGRESS {
            let bar = ProgressBar::with_draw_target(
                Some(file_count as u64),
                ProgressDrawTarget::stderr(),
            );
            bar.set_style(BATCH_STYLE.clone());
            self.bar = bar;
        }
    }

    /// Number of images in the current batch
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Whether a visible bar is being drawn
    pub fn is_visible(&self) -> bool {
        !self.bar.is_hidden()
    }

    /// Show which image is being processed
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count one image as done
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Number of images completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Run `f` with the bar temporarily cleared so output doesn't interleave
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Whether the bar has been finished and cleared
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}
