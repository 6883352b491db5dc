//! Stage-by-stage progress display for the infill pipeline

use crate::io::configuration::{PIPELINE_STAGES, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advanced once per pipeline stage
///
/// A hidden instance still counts stages but never draws.
pub struct StageProgress {
    bar: ProgressBar,
}

impl Default for StageProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl StageProgress {
    /// Create a visible progress bar on stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(PIPELINE_STAGES);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that never draws
    pub fn hidden() -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(PIPELINE_STAGES);
        Self { bar }
    }

    /// Visible unless `quiet` is set
    pub fn for_quiet(quiet: bool) -> Self {
        if quiet { Self::hidden() } else { Self::new() }
    }

    /// Announce and count the next stage
    pub fn stage(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.bar.inc(1);
    }

    /// Number of stages started so far
    pub fn stages_started(&self) -> u64 {
        self.bar.position()
    }

    /// Hide the bar while `f` writes to the terminal
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
