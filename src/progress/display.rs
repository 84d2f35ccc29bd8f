//! Progress bar display management and coordination.
//!
//! [`ProgressDisplay`] owns the batch-level bar (one tick per finished
//! file) and hands out per-file bars sized by the expected byte count. The
//! batch bar stays on screen once the run finishes; per-file bars are
//! cleared as soon as their file completes.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;

/// Batch bar: position within the run.
///
/// `███████████████████████████████████████ 11/12 (99%) eta 00:00:02`
const MAIN_TEMPLATE: &str = "{bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";
const MAIN_PROGRESS_CHARS: &str = "█▉▊▋▌▍▎▏  ";

/// Per-file bar: bytes and throughput, like the Python package installer pip.
///
/// `━━━━━━━━━━━━━━━━━━━━ 211.23 KiB/211.23 KiB 1008.31 KiB/s eta 0s`
const CHILD_TEMPLATE: &str =
    "{bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} eta {eta:.blue}";
const CHILD_PROGRESS_CHARS: &str = "━╾╴─";

/// Progress display manager that coordinates multiple progress bars.
pub struct ProgressDisplay {
    /// The multi-progress instance for coordinating multiple progress bars.
    multi: Arc<MultiProgress>,
    /// The main progress bar for overall progress.
    main: Arc<ProgressBar>,
    /// Which bars are shown.
    style: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display manager for a batch of
    /// `total_downloads` files.
    pub fn new(style: StyleOptions, total_downloads: usize) -> Self {
        let multi = match style.is_enabled() {
            true => Arc::new(MultiProgress::new()),
            false => Arc::new(MultiProgress::with_draw_target(ProgressDrawTarget::hidden())),
        };

        let main = if style.main {
            Arc::new(
                multi.add(
                    ProgressBar::new(total_downloads as u64)
                        .with_style(bar_style(MAIN_TEMPLATE, MAIN_PROGRESS_CHARS)),
                ),
            )
        } else {
            Arc::new(ProgressBar::hidden())
        };
        if style.main {
            main.tick();
        }

        Self { multi, main, style }
    }

    /// Create a per-file progress bar sized by the expected byte count.
    pub fn create_child_progress(&self, size: u64) -> ProgressBar {
        if !self.style.child {
            return ProgressBar::hidden();
        }
        self.multi
            .add(ProgressBar::new(size).with_style(bar_style(CHILD_TEMPLATE, CHILD_PROGRESS_CHARS)))
    }

    /// Increment the main progress bar by one finished file.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Clear a finished per-file progress bar.
    pub fn finish_child(&self, pb: ProgressBar) {
        pb.finish_and_clear();
    }

    /// Finish the batch bar, leaving it on screen.
    pub fn finish(self) {
        self.main.finish();
    }
}

fn bar_style(template: &str, progress_chars: &str) -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(template)
        .unwrap()
        .progress_chars(progress_chars)
}
