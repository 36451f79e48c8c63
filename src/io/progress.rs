//! Generation progress bar

use crate::algorithm::engine::{GenerationProgress, RunReport};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Generations [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed generations with the current best in the message slot
pub struct GenerationProgressBar {
    bar: ProgressBar,
}

impl GenerationProgressBar {
    /// Visible bar over `generations` steps
    pub fn new(generations: usize) -> Self {
        let bar = ProgressBar::new(generations as u64);
        bar.set_style(GENERATION_STYLE.clone());
        Self { bar }
    }

    /// Bar that tracks state without drawing
    pub fn hidden(generations: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(generations as u64);
        Self { bar }
    }

    /// Record a finished generation
    pub fn update(&self, progress: &GenerationProgress) {
        self.bar.set_position(progress.generation as u64 + 1);
        self.bar.set_message(Self::describe(progress));
    }

    /// Close the bar with the final best
    pub fn finish(&self, report: &RunReport) {
        let message = report.best.map_or_else(
            || "no chromosome evaluated".to_string(),
            |best| format!("best {} ({:.6})", best.chromosome, best.fitness),
        );
        self.bar.finish_with_message(message);
    }

    /// Generations completed
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Current message text
    pub fn message(&self) -> String {
        self.bar.message()
    }

    fn describe(progress: &GenerationProgress) -> String {
        let population = progress.population_size;
        progress.best.map_or_else(
            || format!("population {population}"),
            |best| {
                format!(
                    "population {population} best {} ({:.6})",
                    best.chromosome, best.fitness
                )
            },
        )
    }
}
