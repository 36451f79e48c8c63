//! Command-line interface for calibrating a bilateral filter against a reference image

use crate::algorithm::chromosome::SearchBounds;
use crate::algorithm::engine::{EngineConfig, GeneticEngine, RunReport};
use crate::algorithm::fitness::BilateralFitness;
use crate::imaging::raster::ImageSampler;
use crate::io::configuration::{
    DEFAULT_GENERATIONS, DEFAULT_MAX_COLOR_SIGMA, DEFAULT_MAX_DIAMETER, DEFAULT_MAX_SPACE_SIGMA,
    DEFAULT_MIN_COLOR_SIGMA, DEFAULT_MIN_DIAMETER, DEFAULT_MIN_SPACE_SIGMA,
    DEFAULT_MUTATION_RATE, DEFAULT_PARALLELISM, DEFAULT_POPULATION, DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::image::{export_raster, load_raster};
use crate::io::progress::GenerationProgressBar;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "bilateral-search")]
#[command(
    author,
    version,
    about = "Search bilateral filter parameters that turn an input image into a reference image"
)]
/// Command-line arguments for a calibration run
pub struct Cli {
    /// Image to be filtered (TIFF or any standard raster format)
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Image the filtered input should match
    #[arg(short, long, visible_alias = "output", value_name = "PATH")]
    pub reference: PathBuf,

    /// Chromosomes in the initial population
    #[arg(short, long, default_value_t = DEFAULT_POPULATION)]
    pub population: usize,

    /// Number of generations to run
    #[arg(short, long, visible_alias = "generation", default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Maximum number of concurrent fitness evaluations
    #[arg(long, default_value_t = DEFAULT_PARALLELISM)]
    pub parallel: usize,

    /// Per-gene mutation probability in [0, 1]
    #[arg(short, long, default_value_t = DEFAULT_MUTATION_RATE)]
    pub mutation: f64,

    /// Inclusive minimum of the colour sigma range
    #[arg(long, default_value_t = DEFAULT_MIN_COLOR_SIGMA)]
    pub min_color: u32,

    /// Exclusive maximum of the colour sigma range
    #[arg(long, default_value_t = DEFAULT_MAX_COLOR_SIGMA)]
    pub max_color: u32,

    /// Inclusive minimum of the spatial sigma range
    #[arg(long, default_value_t = DEFAULT_MIN_SPACE_SIGMA)]
    pub min_sigma: u32,

    /// Exclusive maximum of the spatial sigma range
    #[arg(long, default_value_t = DEFAULT_MAX_SPACE_SIGMA)]
    pub max_sigma: u32,

    /// Inclusive minimum of the window diameter range
    #[arg(long, default_value_t = DEFAULT_MIN_DIAMETER)]
    pub min_diameter: u32,

    /// Exclusive maximum of the window diameter range
    #[arg(long, default_value_t = DEFAULT_MAX_DIAMETER)]
    pub max_diameter: u32,

    /// Random seed for reproducible searches
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Also append log records to this file
    #[arg(short, long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Write the input filtered with the best parameters to this path
    #[arg(long, value_name = "PATH")]
    pub save_filtered: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the progress bar should be drawn
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Gene ranges from the min/max flags
    ///
    /// # Errors
    ///
    /// Returns an error if any range is empty or outside the filter's domain
    pub fn bounds(&self) -> Result<SearchBounds> {
        SearchBounds::from_pairs(
            (self.min_color, self.max_color),
            (self.min_sigma, self.max_sigma),
            (self.min_diameter, self.max_diameter),
        )
    }

    /// Validated engine configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds or schedule values are invalid
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let config = EngineConfig {
            population_size: self.population,
            generations: self.generations,
            mutation_rate: self.mutation,
            parallelism: self.parallel,
            bounds: self.bounds()?,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Runs one calibration from parsed arguments
pub struct SearchRunner {
    cli: Cli,
}

impl SearchRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Validate, load both images, search, and report the best chromosome
    ///
    /// Configuration is checked before any image is read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - Either image cannot be loaded, or their sizes differ
    /// - The filtered result cannot be exported
    pub fn run(&self) -> Result<RunReport> {
        let start_time = Instant::now();
        let config = self.cli.engine_config()?;

        let input = load_raster(&self.cli.input)?;
        let reference = load_raster(&self.cli.reference)?;
        log::info!(
            "input {} ({}x{}), reference {}",
            self.cli.input.display(),
            input.width(),
            input.height(),
            self.cli.reference.display()
        );

        let fitness = BilateralFitness::new(&input, &reference)?;
        let mut engine = GeneticEngine::new(config, fitness)?;

        let progress = if self.cli.should_show_progress() {
            GenerationProgressBar::new(config.generations)
        } else {
            GenerationProgressBar::hidden(config.generations)
        };
        let report = engine.run_with_callback(|generation| progress.update(generation))?;
        progress.finish(&report);

        match report.best {
            Some(best) => {
                log::info!(
                    "best chromosome: {} (fitness {:.6}) after {:.1?}",
                    best.chromosome,
                    best.fitness,
                    start_time.elapsed()
                );
                if let Some(path) = &self.cli.save_filtered {
                    export_raster(&engine.fitness().filtered(&best.chromosome), path)?;
                    log::info!("filtered image written to {}", path.display());
                }
            }
            None => log::warn!("no chromosome was evaluated"),
        }

        Ok(report)
    }
}
