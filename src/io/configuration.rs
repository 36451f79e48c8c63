//! Search constants and runtime configuration defaults

// Population and schedule defaults
/// Number of chromosomes sampled for generation zero
pub const DEFAULT_POPULATION: usize = 100;
/// Number of evaluate-select-reproduce rounds
pub const DEFAULT_GENERATIONS: usize = 20;
/// Per-gene probability of resampling a child gene
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;
/// Maximum number of fitness evaluations running at once
pub const DEFAULT_PARALLELISM: usize = 100;

/// Fixed seed for reproducible searches
pub const DEFAULT_SEED: u64 = 42;

// Gene ranges, inclusive minimum and exclusive maximum
/// Lower bound for the range-domain sigma
pub const DEFAULT_MIN_COLOR_SIGMA: u32 = 0;
/// Upper bound for the range-domain sigma
pub const DEFAULT_MAX_COLOR_SIGMA: u32 = 50;
/// Lower bound for the spatial-domain sigma
pub const DEFAULT_MIN_SPACE_SIGMA: u32 = 10;
/// Upper bound for the spatial-domain sigma
pub const DEFAULT_MAX_SPACE_SIGMA: u32 = 50;
/// Lower bound for the filter window side
pub const DEFAULT_MIN_DIAMETER: u32 = 5;
/// Upper bound for the filter window side
pub const DEFAULT_MAX_DIAMETER: u32 = 15;

// Colour sigma is compared against 8-bit channel distances
/// Largest accepted colour sigma bound
pub const MAX_COLOR_SIGMA_BOUND: u32 = 255;
/// Smallest accepted diameter
pub const MIN_DIAMETER_BOUND: u32 = 1;

// Similarity stabilisation constants, sized for a 16-bit dynamic range
/// Luminance stabiliser `(0.01 * 65535)^2`
pub const SSIM_C1: f64 = (0.01 * 65535.0) * (0.01 * 65535.0);
/// Contrast stabiliser `(0.03 * 65535)^2`
pub const SSIM_C2: f64 = (0.03 * 65535.0) * (0.03 * 65535.0);

/// BT.709 luma weights for red, green and blue
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

// Progress and logging
/// Width of the generation progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
