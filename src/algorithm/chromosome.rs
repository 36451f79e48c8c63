//! Candidate filter parameters and the ranges they are drawn from

use std::fmt;

use rand::Rng;

use crate::imaging::filter::BilateralParams;
use crate::io::configuration::{MAX_COLOR_SIGMA_BOUND, MIN_DIAMETER_BOUND};
use crate::io::error::{Result, invalid_parameter};

/// One gene position within a chromosome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gene {
    /// Range-domain smoothing strength
    ColorSigma,
    /// Spatial-domain smoothing strength
    SpaceSigma,
    /// Neighbourhood window side
    Diameter,
}

impl Gene {
    /// Every gene in chromosome order
    pub const ALL: [Self; 3] = [Self::ColorSigma, Self::SpaceSigma, Self::Diameter];

    /// Parameter name used in configuration errors
    pub const fn name(self) -> &'static str {
        match self {
            Self::ColorSigma => "color_sigma",
            Self::SpaceSigma => "space_sigma",
            Self::Diameter => "diameter",
        }
    }
}

/// Parameter triple for one bilateral filter candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chromosome {
    /// Range-domain sigma
    pub color_sigma: u32,
    /// Spatial-domain sigma
    pub space_sigma: u32,
    /// Window side in pixels
    pub diameter: u32,
}

impl Chromosome {
    /// Create a chromosome from its three genes
    pub const fn new(color_sigma: u32, space_sigma: u32, diameter: u32) -> Self {
        Self {
            color_sigma,
            space_sigma,
            diameter,
        }
    }

    /// Value of a single gene
    pub const fn gene(&self, gene: Gene) -> u32 {
        match gene {
            Gene::ColorSigma => self.color_sigma,
            Gene::SpaceSigma => self.space_sigma,
            Gene::Diameter => self.diameter,
        }
    }

    /// Copy with one gene replaced
    #[must_use]
    pub const fn with_gene(self, gene: Gene, value: u32) -> Self {
        let mut next = self;
        match gene {
            Gene::ColorSigma => next.color_sigma = value,
            Gene::SpaceSigma => next.space_sigma = value,
            Gene::Diameter => next.diameter = value,
        }
        next
    }

    /// Filter parameters this chromosome encodes
    pub fn filter_params(&self) -> BilateralParams {
        BilateralParams {
            diameter: self.diameter,
            color_sigma: f64::from(self.color_sigma),
            space_sigma: f64::from(self.space_sigma),
        }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(c: {}, s: {}, d: {})",
            self.color_sigma, self.space_sigma, self.diameter
        )
    }
}

/// Inclusive-exclusive integer range `[min, max)` for one gene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneRange {
    min: u32,
    max: u32,
}

impl GeneRange {
    /// Create a range, rejecting empty or inverted bounds
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `min >= max`
    pub fn new(parameter: &'static str, min: u32, max: u32) -> Result<Self> {
        if min >= max {
            return Err(invalid_parameter(
                parameter,
                &format!("[{min}, {max})"),
                &"minimum must be strictly less than maximum",
            ));
        }
        Ok(Self { min, max })
    }

    /// Inclusive lower bound
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Exclusive upper bound
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Whether `value` lies in `[min, max)`
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value < self.max
    }

    /// Draw a value uniformly from the range
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min..self.max)
    }
}

/// Per-gene ranges for the whole search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    color_sigma: GeneRange,
    space_sigma: GeneRange,
    diameter: GeneRange,
}

impl SearchBounds {
    /// Combine per-gene ranges, enforcing the filter's domain limits
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the colour sigma range exceeds
    /// 8-bit distances or the diameter range admits a zero-sized window
    pub fn new(color_sigma: GeneRange, space_sigma: GeneRange, diameter: GeneRange) -> Result<Self> {
        if color_sigma.max() > MAX_COLOR_SIGMA_BOUND {
            return Err(invalid_parameter(
                Gene::ColorSigma.name(),
                &color_sigma.max(),
                &format!("must not exceed {MAX_COLOR_SIGMA_BOUND}"),
            ));
        }
        if diameter.min() < MIN_DIAMETER_BOUND {
            return Err(invalid_parameter(
                Gene::Diameter.name(),
                &diameter.min(),
                &format!("must be at least {MIN_DIAMETER_BOUND}"),
            ));
        }

        Ok(Self {
            color_sigma,
            space_sigma,
            diameter,
        })
    }

    /// Build bounds from raw `(min, max)` pairs
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for the first range that fails validation
    pub fn from_pairs(
        color_sigma: (u32, u32),
        space_sigma: (u32, u32),
        diameter: (u32, u32),
    ) -> Result<Self> {
        Self::new(
            GeneRange::new(Gene::ColorSigma.name(), color_sigma.0, color_sigma.1)?,
            GeneRange::new(Gene::SpaceSigma.name(), space_sigma.0, space_sigma.1)?,
            GeneRange::new(Gene::Diameter.name(), diameter.0, diameter.1)?,
        )
    }

    /// Range configured for a gene
    pub const fn range(&self, gene: Gene) -> &GeneRange {
        match gene {
            Gene::ColorSigma => &self.color_sigma,
            Gene::SpaceSigma => &self.space_sigma,
            Gene::Diameter => &self.diameter,
        }
    }

    /// Whether every gene of `chromosome` lies in its range
    pub fn contains(&self, chromosome: &Chromosome) -> bool {
        Gene::ALL
            .iter()
            .all(|&gene| self.range(gene).contains(chromosome.gene(gene)))
    }

    /// Draw a chromosome with each gene uniform in its range
    pub fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome {
            color_sigma: self.color_sigma.sample(rng),
            space_sigma: self.space_sigma.sample(rng),
            diameter: self.diameter.sample(rng),
        }
    }

    /// Draw `size` independent chromosomes for generation zero
    pub fn random_population<R: Rng>(&self, size: usize, rng: &mut R) -> Vec<Chromosome> {
        (0..size).map(|_| self.random_chromosome(rng)).collect()
    }
}
