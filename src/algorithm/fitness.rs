//! Fitness scoring: filter the input, compare with the reference

use crate::algorithm::chromosome::Chromosome;
use crate::imaging::filter::bilateral_filter;
use crate::imaging::raster::{ImageSampler, Raster};
use crate::imaging::similarity::{dissimilarity, fitness_from_dissimilarity};
use crate::io::error::{Result, ensure_same_dimensions};

/// Scores a chromosome; higher is better
///
/// Implementations are shared across evaluation workers and must be pure.
pub trait FitnessFunction: Sync {
    /// Fitness of `chromosome`, positive and close to one for a near match
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation cannot produce a score
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64>;
}

/// Bilateral filter followed by global similarity against a fixed reference
#[derive(Debug, Clone, Copy)]
pub struct BilateralFitness<'a> {
    input: &'a Raster,
    reference: &'a Raster,
}

impl<'a> BilateralFitness<'a> {
    /// Pair a source raster with the reference it should be filtered towards
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch error if the rasters differ in size
    pub fn new(input: &'a Raster, reference: &'a Raster) -> Result<Self> {
        ensure_same_dimensions(input.dimensions(), reference.dimensions())?;
        Ok(Self { input, reference })
    }

    /// Source raster being filtered
    pub const fn input(&self) -> &'a Raster {
        self.input
    }

    /// Target raster
    pub const fn reference(&self) -> &'a Raster {
        self.reference
    }

    /// Input filtered with the parameters of `chromosome`
    pub fn filtered(&self, chromosome: &Chromosome) -> Raster {
        bilateral_filter(self.input, chromosome.filter_params())
    }
}

impl FitnessFunction for BilateralFitness<'_> {
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64> {
        let filtered = self.filtered(chromosome);
        let score = fitness_from_dissimilarity(dissimilarity(self.reference, &filtered)?);
        log::trace!("{chromosome} -> {score:.6}");
        Ok(score)
    }
}
