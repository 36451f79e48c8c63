//! Genetic search for bilateral filter parameters that best reproduce a reference image
//!
//! A population of `(colour sigma, spatial sigma, diameter)` triples is scored
//! by filtering the source image and measuring a global structural similarity
//! against the reference, then bred by tournament selection, uniform crossover
//! and mutation until the generation budget is spent.

#![forbid(unsafe_code)]

/// Genetic engine, chromosomes, operators and fitness
pub mod algorithm;
/// Rasters, the bilateral filter and the similarity metric
pub mod imaging;
/// Command-line glue, configuration, errors, logging and image I/O
pub mod io;

pub use io::error::{Result, SearchError};
