//! Lock-protected record of the fittest chromosome seen during a run

use std::sync::{Mutex, PoisonError};

use crate::algorithm::chromosome::Chromosome;

/// A chromosome paired with the fitness it scored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    /// Fitness of `chromosome`
    pub fitness: f64,
    /// The evaluated parameters
    pub chromosome: Chromosome,
}

/// Best-ever tracker shared by concurrent evaluations
///
/// The comparison and the replacement happen under one lock, so a strictly
/// better score is never overwritten by a worse one that finishes later.
#[derive(Debug, Default)]
pub struct BestRecord {
    inner: Mutex<Option<Scored>>,
}

impl BestRecord {
    /// Empty record
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Replace the record iff `fitness` is strictly greater; returns whether it did
    pub fn offer(&self, fitness: f64, chromosome: Chromosome) -> bool {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let improved = guard.is_none_or(|current| fitness > current.fitness);
        if improved {
            *guard = Some(Scored {
                fitness,
                chromosome,
            });
        }
        improved
    }

    /// Current best, if anything has been evaluated
    pub fn get(&self) -> Option<Scored> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fitness of the current best, or zero when empty
    pub fn fitness(&self) -> f64 {
        self.get().map_or(0.0, |scored| scored.fitness)
    }
}
