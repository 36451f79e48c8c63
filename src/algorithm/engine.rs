//! Generational genetic search over bilateral filter parameters
//!
//! Each generation scores the whole population on a fixed-width worker pool,
//! waits for every score, then runs tournament selection, pairwise uniform
//! crossover and mutation on the calling thread. The population is replaced
//! outright; only the best-ever record survives between generations.

use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::algorithm::best::{BestRecord, Scored};
use crate::algorithm::chromosome::{Chromosome, SearchBounds};
use crate::algorithm::fitness::FitnessFunction;
use crate::algorithm::operators::reproduce;
use crate::algorithm::selection::tournament_select;
use crate::io::configuration::{
    DEFAULT_GENERATIONS, DEFAULT_MUTATION_RATE, DEFAULT_PARALLELISM, DEFAULT_POPULATION,
    DEFAULT_SEED,
};
use crate::io::error::{Result, invalid_parameter};

/// Search parameters for one run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Chromosomes sampled for generation zero
    pub population_size: usize,
    /// Number of generations to run
    pub generations: usize,
    /// Per-gene mutation probability in `[0, 1]`
    pub mutation_rate: f64,
    /// Maximum number of concurrent fitness evaluations
    pub parallelism: usize,
    /// Gene ranges
    pub bounds: SearchBounds,
    /// Seed for the default random source
    pub seed: u64,
}

impl EngineConfig {
    /// Configuration with default schedule values for the given bounds
    pub const fn new(bounds: SearchBounds) -> Self {
        Self {
            population_size: DEFAULT_POPULATION,
            generations: DEFAULT_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            parallelism: DEFAULT_PARALLELISM,
            bounds,
            seed: DEFAULT_SEED,
        }
    }

    /// Check the schedule values; gene ranges are validated on construction
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the population size or
    /// parallelism is zero, or the mutation rate lies outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid_parameter(
                "population_size",
                &self.population_size,
                &"must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid_parameter(
                "mutation_rate",
                &self.mutation_rate,
                &"must be in [0, 1]",
            ));
        }
        if self.parallelism == 0 {
            return Err(invalid_parameter(
                "parallelism",
                &self.parallelism,
                &"must be positive",
            ));
        }
        Ok(())
    }
}

/// State reported after each generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationProgress {
    /// Zero-based index of the generation just completed
    pub generation: usize,
    /// Total generations configured
    pub generations: usize,
    /// Chromosomes evaluated in this generation
    pub evaluated: usize,
    /// Size of the population bred for the next generation
    pub population_size: usize,
    /// Best-ever record after this generation
    pub best: Option<Scored>,
}

/// Outcome of a complete run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    /// Best chromosome seen across all generations
    pub best: Option<Scored>,
    /// Generations completed
    pub generations: usize,
    /// Population size after the last replacement
    pub final_population: usize,
}

/// Genetic search engine with an injected random source
pub struct GeneticEngine<F, R = StdRng> {
    config: EngineConfig,
    fitness: F,
    rng: R,
    pool: ThreadPool,
    best: BestRecord,
    population: Vec<Chromosome>,
    generation: usize,
}

impl<F: FitnessFunction> GeneticEngine<F, StdRng> {
    /// Create an engine seeded from `config.seed`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the worker pool
    /// cannot be built
    pub fn new(config: EngineConfig, fitness: F) -> Result<Self> {
        Self::with_rng(config, fitness, StdRng::seed_from_u64(config.seed))
    }
}

impl<F: FitnessFunction, R: Rng + Send> GeneticEngine<F, R> {
    /// Create an engine drawing all randomness from `rng`
    ///
    /// Generation zero is sampled immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the worker pool
    /// cannot be built
    pub fn with_rng(config: EngineConfig, fitness: F, mut rng: R) -> Result<Self> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.parallelism)
            .thread_name(|index| format!("evaluator-{index}"))
            .build()?;
        let population = config
            .bounds
            .random_population(config.population_size, &mut rng);

        Ok(Self {
            config,
            fitness,
            rng,
            pool,
            best: BestRecord::new(),
            population,
            generation: 0,
        })
    }

    /// Replace the current population with explicit chromosomes
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if any gene is outside its range
    pub fn seed_population(&mut self, population: Vec<Chromosome>) -> Result<()> {
        if let Some(outlier) = population
            .iter()
            .find(|chromosome| !self.config.bounds.contains(chromosome))
        {
            return Err(invalid_parameter(
                "population",
                outlier,
                &"gene outside the configured bounds",
            ));
        }
        self.population = population;
        Ok(())
    }

    /// Run configuration
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fitness function being optimised
    pub const fn fitness(&self) -> &F {
        &self.fitness
    }

    /// Current population
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Generations completed so far
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Best-ever record
    pub fn best(&self) -> Option<Scored> {
        self.best.get()
    }

    /// Score every chromosome on the worker pool, returning once all have finished
    ///
    /// Scores are offered to the best record in population order, so equal
    /// fitness resolves to the same chromosome whatever the worker timing.
    ///
    /// # Errors
    ///
    /// Propagates a failed fitness evaluation
    pub fn evaluate_population(&self) -> Result<()> {
        let fitness = &self.fitness;
        let population = &self.population;

        let scores = self.pool.install(|| {
            population
                .par_iter()
                .map(|chromosome| fitness.evaluate(chromosome))
                .collect::<Result<Vec<f64>>>()
        })?;

        for (chromosome, score) in population.iter().zip(scores) {
            if self.best.offer(score, *chromosome) {
                log::debug!("new best {chromosome} with fitness {score:.6}");
            }
        }
        Ok(())
    }

    /// Run one evaluate-select-reproduce round
    ///
    /// # Errors
    ///
    /// Propagates a failed fitness evaluation
    pub fn step(&mut self) -> Result<GenerationProgress> {
        let evaluated = self.population.len();
        self.evaluate_population()?;

        let fitness = &self.fitness;
        let best = &self.best;
        let population = &self.population;
        let rng = &mut self.rng;
        let selected = self
            .pool
            .install(|| tournament_select(population, fitness, best, rng))?;

        let children = reproduce(
            &selected,
            &self.config.bounds,
            self.config.mutation_rate,
            &mut self.rng,
        );
        self.population = children;

        let progress = GenerationProgress {
            generation: self.generation,
            generations: self.config.generations,
            evaluated,
            population_size: self.population.len(),
            best: self.best.get(),
        };
        self.generation += 1;

        match progress.best {
            Some(scored) => log::info!(
                "generation {}/{} population: {} best: {} ({:.6})",
                progress.generation,
                progress.generations,
                progress.population_size,
                scored.chromosome,
                scored.fitness
            ),
            None => log::info!(
                "generation {}/{} population: {} best: none",
                progress.generation,
                progress.generations,
                progress.population_size
            ),
        }
        if self.population.len() < 2 {
            log::warn!(
                "population collapsed to {} chromosome(s); remaining generations cannot breed",
                self.population.len()
            );
        }

        Ok(progress)
    }

    /// Run all remaining generations
    ///
    /// # Errors
    ///
    /// Propagates a failed fitness evaluation
    pub fn run(&mut self) -> Result<RunReport> {
        self.run_with_callback(|_| {})
    }

    /// Run all remaining generations, reporting after each one
    ///
    /// # Errors
    ///
    /// Propagates a failed fitness evaluation
    pub fn run_with_callback<C>(&mut self, mut callback: C) -> Result<RunReport>
    where
        C: FnMut(&GenerationProgress),
    {
        while self.generation < self.config.generations {
            let progress = self.step()?;
            callback(&progress);
        }
        Ok(self.report())
    }

    /// Summary of the run so far
    pub fn report(&self) -> RunReport {
        RunReport {
            best: self.best.get(),
            generations: self.generation,
            final_population: self.population.len(),
        }
    }
}
