/// Lock-protected best-ever chromosome record
pub mod best;
/// Chromosomes, gene ranges and population sampling
pub mod chromosome;
/// Generational search engine and run configuration
pub mod engine;
/// Fitness functions composing the filter with the similarity metric
pub mod fitness;
/// Crossover, mutation and pairwise reproduction
pub mod operators;
/// Binary tournament selection
pub mod selection;
