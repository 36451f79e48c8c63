//! Uniform crossover, per-gene mutation and pairwise reproduction

use rand::Rng;

use crate::algorithm::chromosome::{Chromosome, Gene, SearchBounds};

/// Uniform crossover of two parents into two complementary children
///
/// Each gene is swapped between the children with probability one half;
/// the first child otherwise inherits from `first`, the second from `second`.
pub fn crossover<R: Rng>(
    first: Chromosome,
    second: Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    Gene::ALL
        .iter()
        .fold((first, second), |(child_a, child_b), &gene| {
            if rng.random::<f64>() < 0.5 {
                (
                    child_a.with_gene(gene, second.gene(gene)),
                    child_b.with_gene(gene, first.gene(gene)),
                )
            } else {
                (child_a, child_b)
            }
        })
}

/// Resample each gene uniformly within its range with probability `rate`
pub fn mutate<R: Rng>(
    chromosome: Chromosome,
    bounds: &SearchBounds,
    rate: f64,
    rng: &mut R,
) -> Chromosome {
    Gene::ALL.iter().fold(chromosome, |current, &gene| {
        if rng.random::<f64>() < rate {
            current.with_gene(gene, bounds.range(gene).sample(rng))
        } else {
            current
        }
    })
}

/// Breed consecutive pairs of `selected` into the next population
///
/// Pairs are `(0, 1), (2, 3), ...`; an unpaired trailing parent is dropped.
pub fn reproduce<R: Rng>(
    selected: &[Chromosome],
    bounds: &SearchBounds,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Chromosome> {
    let mut children = Vec::with_capacity(selected.len() - selected.len() % 2);
    for pair in selected.chunks_exact(2) {
        let &[first, second] = pair else {
            continue;
        };
        let (child_a, child_b) = crossover(first, second, rng);
        children.push(mutate(child_a, bounds, mutation_rate, rng));
        children.push(mutate(child_b, bounds, mutation_rate, rng));
    }
    children
}
