//! Binary tournament selection with re-evaluated contenders

use rand::Rng;

use crate::algorithm::best::BestRecord;
use crate::algorithm::chromosome::Chromosome;
use crate::algorithm::fitness::FitnessFunction;
use crate::io::error::Result;

/// Pick `population.len() / 2` parents by size-two tournaments
///
/// Both contenders are drawn uniformly with replacement and scored afresh.
/// The second contender wins only with a strictly greater fitness. Every
/// score is offered to `best`.
///
/// # Errors
///
/// Propagates the first failed fitness evaluation
pub fn tournament_select<F, R>(
    population: &[Chromosome],
    fitness: &F,
    best: &BestRecord,
    rng: &mut R,
) -> Result<Vec<Chromosome>>
where
    F: FitnessFunction + ?Sized,
    R: Rng,
{
    let draws = population.len() / 2;
    let mut selected = Vec::with_capacity(draws);

    for _ in 0..draws {
        let first = draw(population, rng);
        let second = draw(population, rng);
        let (Some(first), Some(second)) = (first, second) else {
            continue;
        };

        let first_score = fitness.evaluate(&first)?;
        let second_score = fitness.evaluate(&second)?;
        best.offer(first_score, first);
        best.offer(second_score, second);

        let winner = if second_score > first_score {
            second
        } else {
            first
        };
        log::trace!("tournament {first} ({first_score:.6}) vs {second} ({second_score:.6})");
        selected.push(winner);
    }

    Ok(selected)
}

fn draw<R: Rng>(population: &[Chromosome], rng: &mut R) -> Option<Chromosome> {
    if population.is_empty() {
        return None;
    }
    population.get(rng.random_range(0..population.len())).copied()
}
