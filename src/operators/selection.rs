//! Tournament selection: sample a handful of candidates and keep the
//! cheapest one.

use crate::eval::Scored;
use crate::individual::Individual;
use rand::seq::index::sample;
use rand::Rng;

/// Samples `tournament_size` distinct individuals uniformly without
/// replacement and returns the lowest-cost one. Ties keep the
/// earliest-sampled candidate.
pub fn tournament<'a>(
    population: &'a [Individual],
    scores: &[Scored],
    tournament_size: usize,
    rng: &mut impl Rng,
) -> &'a Individual {
    let tournament_size = tournament_size.min(population.len());
    let picks = sample(rng, population.len(), tournament_size);

    let mut best_index = picks.index(0);
    let mut best_cost = scores[best_index].cost;

    for i in picks.iter().skip(1) {
        if scores[i].cost < best_cost {
            best_cost = scores[i].cost;
            best_index = i;
        }
    }

    &population[best_index]
}
