//! Mutation: random resampling, cost-guided repair, and the adaptive mix
//! between them.

use crate::domain::Universe;
use crate::eval;
use crate::individual::Individual;
use rand::Rng;

const N_ALT: u32 = 3;

/// For each course independently, with probability `p_mut` replace its gene
/// with a fresh uniform sample.
pub fn random(individual: &mut Individual, universe: &Universe, p_mut: f64, rng: &mut impl Rng) {
    for course in 0..individual.len() {
        if rng.gen_bool(p_mut.clamp(0.0, 1.0)) {
            let gene = Individual::sample_gene(universe, course, rng);
            individual.set_gene(course, gene);
        }
    }
}

/// For each course independently, with probability `p_mut` samples `N_ALT`
/// alternative genes and adopts the best one if it strictly lowers the
/// individual's total cost at generation `g`; otherwise keeps the original.
pub fn repair(
    individual: &mut Individual,
    universe: &Universe,
    p_mut: f64,
    generation: u32,
    total_generations: u32,
    w0: f64,
    w_end: f64,
    rng: &mut impl Rng,
) {
    for course in 0..individual.len() {
        if !rng.gen_bool(p_mut.clamp(0.0, 1.0)) {
            continue;
        }

        let original = individual.gene(course);
        let current_cost =
            eval::evaluate(individual, universe, generation, total_generations, w0, w_end).cost;

        let mut best_gene = original;
        let mut best_cost = current_cost;

        for _ in 0..N_ALT {
            let candidate = Individual::sample_gene(universe, course, rng);
            individual.set_gene(course, candidate);
            let candidate_cost =
                eval::evaluate(individual, universe, generation, total_generations, w0, w_end)
                    .cost;
            if candidate_cost < best_cost {
                best_cost = candidate_cost;
                best_gene = candidate;
            }
        }

        individual.set_gene(course, best_gene);
    }
}

/// With probability `1 - progress` applies repair mutation, else random
/// mutation.
#[allow(clippy::too_many_arguments)]
pub fn adaptive(
    individual: &mut Individual,
    universe: &Universe,
    p_mut: f64,
    generation: u32,
    total_generations: u32,
    w0: f64,
    w_end: f64,
    progress: f64,
    rng: &mut impl Rng,
) {
    if rng.gen_bool((1.0 - progress).clamp(0.0, 1.0)) {
        repair(
            individual,
            universe,
            p_mut,
            generation,
            total_generations,
            w0,
            w_end,
            rng,
        );
    } else {
        random(individual, universe, p_mut, rng);
    }
}
