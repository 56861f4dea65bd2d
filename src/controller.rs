//! The adaptive parameter controller: time-varying mutation rate,
//! continuity weight, elite fraction, plus diversity-triggered boosts.

use crate::config::SchedulerConfig;
use crate::eval::progress;

const MUTATION_RATE_MIN: f64 = 0.1;
const DIVERSITY_BOOST_MIN: f64 = 1.0;
const DIVERSITY_BOOST_MAX: f64 = 8.0;

/// The operator parameters derived for one generation.
#[derive(Debug, Clone, Copy)]
pub struct DerivedParams {
    pub mutation_rate: f64,
    pub elite_count: usize,
    pub continuity_weight_w0: f64,
    pub continuity_weight_end: f64,
    pub crossover_progress: f64,
    pub mutation_progress: f64,
}

/// Derives this generation's operator parameters from the config, the
/// generation index, and the population diversity just measured.
pub fn derive(
    config: &SchedulerConfig,
    generation: u32,
    diversity: f64,
    population_size: usize,
) -> DerivedParams {
    let p = progress(generation, config.generations);

    let mut mutation_rate =
        config.mutation_rate - (config.mutation_rate - MUTATION_RATE_MIN) * p;
    if diversity < config.diversity_threshold {
        let boost = DIVERSITY_BOOST_MIN + (DIVERSITY_BOOST_MAX - DIVERSITY_BOOST_MIN) * p;
        mutation_rate *= boost;
    }
    let mutation_rate = mutation_rate.clamp(0.0, 1.0);

    let mut elite_fraction = config.elite_fraction_min
        + (config.elite_fraction_max - config.elite_fraction_min) * p;
    if diversity < config.diversity_threshold && config.diversity_threshold > 0.0 {
        let contraction = diversity / config.diversity_threshold;
        elite_fraction = config.elite_fraction_min + (elite_fraction - config.elite_fraction_min) * contraction;
    }
    let elite_count = ((population_size as f64 * elite_fraction).floor() as usize).max(1);
    let elite_count = elite_count.min(population_size);

    DerivedParams {
        mutation_rate,
        elite_count,
        continuity_weight_w0: config.continuity_penalty,
        continuity_weight_end: config.continuity_penalty_final,
        crossover_progress: p,
        mutation_progress: p,
    }
}
