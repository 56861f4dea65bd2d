//! Reinsertion: replace the worst non-elite individuals with fresh ones to
//! fight stagnation.

use crate::domain::Universe;
use crate::eval::Scored;
use crate::individual::Individual;
use rand::Rng;

/// Whether reinsertion fires this generation, and why (used only for
/// telemetry/logging; the replacement logic is identical either way).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    None,
    Diversity,
    Periodic,
}

pub fn trigger(generation: u32, diversity: f64, diversity_threshold: f64, interval: u32) -> Trigger {
    if diversity < diversity_threshold {
        Trigger::Diversity
    } else if generation > 0 && generation % interval == 0 {
        Trigger::Periodic
    } else {
        Trigger::None
    }
}

/// Replaces the `floor(N * fraction)` worst individuals of `pool` (assumed
/// sorted ascending by cost) with freshly sampled ones, then re-sorts by
/// cost. Operates on the non-elite child pool only; elites are never passed
/// in.
#[allow(clippy::too_many_arguments)]
pub fn reinsert(
    pool: &mut Vec<Individual>,
    scores: &mut Vec<Scored>,
    universe: &Universe,
    population_size: usize,
    fraction: f64,
    generation: u32,
    total_generations: u32,
    w0: f64,
    w_end: f64,
    rng: &mut impl Rng,
) {
    let count = (((population_size as f64) * fraction).floor() as usize).min(pool.len());
    if count == 0 || pool.is_empty() {
        return;
    }

    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.sort_by(|&a, &b| scores[a].cost.partial_cmp(&scores[b].cost).unwrap());
    let worst = &order[order.len() - count.min(order.len())..];

    for &index in worst {
        let fresh = Individual::sample(universe, rng);
        scores[index] = crate::eval::evaluate(
            &fresh,
            universe,
            generation,
            total_generations,
            w0,
            w_end,
        );
        pool[index] = fresh;
    }

    let mut paired: Vec<(Individual, Scored)> = pool.drain(..).zip(scores.drain(..)).collect();
    paired.sort_by(|a, b| a.1.cost.partial_cmp(&b.1.cost).unwrap());
    for (individual, score) in paired {
        pool.push(individual);
        scores.push(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::*;
    use rand::SeedableRng;

    fn universe_with(courses: usize) -> Universe {
        let courses = (0..courses)
            .map(|i| Course {
                name: format!("C{i}"),
                code: format!("C{i}"),
                career: "CS".into(),
                semester: "1".into(),
                section: "A".into(),
                kind: "lecture".into(),
            })
            .collect();
        let classrooms = vec![Classroom {
            id: "R0".into(),
            name: "Room 0".into(),
        }];
        Universe::new(courses, classrooms, vec![], default_slots(), &[])
    }

    #[test]
    fn diversity_below_threshold_triggers_diversity_branch() {
        assert_eq!(trigger(5, 0.0, 0.01, 20), Trigger::Diversity);
    }

    #[test]
    fn periodic_branch_fires_on_interval_multiples_when_diversity_is_fine() {
        assert_eq!(trigger(20, 1.0, 0.01, 20), Trigger::Periodic);
        assert_eq!(trigger(21, 1.0, 0.01, 20), Trigger::None);
    }

    #[test]
    fn generation_zero_never_triggers_periodic_branch() {
        assert_eq!(trigger(0, 1.0, 0.01, 20), Trigger::None);
    }

    #[test]
    fn reinsert_replaces_the_expected_fraction_and_keeps_pool_sorted() {
        let universe = universe_with(3);
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let mut pool: Vec<Individual> = (0..10).map(|_| Individual::sample(&universe, &mut rng)).collect();
        let mut scores: Vec<Scored> = pool
            .iter()
            .map(|i| crate::eval::evaluate(i, &universe, 0, 10, 0.0, 50.0))
            .collect();

        reinsert(
            &mut pool, &mut scores, &universe, 10, 0.3, 0, 10, 0.0, 50.0, &mut rng,
        );

        assert_eq!(pool.len(), 10);
        for w in scores.windows(2) {
            assert!(w[0].cost <= w[1].cost);
        }
    }
}
