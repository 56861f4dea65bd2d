//! Crossover: single-point, uniform, and the adaptive mix between them.

use crate::individual::Individual;
use rand::Rng;

/// Fixed split at `len / 2`: child takes `parent1`'s genes below the split,
/// `parent2`'s at and above it.
pub fn single_point(parent1: &Individual, parent2: &Individual) -> Individual {
    let split = parent1.len() / 2;
    let genes = (0..parent1.len())
        .map(|i| {
            if i < split {
                parent1.gene(i)
            } else {
                parent2.gene(i)
            }
        })
        .collect();
    Individual::from_genes(genes)
}

/// Each gene independently comes from `parent1` or `parent2` with equal
/// probability.
pub fn uniform(parent1: &Individual, parent2: &Individual, rng: &mut impl Rng) -> Individual {
    let genes = (0..parent1.len())
        .map(|i| {
            if rng.gen_bool(0.5) {
                parent1.gene(i)
            } else {
                parent2.gene(i)
            }
        })
        .collect();
    Individual::from_genes(genes)
}

/// With probability `1 - progress` applies single-point, else uniform.
pub fn adaptive(
    parent1: &Individual,
    parent2: &Individual,
    progress: f64,
    rng: &mut impl Rng,
) -> Individual {
    if rng.gen_bool((1.0 - progress).clamp(0.0, 1.0)) {
        single_point(parent1, parent2)
    } else {
        uniform(parent1, parent2, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::Gene;
    use rand::SeedableRng;

    fn gene(classroom: usize) -> Gene {
        Gene {
            classroom,
            slot: 0,
            instructor: None,
        }
    }

    fn parent(n: usize, classroom_base: usize) -> Individual {
        Individual::from_genes((0..n).map(|i| gene(classroom_base + i)).collect())
    }

    #[test]
    fn single_point_takes_first_half_from_parent1_second_from_parent2() {
        let p1 = parent(4, 0);
        let p2 = parent(4, 100);
        let child = single_point(&p1, &p2);
        assert_eq!(child.gene(0).classroom, 0);
        assert_eq!(child.gene(1).classroom, 1);
        assert_eq!(child.gene(2).classroom, 102);
        assert_eq!(child.gene(3).classroom, 103);
    }

    #[test]
    fn single_point_preserves_every_course() {
        let p1 = parent(7, 0);
        let p2 = parent(7, 100);
        let child = single_point(&p1, &p2);
        assert_eq!(child.len(), 7);
    }

    #[test]
    fn uniform_child_genes_each_come_from_one_parent() {
        let p1 = parent(10, 0);
        let p2 = parent(10, 100);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let child = uniform(&p1, &p2, &mut rng);
        for i in 0..10 {
            let c = child.gene(i).classroom;
            assert!(c == i || c == 100 + i);
        }
    }

    #[test]
    fn adaptive_with_progress_one_always_uses_uniform_distribution() {
        // progress=1.0 => gen_bool(0.0) is always false => always uniform.
        let p1 = parent(10, 0);
        let p2 = parent(10, 100);
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let child = adaptive(&p1, &p2, 1.0, &mut rng);
        assert_eq!(child.len(), 10);
    }
}
