//! Population diversity: mean pairwise Hamming-like distance.

use crate::individual::Individual;
use rayon::prelude::*;

/// Fraction of genes that differ between two individuals of equal length.
pub fn distance(a: &Individual, b: &Individual) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    if a.is_empty() {
        return 0.0;
    }
    let differing = a
        .genes()
        .iter()
        .zip(b.genes().iter())
        .filter(|(ga, gb)| ga != gb)
        .count();
    differing as f64 / a.len() as f64
}

/// Mean pairwise distance across the population; `0.0` when fewer than two
/// individuals are present. The O(n^2) pair enumeration is the natural
/// target for parallelism, hence the `rayon` fold below.
pub fn population_diversity(population: &[Individual]) -> f64 {
    let n = population.len();
    if n < 2 {
        return 0.0;
    }

    let pair_count = n * (n - 1) / 2;
    let sum: f64 = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut local = 0.0;
            for j in (i + 1)..n {
                local += distance(&population[i], &population[j]);
            }
            local
        })
        .sum();

    sum / pair_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::Gene;

    fn gene(classroom: usize, slot: usize) -> Gene {
        Gene {
            classroom,
            slot,
            instructor: None,
        }
    }

    #[test]
    fn empty_population_has_zero_diversity() {
        assert_eq!(population_diversity(&[]), 0.0);
    }

    #[test]
    fn single_individual_has_zero_diversity() {
        let ind = Individual::from_genes(vec![gene(0, 0)]);
        assert_eq!(population_diversity(&[ind]), 0.0);
    }

    #[test]
    fn identical_clones_have_zero_diversity() {
        let a = Individual::from_genes(vec![gene(0, 0), gene(1, 1)]);
        let b = a.clone();
        assert_eq!(population_diversity(&[a, b]), 0.0);
    }

    #[test]
    fn fully_distinct_individuals_have_diversity_one() {
        let a = Individual::from_genes(vec![gene(0, 0), gene(1, 1)]);
        let b = Individual::from_genes(vec![gene(5, 5), gene(6, 6)]);
        assert_eq!(population_diversity(&[a, b]), 1.0);
    }

    #[test]
    fn distance_is_the_fraction_of_differing_genes() {
        let a = Individual::from_genes(vec![gene(0, 0), gene(1, 1), gene(2, 2)]);
        let b = Individual::from_genes(vec![gene(0, 0), gene(9, 9), gene(2, 2)]);
        assert!((distance(&a, &b) - (1.0 / 3.0)).abs() < 1e-9);
    }
}
