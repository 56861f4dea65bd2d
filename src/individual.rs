//! The individual representation: a dense vector of genes indexed by a
//! stable course ordinal (cheap copy, O(1) gene access, stable crossover
//! points).

use crate::domain::Universe;
use rand::Rng;
use std::collections::HashMap;

/// A single course's assignment: a classroom ordinal, a slot ordinal, and an
/// optional instructor ordinal (`None` when the course has no eligible
/// instructor at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gene {
    pub classroom: usize,
    pub slot: usize,
    pub instructor: Option<usize>,
}

/// A complete candidate schedule: one gene per course, in course-ordinal
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    genes: Vec<Gene>,
}

impl Individual {
    /// Builds an individual directly from a gene vector. Used by operators
    /// that construct a child gene-by-gene (crossover, mutation, reinsertion)
    /// and by tests; callers are responsible for the gene count matching the
    /// course universe.
    pub fn from_genes(genes: Vec<Gene>) -> Self {
        Individual { genes }
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn gene(&self, course_ordinal: usize) -> Gene {
        self.genes[course_ordinal]
    }

    pub fn set_gene(&mut self, course_ordinal: usize, gene: Gene) {
        self.genes[course_ordinal] = gene;
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Draws one uniform gene for `course_ordinal`: a uniform classroom, a
    /// uniform slot, and a uniform eligible instructor (`None` if the
    /// course's eligibility entry is empty).
    pub fn sample_gene(universe: &Universe, course_ordinal: usize, rng: &mut impl Rng) -> Gene {
        let classroom = rng.gen_range(0..universe.classrooms.len());
        let slot = rng.gen_range(0..universe.slots.len());
        let eligible = universe.eligibility().eligible(course_ordinal);
        let instructor = if eligible.is_empty() {
            None
        } else {
            Some(eligible[rng.gen_range(0..eligible.len())])
        };

        Gene {
            classroom,
            slot,
            instructor,
        }
    }

    /// Builds a fresh, independently-sampled individual over the whole
    /// course universe.
    pub fn sample(universe: &Universe, rng: &mut impl Rng) -> Self {
        let genes = (0..universe.course_count())
            .map(|c| Self::sample_gene(universe, c, rng))
            .collect();
        Individual { genes }
    }

    /// Converts back to a course-keyed mapping for external consumers.
    pub fn to_schedule<'a>(&self, universe: &'a Universe) -> HashMap<&'a str, Gene> {
        universe
            .courses
            .iter()
            .enumerate()
            .map(|(ordinal, course)| (course.code.as_str(), self.genes[ordinal]))
            .collect()
    }
}
