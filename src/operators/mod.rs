//! Genetic operators: tournament selection, the two crossovers and the two
//! mutations, each pair combined adaptively.

pub mod crossover;
pub mod mutation;
pub mod selection;
