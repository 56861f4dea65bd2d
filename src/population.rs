//! The population engine: the generation loop itself. Each generation
//! evaluates the population, tracks the best individual seen so far, selects
//! elites, breeds the rest, and reinserts fresh blood on stagnation, with
//! `rayon`-parallel evaluation and diversity measurement.

use crate::config::SchedulerConfig;
use crate::controller;
use crate::domain::Universe;
use crate::error::SchedulerError;
use crate::eval::{self, Scored};
use crate::individual::{Gene, Individual};
use crate::observer::{Observer, Telemetry};
use crate::operators::{crossover, mutation, selection};
use crate::reinsertion;
use crate::resource::{self, Clock};
use crate::termination;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

/// The best individual found, converted back to a course-keyed mapping, plus
/// scalar and per-generation telemetry describing the run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub best_schedule: HashMap<String, Gene>,
    pub best_cost: f64,
    pub conflict_count: u32,
    pub continuity_pct: f64,
    pub convergence_generation: u32,
    pub elapsed: Duration,
    pub peak_resident_memory_bytes: u64,
    pub conflict_series: Vec<u32>,
    pub continuity_series: Vec<f64>,
}

/// Owns the immutable universe, the validated config, and the single seeded
/// RNG threaded through every stochastic operation. Deterministic given the
/// same config and seed; evaluation and diversity are the only parallel
/// steps, and neither touches the RNG.
pub struct Engine {
    universe: Universe,
    config: SchedulerConfig,
    rng: StdRng,
}

impl Engine {
    /// Validates `config` and the universe's input shape before a run can be
    /// built.
    pub fn new(universe: Universe, config: SchedulerConfig) -> Result<Self, SchedulerError> {
        config.validate()?;
        if universe.course_count() == 0 {
            return Err(SchedulerError::InputShape("course universe is empty".into()));
        }
        if universe.classrooms.is_empty() {
            return Err(SchedulerError::InputShape(
                "classroom universe is empty".into(),
            ));
        }
        if universe.slots.is_empty() {
            return Err(SchedulerError::InputShape("slot list is empty".into()));
        }

        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Engine {
            universe,
            config,
            rng,
        })
    }

    fn evaluate_population(&self, population: &[Individual], generation: u32) -> Vec<Scored> {
        population
            .par_iter()
            .map(|individual| {
                eval::evaluate(
                    individual,
                    &self.universe,
                    generation,
                    self.config.generations,
                    self.config.continuity_penalty,
                    self.config.continuity_penalty_final,
                )
            })
            .collect()
    }

    /// Runs the generation loop to termination or to `G`, emitting one
    /// telemetry record per generation via `observer` before the
    /// termination test.
    pub fn run(&mut self, observer: &mut impl Observer) -> RunResult {
        let clock = Clock::start();
        let n = self.config.population_size;
        let total_generations = self.config.generations;

        let mut population: Vec<Individual> = (0..n)
            .map(|_| Individual::sample(&self.universe, &mut self.rng))
            .collect();

        let mut best_individual: Option<Individual> = None;
        let mut best_scored: Option<Scored> = None;
        let mut convergence_generation = total_generations;
        let mut conflict_series = Vec::with_capacity(total_generations as usize);
        let mut continuity_series = Vec::with_capacity(total_generations as usize);

        for generation in 0..total_generations {
            let diversity = crate::diversity::population_diversity(&population);
            let params = controller::derive(&self.config, generation, diversity, n);

            let mut scores = self.evaluate_population(&population, generation);
            let mut order: Vec<usize> = (0..population.len()).collect();
            order.sort_by(|&a, &b| scores[a].cost.partial_cmp(&scores[b].cost).unwrap());
            population = order.iter().map(|&i| population[i].clone()).collect();
            scores = order.iter().map(|&i| scores[i]).collect();

            let current_best = scores[0];
            if best_scored.map(|b| current_best.cost < b.cost).unwrap_or(true) {
                best_scored = Some(current_best);
                best_individual = Some(population[0].clone());
            }

            conflict_series.push(current_best.conflict_count);
            continuity_series.push(current_best.continuity_pct);

            observer.observe(Telemetry {
                generation,
                best_cost: current_best.cost,
                conflict_count: current_best.conflict_count,
                continuity_pct: current_best.continuity_pct,
                diversity,
                mutation_rate: params.mutation_rate,
                elite_count: params.elite_count,
            });

            if termination::satisfied(
                &current_best,
                &self.config.target_conflicts,
                &self.config.target_continuity,
                &self.config.target_cost,
            ) {
                convergence_generation = generation;
                break;
            }

            let elite_count = params.elite_count.min(n);
            let elites: Vec<Individual> = population[..elite_count].to_vec();
            let child_count = n - elite_count;

            let mut children = Vec::with_capacity(child_count);
            for _ in 0..child_count {
                let parent1 = selection::tournament(
                    &population,
                    &scores,
                    self.config.tournament_size,
                    &mut self.rng,
                );
                let parent1 = parent1.clone();
                let parent2 = selection::tournament(
                    &population,
                    &scores,
                    self.config.tournament_size,
                    &mut self.rng,
                );

                let mut child =
                    crossover::adaptive(&parent1, parent2, params.crossover_progress, &mut self.rng);

                mutation::adaptive(
                    &mut child,
                    &self.universe,
                    params.mutation_rate,
                    generation,
                    total_generations,
                    params.continuity_weight_w0,
                    params.continuity_weight_end,
                    params.mutation_progress,
                    &mut self.rng,
                );

                children.push(child);
            }

            let trigger = reinsertion::trigger(
                generation,
                diversity,
                self.config.diversity_threshold,
                self.config.reinsertion_interval,
            );
            if !matches!(trigger, reinsertion::Trigger::None) {
                let mut child_scores = self.evaluate_population(&children, generation);
                reinsertion::reinsert(
                    &mut children,
                    &mut child_scores,
                    &self.universe,
                    n,
                    self.config.reinsertion_fraction,
                    generation,
                    total_generations,
                    self.config.continuity_penalty,
                    self.config.continuity_penalty_final,
                    &mut self.rng,
                );
            }

            population = elites;
            population.extend(children);
        }

        let best_individual = best_individual.expect("population_size validated > 0");
        let best_scored = best_scored.expect("population_size validated > 0");

        RunResult {
            best_schedule: best_individual
                .to_schedule(&self.universe)
                .into_iter()
                .map(|(code, gene)| (code.to_string(), gene))
                .collect(),
            best_cost: best_scored.cost,
            conflict_count: best_scored.conflict_count,
            continuity_pct: best_scored.continuity_pct,
            convergence_generation,
            elapsed: clock.elapsed(),
            peak_resident_memory_bytes: resource::peak_resident_memory_bytes(),
            conflict_series,
            continuity_series,
        }
    }
}
