//! Command-line interface wiring the loader, config and engine together.

use std::path::PathBuf;
use structopt::StructOpt;

/// Generates a weekly course timetable with an adaptive genetic scheduler.
#[derive(Debug, StructOpt)]
#[structopt(name = "campus-scheduler-ga", about = "Adaptive genetic course scheduler")]
pub struct Cli {
    /// Path to the courses CSV (name, code, career, semester, section, type)
    #[structopt(long = "courses", parse(from_os_str))]
    pub courses: PathBuf,

    /// Path to the classrooms CSV (id, name)
    #[structopt(long = "classrooms", parse(from_os_str))]
    pub classrooms: PathBuf,

    /// Path to the instructors CSV (name, registration, hora_entrada, hora_salida)
    #[structopt(long = "instructors", parse(from_os_str))]
    pub instructors: PathBuf,

    /// Path to the instructor-course relations CSV (registro, codigo)
    #[structopt(long = "relations", parse(from_os_str))]
    pub relations: PathBuf,

    /// Population size
    #[structopt(short = "p", long = "population-size", default_value = "100")]
    pub population_size: usize,

    /// Number of generations (G)
    #[structopt(short = "g", long = "generations", default_value = "200")]
    pub generations: u32,

    /// Initial mutation rate (p0)
    #[structopt(long = "mutation-rate", default_value = "0.3")]
    pub mutation_rate: f64,

    /// Initial continuity weight (w0)
    #[structopt(long = "continuity-penalty", default_value = "5.0")]
    pub continuity_penalty: f64,

    /// Final continuity weight (w_end)
    #[structopt(long = "continuity-penalty-final", default_value = "50.0")]
    pub continuity_penalty_final: f64,

    /// Reinsertion interval (I_reins)
    #[structopt(long = "reinsertion-interval", default_value = "20")]
    pub reinsertion_interval: u32,

    /// Reinsertion fraction (r_reins)
    #[structopt(long = "reinsertion-fraction", default_value = "0.1")]
    pub reinsertion_fraction: f64,

    /// Diversity threshold (theta_div) that triggers boosts and reinsertion
    #[structopt(long = "diversity-threshold", default_value = "0.01")]
    pub diversity_threshold: f64,

    /// Minimum elite fraction (f_min)
    #[structopt(long = "elite-fraction-min", default_value = "0.05")]
    pub elite_fraction_min: f64,

    /// Maximum elite fraction (f_max)
    #[structopt(long = "elite-fraction-max", default_value = "0.2")]
    pub elite_fraction_max: f64,

    /// Tournament size (k)
    #[structopt(long = "tournament-size", default_value = "3")]
    pub tournament_size: usize,

    /// Enable the conflict-count termination criterion
    #[structopt(long = "enable-target-conflicts")]
    pub enable_target_conflicts: bool,

    /// Target conflict count (terminate when conflict_count <= this)
    #[structopt(long = "target-conflicts", default_value = "0")]
    pub target_conflicts: u32,

    /// Enable the continuity termination criterion
    #[structopt(long = "enable-target-continuity")]
    pub enable_target_continuity: bool,

    /// Target continuity percentage (terminate when continuity_pct >= this)
    #[structopt(long = "target-continuity", default_value = "100.0")]
    pub target_continuity: f64,

    /// Enable the cost termination criterion
    #[structopt(long = "enable-target-cost")]
    pub enable_target_cost: bool,

    /// Target cost (terminate when cost <= this)
    #[structopt(long = "target-cost", default_value = "0.0")]
    pub target_cost: f64,

    /// RNG seed, for reproducible runs
    #[structopt(long = "seed", default_value = "1559947294")]
    pub seed: u64,
}

impl Cli {
    /// Builds a `SchedulerConfig` from the parsed flags, leaving the slot
    /// list at its default (not yet exposed as a flag).
    pub fn to_config(&self) -> crate::config::SchedulerConfig {
        use crate::config::{SchedulerConfig, Target};

        SchedulerConfig {
            population_size: self.population_size,
            generations: self.generations,
            mutation_rate: self.mutation_rate,
            continuity_penalty: self.continuity_penalty,
            continuity_penalty_final: self.continuity_penalty_final,
            reinsertion_interval: self.reinsertion_interval,
            reinsertion_fraction: self.reinsertion_fraction,
            diversity_threshold: self.diversity_threshold,
            elite_fraction_min: self.elite_fraction_min,
            elite_fraction_max: self.elite_fraction_max,
            tournament_size: self.tournament_size,
            target_conflicts: Target {
                enabled: self.enable_target_conflicts,
                value: self.target_conflicts,
            },
            target_continuity: Target {
                enabled: self.enable_target_continuity,
                value: self.target_continuity,
            },
            target_cost: Target {
                enabled: self.enable_target_cost,
                value: self.target_cost,
            },
            seed: self.seed,
            ..SchedulerConfig::default()
        }
    }
}
