//! `SchedulerConfig`: every knob the adaptive scheduler reads, validated
//! once, synchronously, before a run starts.

use crate::domain::{default_slots, Slot};
use crate::error::SchedulerError;

/// Termination target plus its enable flag.
#[derive(Debug, Clone, Copy)]
pub struct Target<T> {
    pub enabled: bool,
    pub value: T,
}

impl<T> Target<T> {
    pub fn disabled(value: T) -> Self {
        Target {
            enabled: false,
            value,
        }
    }
}

/// Every tunable the adaptive scheduler reads. Construct with `..Default::default()`
/// and override the fields that matter; always run through [`SchedulerConfig::validate`]
/// before building an `Engine`.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub population_size: usize,
    pub generations: u32,
    pub mutation_rate: f64,
    pub continuity_penalty: f64,
    pub continuity_penalty_final: f64,
    pub reinsertion_interval: u32,
    pub reinsertion_fraction: f64,
    pub diversity_threshold: f64,
    pub elite_fraction_min: f64,
    pub elite_fraction_max: f64,
    pub tournament_size: usize,
    pub slots: Vec<Slot>,
    pub target_conflicts: Target<u32>,
    pub target_continuity: Target<f64>,
    pub target_cost: Target<f64>,
    pub seed: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            population_size: 100,
            generations: 200,
            mutation_rate: 0.3,
            continuity_penalty: 5.0,
            continuity_penalty_final: 50.0,
            reinsertion_interval: 20,
            reinsertion_fraction: 0.1,
            diversity_threshold: 0.01,
            elite_fraction_min: 0.05,
            elite_fraction_max: 0.2,
            tournament_size: 3,
            slots: default_slots(),
            target_conflicts: Target::disabled(0),
            target_continuity: Target::disabled(100.0),
            target_cost: Target::disabled(0.0),
            seed: 0x5CA1AB1E,
        }
    }
}

impl SchedulerConfig {
    /// Rejects out-of-range or internally inconsistent settings. Called once,
    /// before an `Engine` is built; nothing downstream re-checks these.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.population_size == 0 {
            return Err(SchedulerError::Config(
                "population_size must be positive".into(),
            ));
        }
        if self.generations == 0 {
            return Err(SchedulerError::Config("generations must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SchedulerError::Config(
                "mutation_rate must be in [0, 1]".into(),
            ));
        }
        if self.continuity_penalty < 0.0 {
            return Err(SchedulerError::Config(
                "continuity_penalty must be >= 0".into(),
            ));
        }
        if self.continuity_penalty_final < 0.0 {
            return Err(SchedulerError::Config(
                "continuity_penalty_final must be >= 0".into(),
            ));
        }
        if self.reinsertion_interval == 0 {
            return Err(SchedulerError::Config(
                "reinsertion_interval must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reinsertion_fraction) {
            return Err(SchedulerError::Config(
                "reinsertion_fraction must be in [0, 1]".into(),
            ));
        }
        if self.diversity_threshold < 0.0 {
            return Err(SchedulerError::Config(
                "diversity_threshold must be >= 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.elite_fraction_min)
            || !(0.0..=1.0).contains(&self.elite_fraction_max)
        {
            return Err(SchedulerError::Config(
                "elite_fraction_min/max must be in [0, 1]".into(),
            ));
        }
        if self.elite_fraction_min > self.elite_fraction_max {
            return Err(SchedulerError::Config(
                "elite_fraction_min must be <= elite_fraction_max".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(SchedulerError::Config(
                "tournament_size must be positive".into(),
            ));
        }
        if self.tournament_size > self.population_size {
            return Err(SchedulerError::Config(
                "tournament_size must not exceed population_size".into(),
            ));
        }
        if self.slots.is_empty() {
            return Err(SchedulerError::InputShape("slot list is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(SchedulerConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_population_is_rejected() {
        let config = SchedulerConfig {
            population_size: 0,
            ..SchedulerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SchedulerError::Config(_))
        ));
    }

    #[test]
    fn inverted_elite_fractions_are_rejected() {
        let config = SchedulerConfig {
            elite_fraction_min: 0.5,
            elite_fraction_max: 0.1,
            ..SchedulerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SchedulerError::Config(_))
        ));
    }

    #[test]
    fn out_of_range_mutation_rate_is_rejected() {
        let config = SchedulerConfig {
            mutation_rate: 1.5,
            ..SchedulerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SchedulerError::Config(_))
        ));
    }

    #[test]
    fn empty_slot_list_is_an_input_shape_error() {
        let config = SchedulerConfig {
            slots: vec![],
            ..SchedulerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SchedulerError::InputShape(_))
        ));
    }
}
