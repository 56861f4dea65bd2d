//! Error taxonomy for the scheduler core and its thin loader collaborator.

use thiserror::Error;

/// Everything that can stop a run before it produces a result.
///
/// Configuration and input-shape problems are rejected synchronously before
/// the generation loop starts; the loop itself never produces an error.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// A configuration value was out of range or internally inconsistent
    /// (non-positive sizes, rates outside `[0, 1]`, `elite_fraction_min >
    /// elite_fraction_max`, ...).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The input universe cannot support a valid individual (no courses, no
    /// classrooms, or no slots).
    #[error("invalid input: {0}")]
    InputShape(String),

    /// The CSV loader failed to read or parse one of the four tabular
    /// streams.
    #[error("failed to load {stream}: {source}")]
    Loader {
        stream: &'static str,
        #[source]
        source: csv::Error,
    },

    /// Plain I/O failure opening one of the input files.
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
