//! An adaptive genetic scheduler for weekly university course timetables:
//! population initialization, a multi-criterion cost function, adaptive
//! operators, diversity measurement, and a convergence protocol. Everything
//! outside that core (CSV ingestion, the CLI, a printable grid) is a thin,
//! idiomatically-built ambient layer.

pub mod availability;
pub mod config;
pub mod controller;
pub mod diversity;
pub mod domain;
pub mod error;
pub mod eval;
pub mod individual;
pub mod loader;
pub mod observer;
pub mod operators;
pub mod population;
pub mod reinsertion;
pub mod resource;
pub mod termination;

pub use config::SchedulerConfig;
pub use domain::Universe;
pub use error::{Result, SchedulerError};
pub use population::{Engine, RunResult};
