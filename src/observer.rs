//! Per-generation telemetry.
//!
//! The engine invokes an `Observer` exactly once per generation, before the
//! termination test and before breeding. A logging implementation is
//! provided so the binary has something to plug in without writing its own.

/// One generation's worth of telemetry.
#[derive(Debug, Clone, Copy)]
pub struct Telemetry {
    pub generation: u32,
    pub best_cost: f64,
    pub conflict_count: u32,
    pub continuity_pct: f64,
    pub diversity: f64,
    pub mutation_rate: f64,
    pub elite_count: usize,
}

/// A per-generation telemetry sink. Must tolerate being invoked from
/// whatever thread the host runs the engine on; this trait itself makes no
/// threading demands, the obligation is on the implementor.
pub trait Observer {
    fn observe(&mut self, telemetry: Telemetry);
}

/// Logs one `info!` line per generation via the `log` facade.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl Observer for LoggingObserver {
    fn observe(&mut self, telemetry: Telemetry) {
        log::info!(
            "[gen {}] cost={:.3} conflicts={} continuity={:.1}% diversity={:.4} p_mut={:.4} elites={}",
            telemetry.generation,
            telemetry.best_cost,
            telemetry.conflict_count,
            telemetry.continuity_pct,
            telemetry.diversity,
            telemetry.mutation_rate,
            telemetry.elite_count,
        );
    }
}

/// Collects every generation's telemetry in order, for callers that want the
/// full per-generation series rather than a log stream.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub records: Vec<Telemetry>,
}

impl Observer for RecordingObserver {
    fn observe(&mut self, telemetry: Telemetry) {
        self.records.push(telemetry);
    }
}
