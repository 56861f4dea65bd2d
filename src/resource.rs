//! Wall-clock and resident-memory telemetry for a run.

use std::time::{Duration, Instant};
use sysinfo::{Pid, System};

/// Starts a stopwatch for a run; call [`Clock::elapsed`] at the end.
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Clock {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Samples the current process's resident set size in bytes. Returns `0` if
/// the current process cannot be found in the snapshot (never expected to
/// happen, but there's no sense panicking a scheduler run over a telemetry
/// field).
pub fn peak_resident_memory_bytes() -> u64 {
    let mut system = System::new();
    let pid = Pid::from_u32(std::process::id());
    system.refresh_process(pid);
    system
        .process(pid)
        .map(|process| process.memory())
        .unwrap_or(0)
}
