mod cli;

use cli::Cli;
use scheduler_ga::observer::LoggingObserver;
use scheduler_ga::{loader, Engine};
use std::process::ExitCode;
use structopt::StructOpt;

fn main() -> ExitCode {
    env_logger::init();

    let name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown");
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    log::info!("{} v{}", name, version);

    let args = Cli::from_args();
    let config = args.to_config();

    let universe = match loader::load_universe(
        &args.courses,
        &args.classrooms,
        &args.instructors,
        &args.relations,
        config.slots.clone(),
    ) {
        Ok(universe) => universe,
        Err(err) => {
            eprintln!("failed to load input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = match Engine::new(universe, config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut observer = LoggingObserver;
    let result = engine.run(&mut observer);

    print_grid(&result);

    println!(
        "converged at generation {} in {:.2?} (cost={:.2}, conflicts={}, continuity={:.1}%, rss={} bytes)",
        result.convergence_generation,
        result.elapsed,
        result.best_cost,
        result.conflict_count,
        result.continuity_pct,
        result.peak_resident_memory_bytes,
    );

    ExitCode::SUCCESS
}

/// Prints the chosen schedule as a plain-text grid. A real deployment would
/// hand the same data to a proper grid renderer instead.
fn print_grid(result: &scheduler_ga::RunResult) {
    let mut rows: Vec<(&String, &scheduler_ga::individual::Gene)> =
        result.best_schedule.iter().collect();
    rows.sort_by_key(|(code, gene)| (gene.slot, code.as_str()));

    println!("{:<10} {:<6} {:<6} {:<10}", "COURSE", "ROOM", "SLOT", "INSTRUCTOR");
    for (code, gene) in rows {
        let instructor = gene
            .instructor
            .map(|i| i.to_string())
            .unwrap_or_else(|| "--".to_string());
        println!(
            "{:<10} {:<6} {:<6} {:<10}",
            code, gene.classroom, gene.slot, instructor
        );
    }
}
