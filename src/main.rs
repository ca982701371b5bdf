//! `cpusched` - run a scheduling simulation over a process file.
//!
//! Usage: `cpusched <process-file> [config.json]`

use std::error::Error;
use std::process::ExitCode;

use tracing::{error, info};

use u_cpusched::config::SimulationConfig;
use u_cpusched::loader::load_processes;
use u_cpusched::report::render_gantt;
use u_cpusched::simulation::Simulation;
use u_cpusched::telemetry::init_tracing;

const GANTT_WIDTH: usize = 72;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(input) = args.first() else {
        eprintln!("usage: cpusched <process-file> [config.json]");
        return ExitCode::from(2);
    };

    match run(input, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "simulation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, config_path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let config = match config_path {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    };
    info!(input, algorithm = %config.algorithm, "loading processes");

    let processes = load_processes(input, config.loader)?;
    let outcome = Simulation::new(config).run(&processes)?;

    println!("\n{}", outcome.report);
    let pids: Vec<i64> = outcome.processes.iter().map(|p| p.pid).collect();
    println!("{}", render_gantt(&outcome.timeline, &pids, GANTT_WIDTH));
    Ok(())
}
