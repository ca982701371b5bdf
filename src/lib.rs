//! CPU scheduling simulator in the U-Engine ecosystem.
//!
//! Simulates single-CPU scheduling disciplines over a fixed set of
//! processes with static arrival times, producing per-process timing
//! metrics, aggregate statistics and an execution timeline.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `Timeline`, `ExecutionSlice`, `WorkloadSpec`
//! - **`scheduler`**: `CpuScheduler` trait, Round Robin and Shortest
//!   Remaining Time engines
//! - **`report`**: `SimulationMetrics`, `Report`, text Gantt rendering
//! - **`loader`**: line-oriented process definition parser
//! - **`validation`**: process-set integrity checks
//! - **`config`**: JSON-backed `SimulationConfig`
//! - **`simulation`**: facade running a configured scheduler
//!
//! # Example
//!
//! ```
//! use u_cpusched::config::SimulationConfig;
//! use u_cpusched::loader::{parse_processes, LoaderOptions};
//! use u_cpusched::simulation::Simulation;
//!
//! let processes = parse_processes("1 0 5\n2 1 3\n3 2 1\n", LoaderOptions::default());
//! let outcome = Simulation::new(SimulationConfig::round_robin(2))
//!     .run(&processes)
//!     .unwrap();
//!
//! assert_eq!(outcome.report.rows[0].finish_time, 9);
//! println!("{}", outcome.report);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod telemetry;
pub mod validation;

pub use error::{Result, SimError};
