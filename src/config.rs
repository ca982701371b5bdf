//! Simulation configuration.
//!
//! Loaded from JSON; every field is optional and falls back to the
//! default shown below.
//!
//! ```json
//! {
//!   "algorithm": { "round_robin": { "time_quantum": 4 } },
//!   "ready_queue": "list_order",
//!   "utilization": "last_in_list",
//!   "loader": { "skip_header": false }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SimError};
use crate::loader::LoaderOptions;
use crate::report::UtilizationBasis;
use crate::scheduler::{ReadyQueuePolicy, SchedulerKind};

/// Full configuration for one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Scheduling discipline.
    pub algorithm: SchedulerKind,
    /// Round Robin dispatch order.
    pub ready_queue: ReadyQueuePolicy,
    /// Utilization denominator.
    pub utilization: UtilizationBasis,
    /// Input parsing options.
    pub loader: LoaderOptions,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// List-order Round Robin with the given quantum.
    pub fn round_robin(time_quantum: i64) -> Self {
        Self::new().with_algorithm(SchedulerKind::round_robin(time_quantum))
    }

    /// Sets the scheduling discipline.
    pub fn with_algorithm(mut self, algorithm: SchedulerKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the Round Robin ready-queue policy.
    pub fn with_ready_queue(mut self, policy: ReadyQueuePolicy) -> Self {
        self.ready_queue = policy;
        self
    }

    /// Sets the utilization basis.
    pub fn with_utilization(mut self, basis: UtilizationBasis) -> Self {
        self.utilization = basis;
        self
    }

    /// Sets loader options.
    pub fn with_loader(mut self, loader: LoaderOptions) -> Self {
        self.loader = loader;
        self
    }

    /// Checks simulation parameters.
    ///
    /// # Errors
    /// [`SimError::InvalidQuantum`] for a Round Robin quantum ≤ 0.
    pub fn validate(&self) -> Result<()> {
        match self.algorithm {
            SchedulerKind::RoundRobin { time_quantum } if time_quantum <= 0 => {
                Err(SimError::InvalidQuantum(time_quantum))
            }
            _ => Ok(()),
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
