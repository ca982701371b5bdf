//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling engine: the
//! [`Process`] being scheduled and the [`Timeline`] trace a run produces.
//!
//! # Field Ownership
//!
//! | Field | Set by | Mutable during run |
//! |-------|--------|--------------------|
//! | `pid`, `arrival_time`, `burst_time` | loader | no |
//! | `remaining_time`, `start_time` | scheduler | yes |
//! | `finish_time`, `waiting_time`, `turnaround_time` | scheduler, once | no |

mod process;
mod timeline;
mod workload;

pub use process::Process;
pub use timeline::{ExecutionSlice, Timeline};
pub use workload::WorkloadSpec;
