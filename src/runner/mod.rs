//! Bounded execution of search strategies and orchestration of runs.
//!
//! # Architecture
//!
//! - A **completion slot** that a worker and a timer race to fill
//! - An **executor** that bounds one strategy call by a wall-clock budget
//! - An **orchestrator** that runs one or all strategies over a board
//! - A **batch processor** that runs every strategy over a directory of boards
//!
//! # Example
//!
//! ```ignore
//! let config = RunConfig::default().with_budget(Duration::from_secs(60));
//! let reports = run_all(&board, Some("puzzle.txt"), &Registry::default(), &config);
//! ```

pub mod batch;
pub mod config;
pub mod executor;
pub mod orchestrator;
pub mod result;
pub mod slot;

pub use batch::run_directory;
pub use config::RunConfig;
pub use executor::{Execution, Outcome, execute};
pub use orchestrator::{run_all, run_one, run_strategy};
pub use result::{NodeCount, RunOutcome, RunResult};
