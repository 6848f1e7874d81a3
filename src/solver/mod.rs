//! Game driver.
//!
//! `Solver` plays a full game: it follows the known solution while it still
//! applies and otherwise asks the alpha-beta searcher, tracking the
//! red-red-yellow round as it goes.

pub mod config;
pub mod driver;
pub mod script;

pub use config::{SolverConfig, Strategy};
pub use driver::{MoveSource, Outcome, SolveReport, Solver, TurnRecord};
pub use script::KNOWN_SOLUTION;
