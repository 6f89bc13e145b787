//! `stocksim-simulation`
//!
//! Drives a roster of inventory items through a number of days and hands the
//! results to reporting layers (CSV export, JSON run report).
//!
//! The driver itself has no state beyond the day counter and the roster; every
//! downstream concern reads the roster through read-only views.

pub mod config;
pub mod driver;
pub mod export;
pub mod report;
pub mod roster;

pub use config::{ConfigError, SimulationConfig, DEFAULT_DAYS, DEFAULT_OUTPUT_DIR};
pub use driver::{run, run_with_observer, DayObserver, NoopObserver};
pub use export::{ExportError, CsvExporter};
pub use report::{ItemDayRow, ItemReport, RunReport};
pub use roster::Roster;
