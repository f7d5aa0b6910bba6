//! # canteen
//!
//! A deadlock-free dining simulation: programmers around a table sharing
//! spoons, a waiter bounding concurrent orders at the serving counter, and
//! a shared pot of portions drained with a lock-free refill loop.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Lunch configuration and its validation rules.
pub mod config;
/// Orchestration of one lunch: diner tasks, joining, and logging.
pub mod lunch;
/// Post-lunch reporting and distribution statistics.
pub mod report;
/// Seat states around the table.
pub mod state;
/// Shared table state and spoon arbitration.
pub mod table;

pub use config::{ConfigError, LunchConfig};
pub use lunch::Lunch;
pub use report::LunchReport;
pub use state::SeatState;
pub use table::LunchTable;
