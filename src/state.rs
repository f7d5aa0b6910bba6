#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// What a seat at the table is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatState {
    /// Between portions, discussing lecturers with the neighbors.
    Discussing,
    /// Waiting for both spoons to become available.
    Hungry,
    /// Holding both spoons.
    Eating,
}

impl Display for SeatState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatState::Discussing => write!(f, "discussing"),
            SeatState::Hungry => write!(f, "hungry"),
            SeatState::Eating => write!(f, "eating"),
        }
    }
}
