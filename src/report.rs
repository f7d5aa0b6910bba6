#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::time::Duration;

use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{config::LunchConfig, table::LunchTable};

/// How one lunch went: who ate how much, what is left, and how long it
/// took.
#[derive(Debug, Clone, Serialize)]
pub struct LunchReport {
    /// Seats at the table.
    seats:            usize,
    /// Portions configured for the lunch.
    portions:         usize,
    /// Portions eaten per seat, in seat order.
    portions_by_seat: Vec<usize>,
    /// Portions eaten across all seats.
    total_eaten:      usize,
    /// Refills left in the pot after the lunch.
    leftover:         usize,
    /// Wall time the lunch took, in milliseconds.
    elapsed_ms:       u128,
}

/// A row of the rendered distribution table.
#[derive(Tabled)]
struct SeatRow {
    /// Seat index around the table.
    #[tabled(rename = "Seat")]
    seat:     usize,
    /// Portions that seat ate.
    #[tabled(rename = "Portions")]
    portions: usize,
    /// That seat's share of everything eaten.
    #[tabled(rename = "Share")]
    share:    String,
}

impl LunchReport {
    /// Collects the table's final counters into a report.
    pub(crate) fn new(config: &LunchConfig, table: &LunchTable, elapsed: Duration) -> Self {
        let portions_by_seat = table.tallies();
        Self {
            seats: config.seats,
            portions: config.portions,
            portions_by_seat,
            total_eaten: table.total_eaten(),
            leftover: table.leftover(),
            elapsed_ms: elapsed.as_millis(),
        }
    }

    /// Seats at the table.
    pub fn seats(&self) -> usize {
        self.seats
    }

    /// Portions configured for the lunch.
    pub fn portions(&self) -> usize {
        self.portions
    }

    /// Portions eaten per seat, in seat order.
    pub fn portions_by_seat(&self) -> &[usize] {
        &self.portions_by_seat
    }

    /// Portions eaten across all seats.
    pub fn total_eaten(&self) -> usize {
        self.total_eaten
    }

    /// Refills left in the pot after the lunch.
    pub fn leftover(&self) -> usize {
        self.leftover
    }

    /// Wall time the lunch took, in milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed_ms
    }

    /// Mean portions eaten per seat.
    pub fn mean(&self) -> f64 {
        self.total_eaten as f64 / self.seats as f64
    }

    /// Population standard deviation of the per-seat portion counts.
    pub fn std_deviation(&self) -> f64 {
        let mean = self.mean();
        let variance = self
            .portions_by_seat
            .iter()
            .map(|&portions| {
                let diff = portions as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / self.seats as f64;
        variance.sqrt()
    }

    /// Renders the distribution as a terminal table.
    pub fn render(&self) -> String {
        let total = self.total_eaten.max(1);
        let rows = self
            .portions_by_seat
            .iter()
            .enumerate()
            .map(|(seat, &portions)| SeatRow {
                seat,
                portions,
                share: format!("{:.1}%", portions as f64 * 100.0 / total as f64),
            })
            .collect::<Vec<_>>();

        Table::new(rows)
            .with(Panel::header("Lunch distribution"))
            .with(Panel::footer(format!(
                "Total: {} eaten, {} left in the pot, {} ms",
                self.total_eaten, self.leftover, self.elapsed_ms
            )))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }
}
