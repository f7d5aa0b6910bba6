#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use futures::future::try_join_all;
use itertools::Itertools;

use crate::{
    config::{ConfigError, LunchConfig},
    report::LunchReport,
    table::LunchTable,
};

/// One lunch: a laid table and one diner task per seat.
pub struct Lunch {
    /// Validated configuration this lunch runs with.
    config: LunchConfig,
    /// Shared table state.
    table:  Arc<LunchTable>,
}

impl Lunch {
    /// Lays the table after validating the configuration.
    pub fn new(config: LunchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = Arc::new(LunchTable::new(&config));
        Ok(Self { config, table })
    }

    /// Runs the lunch to completion and reports how it went.
    ///
    /// Returns only after every diner task has finished; at that point the
    /// pot is empty and the total eaten equals the configured portions.
    pub async fn serve(self) -> Result<LunchReport> {
        let start = Instant::now();

        let mut diners = Vec::with_capacity(self.config.seats);
        for seat in 0..self.config.seats {
            let table = Arc::clone(&self.table);
            let eat_for = self.config.eat_for;
            let discuss_for = self.config.discuss_for;
            diners.push(tokio::spawn(async move {
                dine(table, seat, eat_for, discuss_for).await
            }));
        }

        try_join_all(diners)
            .await
            .context("a diner task panicked or was cancelled")?
            .into_iter()
            .collect::<Result<Vec<()>>>()?;

        let report = LunchReport::new(&self.config, &self.table, start.elapsed());
        tracing::info!("Lunch over in {} ms", report.elapsed_ms());
        tracing::info!("Portions left in the pot: {}", report.leftover());
        tracing::info!(
            "Distribution: {}",
            report
                .portions_by_seat()
                .iter()
                .enumerate()
                .map(|(seat, portions)| format!("{seat}={portions}"))
                .join(", ")
        );
        Ok(report)
    }
}

/// One seat's lunch: eat, put the spoons back, discuss, order a refill,
/// and leave the table once the pot is empty.
async fn dine(
    table: Arc<LunchTable>,
    seat: usize,
    eat_for: Duration,
    discuss_for: Duration,
) -> Result<()> {
    loop {
        table.pick_up_spoons(seat).await?;
        pause(eat_for).await;
        table.put_down_spoons(seat);
        pause(discuss_for).await;

        if !table.order_refill().await? {
            break;
        }
    }
    tracing::debug!(seat, "left the table");
    Ok(())
}

/// Sleeps for `duration`; a zero-length pause still yields once so a diner
/// task cannot monopolize its worker between awaits.
async fn pause(duration: Duration) {
    if duration.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(duration).await;
    }
}
