#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::time::Duration;

use typed_builder::TypedBuilder;

/// An enum to represent configurations a lunch cannot be started with.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A table with fewer than two seats has nobody to share spoons with.
    #[error("a lunch needs at least 2 seats, got {0}")]
    TooFewSeats(usize),
    /// Every seat starts with a portion already served, so the pot must
    /// cover the whole table.
    #[error("{portions} portions cannot cover {seats} seats; every seat starts with one serving")]
    NotEnoughPortions {
        /// Seats at the table.
        seats:    usize,
        /// Portions configured for the lunch.
        portions: usize,
    },
    /// The serving counter needs at least one waiter slot to take orders.
    #[error("the serving counter needs at least one waiter slot")]
    NoWaiterSlots,
}

/// Everything a lunch needs to know before the first spoon is picked up.
#[derive(Debug, Clone, TypedBuilder)]
pub struct LunchConfig {
    /// Number of programmers seated around the table.
    #[builder(default = 5)]
    pub seats:        usize,
    /// Total portions served over the whole lunch, first servings included.
    #[builder(default = 64)]
    pub portions:     usize,
    /// How long a seat holds its spoons once they are granted.
    #[builder(default = Duration::ZERO)]
    pub eat_for:      Duration,
    /// How long a seat discusses lecturers between portions.
    #[builder(default = Duration::ZERO)]
    pub discuss_for:  Duration,
    /// Concurrent orders the serving counter accepts.
    #[builder(default = 2)]
    pub waiter_slots: usize,
}

impl Default for LunchConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LunchConfig {
    /// Checks the configuration before any table state is built.
    ///
    /// Rejecting `portions < seats` matters: the pot is seeded with
    /// `portions - seats` and the refill loop only stops at exactly zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seats < 2 {
            return Err(ConfigError::TooFewSeats(self.seats));
        }
        if self.portions < self.seats {
            return Err(ConfigError::NotEnoughPortions {
                seats:    self.seats,
                portions: self.portions,
            });
        }
        if self.waiter_slots == 0 {
            return Err(ConfigError::NoWaiterSlots);
        }
        Ok(())
    }

    /// Builds a configuration from builder defaults with `CANTEEN_*`
    /// environment overrides applied.
    pub fn from_env_defaults() -> Self {
        Self::builder()
            .eat_for(read_millis("CANTEEN_EAT_MS", 0))
            .discuss_for(read_millis("CANTEEN_DISCUSS_MS", 0))
            .waiter_slots(read_count("CANTEEN_WAITER_SLOTS", 2))
            .build()
    }
}

/// Parses an environment variable into a millisecond `Duration`, falling
/// back to `default_ms` when parsing fails or the variable is missing.
fn read_millis(env: &str, default_ms: u64) -> Duration {
    std::env::var(env)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or_else(|| Duration::from_millis(default_ms))
}

/// Parses an environment variable into a count, falling back to `default`
/// when parsing fails or the variable is missing.
fn read_count(env: &str, default: usize) -> usize {
    std::env::var(env)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(default)
}
