#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use anyhow::{Context, Result};
use tokio::sync::Semaphore;

use crate::{config::LunchConfig, state::SeatState};

/// Shared state of one lunch table: seat states, spoon grants, the waiter
/// at the serving counter, and the pot of portions.
///
/// Arbitration is the classic monitor scheme: every state transition and
/// grant decision happens under one mutex, and a seat only ever blocks on
/// its own grant semaphore. A seat is granted its spoons when it is hungry
/// and neither neighbor is eating, so adjacent seats never eat at the same
/// time and no circular wait can form.
pub struct LunchTable {
    /// Seat states, guarded by one mutex so grant checks are atomic.
    states:  Mutex<Vec<SeatState>>,
    /// One closed semaphore per seat, opened when both spoons are granted.
    spoons:  Vec<Semaphore>,
    /// Bounds how many seats may order at the counter at once.
    waiter:  Semaphore,
    /// Refills left in the pot; the first round of servings is already
    /// deducted.
    pot:     AtomicUsize,
    /// Portions eaten per seat.
    tallies: Vec<AtomicUsize>,
    /// Portions eaten across all seats.
    total:   AtomicUsize,
}

impl LunchTable {
    /// Lays the table for a validated configuration.
    pub fn new(config: &LunchConfig) -> Self {
        let seats = config.seats;
        Self {
            states:  Mutex::new(vec![SeatState::Discussing; seats]),
            spoons:  (0..seats).map(|_| Semaphore::new(0)).collect(),
            waiter:  Semaphore::new(config.waiter_slots),
            pot:     AtomicUsize::new(config.portions.saturating_sub(seats)),
            tallies: (0..seats).map(|_| AtomicUsize::new(0)).collect(),
            total:   AtomicUsize::new(0),
        }
    }

    /// Number of seats at the table.
    pub fn seats(&self) -> usize {
        self.spoons.len()
    }

    /// The seat to the left, wrapping around the table.
    fn left(&self, seat: usize) -> usize {
        (seat + self.seats() - 1) % self.seats()
    }

    /// The seat to the right, wrapping around the table.
    fn right(&self, seat: usize) -> usize {
        (seat + 1) % self.seats()
    }

    /// Grants `seat` its spoons if it is hungry and neither neighbor is
    /// eating. Callers must hold the state lock.
    fn grant_if_possible(&self, states: &mut [SeatState], seat: usize) {
        if states[seat] == SeatState::Hungry
            && states[self.left(seat)] != SeatState::Eating
            && states[self.right(seat)] != SeatState::Eating
        {
            states[seat] = SeatState::Eating;
            self.spoons[seat].add_permits(1);
        }
    }

    /// Registers hunger and waits until both spoons are granted, then
    /// tallies the portion about to be eaten.
    pub async fn pick_up_spoons(&self, seat: usize) -> Result<()> {
        {
            let mut states = self.states.lock().expect("seat states poisoned");
            states[seat] = SeatState::Hungry;
            self.grant_if_possible(&mut states, seat);
        }

        let permit = self.spoons[seat]
            .acquire()
            .await
            .with_context(|| format!("spoon semaphore for seat {seat} closed"))?;
        permit.forget();

        self.tallies[seat].fetch_add(1, Ordering::Relaxed);
        self.total.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Puts both spoons back and wakes whichever neighbor was waiting on
    /// them.
    pub fn put_down_spoons(&self, seat: usize) {
        let mut states = self.states.lock().expect("seat states poisoned");
        states[seat] = SeatState::Discussing;
        self.grant_if_possible(&mut states, self.left(seat));
        self.grant_if_possible(&mut states, self.right(seat));
    }

    /// Orders one refill at the serving counter. Returns `false` once the
    /// pot is empty, which ends the caller's lunch.
    pub async fn order_refill(&self) -> Result<bool> {
        let _slot = self
            .waiter
            .acquire()
            .await
            .context("waiter semaphore closed")?;

        // CAS loop so only one order can claim each remaining refill.
        loop {
            let left = self.pot.load(Ordering::Acquire);
            if left == 0 {
                return Ok(false);
            }
            if self
                .pot
                .compare_exchange(left, left - 1, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                return Ok(true);
            }
        }
    }

    /// Refills still left in the pot.
    pub fn leftover(&self) -> usize {
        self.pot.load(Ordering::Acquire)
    }

    /// Portions eaten so far by each seat, in seat order.
    pub fn tallies(&self) -> Vec<usize> {
        self.tallies
            .iter()
            .map(|tally| tally.load(Ordering::Relaxed))
            .collect()
    }

    /// Portions eaten so far across all seats.
    pub fn total_eaten(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small laid table for arbitration tests.
    fn table(seats: usize, portions: usize) -> LunchTable {
        let config = LunchConfig::builder().seats(seats).portions(portions).build();
        LunchTable::new(&config)
    }

    #[test]
    fn neighbors_wrap_around_the_table() {
        let table = table(5, 10);
        assert_eq!(table.left(0), 4);
        assert_eq!(table.right(4), 0);
        assert_eq!(table.left(3), 2);
        assert_eq!(table.right(3), 4);
    }

    #[tokio::test]
    async fn a_lone_hungry_seat_is_granted_immediately() {
        let table = table(5, 10);
        table.pick_up_spoons(2).await.expect("grant");
        assert_eq!(table.tallies(), vec![0, 0, 1, 0, 0]);
        assert_eq!(table.total_eaten(), 1);
    }

    #[tokio::test]
    async fn adjacent_seats_never_eat_together() {
        let table = table(5, 10);
        table.pick_up_spoons(1).await.expect("grant");

        {
            let mut states = table.states.lock().expect("seat states poisoned");
            states[2] = SeatState::Hungry;
            table.grant_if_possible(&mut states, 2);
            assert_eq!(states[2], SeatState::Hungry, "seat 2 must wait for seat 1");
        }

        table.put_down_spoons(1);
        let states = table.states.lock().expect("seat states poisoned");
        assert_eq!(states[2], SeatState::Eating, "released spoons pass to seat 2");
    }

    #[tokio::test]
    async fn the_pot_drains_to_zero_and_stays_there() {
        let table = table(2, 5);
        for _ in 0..3 {
            assert!(table.order_refill().await.expect("order"));
        }
        assert!(!table.order_refill().await.expect("order"));
        assert!(!table.order_refill().await.expect("order"));
        assert_eq!(table.leftover(), 0);
    }
}
