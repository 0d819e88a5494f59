//! Ledger type: an append-only sequence of lots consumed FIFO.
//!
//! A [`Ledger`] owns an ordered arena of [`Lot`]s plus a head index marking
//! the first lot that still has units. Lots are appended at the tail and
//! consumed strictly in append order. Exhausted lots stay in the arena and
//! the head only moves forward, so the total work across all withdrawals is
//! linear in the number of lots, regardless of how many withdrawals run.

use serde::{Deserialize, Serialize};

use crate::Lot;

/// Outcome of a FIFO withdrawal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Withdrawal {
    /// Accumulated price of the units drawn, priced per source lot.
    pub total_price: u128,
    /// Units actually drawn. Less than the requested amount when the ledger
    /// ran out of units; the shortfall is not an error.
    pub units: u64,
}

impl Withdrawal {
    /// Check whether a request for `requested` units was only partially
    /// satisfied.
    #[must_use]
    pub const fn is_short(&self, requested: u64) -> bool {
        self.units < requested
    }
}

/// An append-only sequence of lots with FIFO consumption.
///
/// Lots are processed strictly in the order they were appended: a lot is
/// never touched until every lot before it is exhausted, and an exhausted
/// lot is never revisited.
///
/// # Examples
///
/// ```
/// use lotledger_core::Ledger;
///
/// let mut ledger = Ledger::new();
/// ledger.add(5, 10);
///
/// assert_eq!(ledger.withdraw(2).total_price, 20);
/// assert_eq!(ledger.withdraw(2).total_price, 20);
///
/// // Only one unit left; over-asking truncates silently.
/// let last = ledger.withdraw(2);
/// assert_eq!(last.total_price, 10);
/// assert_eq!(last.units, 1);
/// assert!(ledger.is_exhausted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    lots: Vec<Lot>,
    head: usize,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lot of `quantity` units at `unit_price` each.
    ///
    /// Always succeeds. A zero-quantity lot is legal; the next withdrawal
    /// skips it while advancing the head.
    pub fn add(&mut self, quantity: u64, unit_price: u64) {
        self.lots.push(Lot::new(quantity, unit_price));
    }

    /// Withdraw up to `requested` units, consuming lots in append order.
    ///
    /// A head lot no larger than the amount still needed is drained whole
    /// and the head advances past it; a larger head lot is reduced in place
    /// and the scan stops. When the ledger holds fewer units than requested
    /// the scan stops at the tail and the returned [`Withdrawal`] reflects
    /// only what was actually drawn.
    pub fn withdraw(&mut self, requested: u64) -> Withdrawal {
        let mut needed = requested;
        let mut total_price: u128 = 0;

        while needed > 0 && self.head < self.lots.len() {
            let lot = &mut self.lots[self.head];
            if lot.quantity <= needed {
                total_price += lot.remaining_value();
                needed -= lot.quantity;
                lot.quantity = 0;
                self.head += 1;
            } else {
                total_price += lot.price_of(needed);
                lot.quantity -= needed;
                needed = 0;
            }
        }

        Withdrawal {
            total_price,
            units: requested - needed,
        }
    }

    /// Index of the first lot the head has not passed. Never decreases.
    #[must_use]
    pub const fn head(&self) -> usize {
        self.head
    }

    /// All lots ever appended, exhausted ones included, oldest first.
    #[must_use]
    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    /// Lots the head has not yet passed, oldest first.
    ///
    /// The first entry may be partially consumed. A zero-quantity lot that
    /// no withdrawal has skipped yet also shows up here.
    #[must_use]
    pub fn pending_lots(&self) -> &[Lot] {
        &self.lots[self.head..]
    }

    /// Number of lots ever appended, exhausted ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lots.len()
    }

    /// Check whether no lot was ever appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Total units remaining across all lots.
    ///
    /// Widens to `u128` so the sum cannot overflow however many
    /// `u64`-sized lots are pending.
    #[must_use]
    pub fn remaining_units(&self) -> u128 {
        self.pending_lots()
            .iter()
            .map(|lot| u128::from(lot.quantity))
            .sum()
    }

    /// Check whether no units remain to withdraw.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pending_lots().iter().all(Lot::is_exhausted)
    }
}
