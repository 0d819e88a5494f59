//! Lot type representing one batch of identically priced units.
//!
//! A [`Lot`] is created by a single add operation and holds the unit price
//! fixed at creation together with the quantity not yet consumed. The owning
//! [`Ledger`](crate::Ledger) only ever decreases the quantity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A batch of units sharing one unit price.
///
/// The quantity starts at whatever the add operation supplied and decreases
/// monotonically as the ledger consumes the lot. Once it reaches zero the lot
/// is exhausted and never participates in a withdrawal again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lot {
    /// Price per unit, fixed when the lot is appended.
    pub unit_price: u64,
    /// Units not yet consumed.
    pub quantity: u64,
}

impl Lot {
    /// Create a new lot.
    #[must_use]
    pub const fn new(quantity: u64, unit_price: u64) -> Self {
        Self {
            unit_price,
            quantity,
        }
    }

    /// Check whether every unit of this lot has been consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.quantity == 0
    }

    /// Total price of `units` drawn from this lot.
    ///
    /// Widens to `u128` so the product cannot overflow for any pair of
    /// `u64` inputs.
    #[must_use]
    pub const fn price_of(&self, units: u64) -> u128 {
        self.unit_price as u128 * units as u128
    }

    /// Total price of everything left in this lot.
    #[must_use]
    pub const fn remaining_value(&self) -> u128 {
        self.price_of(self.quantity)
    }
}

impl fmt::Display for Lot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.quantity, self.unit_price)
    }
}
