//! Core types for lotledger
//!
//! This crate provides the fundamental types used throughout the lotledger
//! project:
//!
//! - [`Lot`] - A batch of identically priced units added in one operation
//! - [`Ledger`] - An append-only sequence of lots, consumed FIFO from the head
//! - [`Withdrawal`] - The outcome of a FIFO reduction
//!
//! # Example
//!
//! ```
//! use lotledger_core::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.add(3, 100);
//! ledger.add(2, 200);
//!
//! // Drains all of the first lot and one unit of the second.
//! let withdrawal = ledger.withdraw(4);
//! assert_eq!(withdrawal.total_price, 500);
//! assert_eq!(ledger.remaining_units(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ledger;
pub mod lot;

pub use ledger::{Ledger, Withdrawal};
pub use lot::Lot;
