//! FIFO consumption ledger CLI.
//!
//! This crate provides the `lotledger` binary: it replays a line-oriented
//! stream of add/withdraw queries against a [`lotledger_core::Ledger`] and
//! prints each withdrawal's total price on its own line, in query order.
//!
//! # Example Usage
//!
//! ```bash
//! lotledger queries.txt
//! lotledger < queries.txt
//! lotledger queries.txt -o totals.txt
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
