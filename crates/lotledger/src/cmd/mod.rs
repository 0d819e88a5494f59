//! Command implementations for the CLI.
//!
//! The module contains the full implementation of each command, invoked by a
//! thin wrapper binary.

pub mod replay;
