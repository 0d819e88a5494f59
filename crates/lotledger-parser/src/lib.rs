//! Query-stream parsing for lotledger.
//!
//! Turns line-oriented query text into typed [`Query`] values. The format is
//! deliberately forgiving: a numeric token that fails to parse reads as zero,
//! a missing token reads as zero, and an opcode other than `1` is treated as
//! a withdrawal. Only genuine I/O failures surface as errors.
//!
//! The [`QueryReader`] is an explicit value owned by the caller; nothing in
//! this crate holds global input state.
//!
//! # Example
//!
//! ```
//! use lotledger_parser::{Query, QueryReader};
//! use std::io::Cursor;
//!
//! let mut reader = QueryReader::new(Cursor::new("2\n1 3 100\n2 4\n"));
//! assert_eq!(reader.read_count().unwrap(), 2);
//! assert_eq!(
//!     reader.next_query().unwrap(),
//!     Some(Query::Add { quantity: 3, unit_price: 100 })
//! );
//! assert_eq!(
//!     reader.next_query().unwrap(),
//!     Some(Query::Withdraw { requested: 4 })
//! );
//! assert_eq!(reader.next_query().unwrap(), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::io::BufRead;
use thiserror::Error;

/// Error reading the query stream.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The underlying reader failed.
    #[error("failed to read query stream")]
    Io(#[from] std::io::Error),
}

/// One query from the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Append a lot to the ledger.
    Add {
        /// Units in the new lot.
        quantity: u64,
        /// Price per unit.
        unit_price: u64,
    },
    /// Withdraw units FIFO and report their total price.
    Withdraw {
        /// Units to withdraw.
        requested: u64,
    },
}

/// Parse an integer token, reading absence or failure as zero.
fn lenient_u64(token: Option<&str>) -> u64 {
    token.and_then(|t| t.parse().ok()).unwrap_or(0)
}

impl Query {
    /// Parse one query line.
    ///
    /// Opcode `1` is an add (`1 <quantity> <unit_price>`); any other opcode,
    /// including a malformed one, is a withdrawal (`2 <requested>`).
    #[must_use]
    pub fn parse_line(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let opcode = lenient_u64(tokens.next());
        if opcode == 1 {
            Self::Add {
                quantity: lenient_u64(tokens.next()),
                unit_price: lenient_u64(tokens.next()),
            }
        } else {
            Self::Withdraw {
                requested: lenient_u64(tokens.next()),
            }
        }
    }
}

/// A buffered line source yielding typed queries.
///
/// Owns its reader; construct one per input stream and drive it explicitly.
/// The line buffer is reused across reads.
#[derive(Debug)]
pub struct QueryReader<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> QueryReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    fn next_line(&mut self) -> Result<Option<&str>, ScanError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim_end_matches(['\n', '\r'])))
    }

    /// Read the leading query-count line.
    ///
    /// A missing or malformed count reads as zero.
    pub fn read_count(&mut self) -> Result<u64, ScanError> {
        Ok(self
            .next_line()?
            .map_or(0, |line| lenient_u64(line.split_whitespace().next())))
    }

    /// Read the next query, or `None` at end of input.
    pub fn next_query(&mut self) -> Result<Option<Query>, ScanError> {
        Ok(self.next_line()?.map(Query::parse_line))
    }
}
