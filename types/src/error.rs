use std::fmt;
use std::io;

use thiserror::Error;

/// Which dimension an out-of-range access happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Indexing the outer sequence of matrix rows.
    Row,
    /// Indexing the cells inside one matrix row.
    Column,
    /// Indexing a flat row-sum sequence.
    Element,
}

impl Axis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
            Axis::Element => "element",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure anywhere along the encode -> send -> decode -> output chain.
///
/// Every variant is fatal for the round trip: the error propagates back to the
/// entry point untouched, and whatever was mutated before the failure stays
/// mutated.
#[derive(Debug, Error)]
pub enum RoundTripError {
    /// `num_rows` promised more entries than the data actually holds.
    #[error("{axis} index {index} out of range for length {len}")]
    OutOfRange { axis: Axis, index: usize, len: usize },
    #[error("integer overflow while {op}")]
    Overflow { op: &'static str },
    #[error("failed to write round trip output")]
    Io(#[from] io::Error),
}

impl RoundTripError {
    #[must_use]
    pub const fn out_of_range(axis: Axis, index: usize, len: usize) -> Self {
        Self::OutOfRange { axis, index, len }
    }

    #[must_use]
    pub const fn overflow(op: &'static str) -> Self {
        Self::Overflow { op }
    }
}
