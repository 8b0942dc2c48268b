use std::fmt;
use std::ops::Range;

/// The dimension handed along with every matrix and row-sum sequence.
///
/// This is a promise from the caller, not a measurement: nothing checks it
/// against the data until an index actually falls outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct NumRows(usize);

impl NumRows {
    /// Dimension of the fixture's sample run.
    pub const SAMPLE: NumRows = NumRows(3);

    #[must_use]
    pub const fn new(rows: usize) -> Self {
        Self(rows)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Index range `0..num_rows`.
    #[must_use]
    pub fn indices(self) -> Range<usize> {
        0..self.0
    }
}

impl Default for NumRows {
    fn default() -> Self {
        Self::SAMPLE
    }
}

impl fmt::Display for NumRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
