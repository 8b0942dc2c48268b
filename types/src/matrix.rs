//! In-memory data carried through the round trip.
//!
//! Neither type validates its shape. A ragged [`Matrix`] or a short
//! [`RowSums`] is representable on purpose: the contract between caller and
//! callee is the `num_rows` that travels alongside, and a broken contract
//! shows up as an [`RoundTripError::OutOfRange`] at the first bad index.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Axis, NumRows, RoundTripError};

/// Row-major integer matrix, mutated in place by `encode`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix(Vec<Vec<i64>>);

impl Matrix {
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Self {
        Self(rows)
    }

    /// The fixture matrix: an N×N grid where cell `(row, col)` holds `N*row + col`.
    pub fn sample(num_rows: NumRows) -> Result<Self, RoundTripError> {
        let n = i64::try_from(num_rows.get())
            .map_err(|_| RoundTripError::overflow("building the sample matrix"))?;
        let rows = (0..n)
            .map(|row| {
                let start = n
                    .checked_mul(row)
                    .ok_or(RoundTripError::overflow("building the sample matrix"))?;
                (0..n)
                    .map(|col| {
                        start
                            .checked_add(col)
                            .ok_or(RoundTripError::overflow("building the sample matrix"))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(rows))
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.0
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.0.len()
    }

    /// True when every row is as long as the matrix is tall.
    #[must_use]
    pub fn is_square(&self) -> bool {
        let n = self.0.len();
        self.0.iter().all(|row| row.len() == n)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<i64, RoundTripError> {
        let cells = self
            .0
            .get(row)
            .ok_or_else(|| RoundTripError::out_of_range(Axis::Row, row, self.0.len()))?;
        cells
            .get(col)
            .copied()
            .ok_or_else(|| RoundTripError::out_of_range(Axis::Column, col, cells.len()))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut i64, RoundTripError> {
        let height = self.0.len();
        let cells = self
            .0
            .get_mut(row)
            .ok_or_else(|| RoundTripError::out_of_range(Axis::Row, row, height))?;
        let width = cells.len();
        cells
            .get_mut(col)
            .ok_or_else(|| RoundTripError::out_of_range(Axis::Column, col, width))
    }

    /// Sum of each row, covering every row present regardless of `num_rows`.
    pub fn row_sums(&self) -> Result<RowSums, RoundTripError> {
        self.0
            .iter()
            .map(|row| {
                row.iter().try_fold(0i64, |acc, &cell| {
                    acc.checked_add(cell)
                        .ok_or(RoundTripError::overflow("summing a matrix row"))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(RowSums)
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<i64>> {
        self.0
    }
}

impl From<Vec<Vec<i64>>> for Matrix {
    fn from(rows: Vec<Vec<i64>>) -> Self {
        Self(rows)
    }
}

/// Renders as nested bracketed lists: `[[0, 1, 2], [3, 4, 5]]`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_list(f, row)?;
        }
        f.write_str("]")
    }
}

/// One integer per matrix row, mutated in place by `decode`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowSums(Vec<i64>);

impl RowSums {
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<i64, RoundTripError> {
        self.0
            .get(index)
            .copied()
            .ok_or_else(|| RoundTripError::out_of_range(Axis::Element, index, self.0.len()))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut i64, RoundTripError> {
        let len = self.0.len();
        self.0
            .get_mut(index)
            .ok_or_else(|| RoundTripError::out_of_range(Axis::Element, index, len))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl From<Vec<i64>> for RowSums {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl fmt::Display for RowSums {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, values: &[i64]) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}
