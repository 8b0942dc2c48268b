use mega_types::{Matrix, NumRows, Number, Operand, RoundTripError, RowSums};
use tracing::debug;

use crate::codec::{Callbacks, Codec};

/// The fixture's contestant code: doubles, sums, and calls back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transform;

fn double(value: &mut i64, op: &'static str) -> Result<(), RoundTripError> {
    *value = value
        .checked_mul(2)
        .ok_or(RoundTripError::overflow(op))?;
    Ok(())
}

impl Codec for Transform {
    fn encode(
        &self,
        num_rows: NumRows,
        matrix: &mut Matrix,
        driver: &mut dyn Callbacks,
    ) -> Result<(), RoundTripError> {
        debug!(%num_rows, "encode");
        for i in num_rows.indices() {
            for j in num_rows.indices() {
                double(matrix.cell_mut(i, j)?, "doubling a matrix cell")?;
            }
        }
        driver.send(self, num_rows, matrix)
    }

    fn decode(
        &self,
        num_rows: NumRows,
        encoded: &mut RowSums,
        driver: &mut dyn Callbacks,
    ) -> Result<(), RoundTripError> {
        debug!(%num_rows, "decode");
        for i in num_rows.indices() {
            double(encoded.get_mut(i)?, "doubling a row sum")?;
        }
        driver.output(num_rows, encoded)
    }

    fn solve(
        &self,
        a: Operand,
        b: Operand,
        c: Operand,
        d: Operand,
        e: Operand,
    ) -> Result<Number, RoundTripError> {
        [b, c, d, e]
            .into_iter()
            .try_fold(a.to_number(), |acc, operand| {
                acc.checked_add(operand.to_number())
            })
            .ok_or(RoundTripError::overflow("summing solve operands"))
    }
}
