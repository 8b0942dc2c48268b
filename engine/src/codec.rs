//! The two halves of the round trip and how they reach each other.
//!
//! ```text
//! Driver::run -> Codec::encode -> Callbacks::send -> Codec::decode -> Callbacks::output
//! ```
//!
//! Neither side stores a reference to the other. Each call hands over the
//! peer it should call back into, so the cycle only exists on the stack.

use mega_types::{Matrix, NumRows, Number, Operand, RoundTripError, RowSums};

/// The transform side: numeric work plus the hand-back to the driver.
pub trait Codec {
    /// Double every cell in the `num_rows`×`num_rows` square, then call
    /// [`Callbacks::send`] with the mutated matrix.
    fn encode(
        &self,
        num_rows: NumRows,
        matrix: &mut Matrix,
        driver: &mut dyn Callbacks,
    ) -> Result<(), RoundTripError>;

    /// Double the first `num_rows` sums, then call [`Callbacks::output`].
    ///
    /// This does not invert [`Codec::encode`]; it works on row sums, not on
    /// the matrix.
    fn decode(
        &self,
        num_rows: NumRows,
        encoded: &mut RowSums,
        driver: &mut dyn Callbacks,
    ) -> Result<(), RoundTripError>;

    /// Sum of five operands with numeric promotion. No side effects.
    fn solve(
        &self,
        a: Operand,
        b: Operand,
        c: Operand,
        d: Operand,
        e: Operand,
    ) -> Result<Number, RoundTripError>;
}

/// The driver side: receives intermediate and final results.
pub trait Callbacks {
    /// Called by [`Codec::encode`] once every cell has been doubled.
    fn send(
        &mut self,
        codec: &dyn Codec,
        num_rows: NumRows,
        encoded: &mut Matrix,
    ) -> Result<(), RoundTripError>;

    /// Called by [`Codec::decode`] with the final sequence.
    fn output(&mut self, num_rows: NumRows, solution: &RowSums) -> Result<(), RoundTripError>;
}
