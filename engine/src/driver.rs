//! The fixture's harness side.
//!
//! A [`Driver`] owns two writers: `out` receives the values the round trip
//! produces (the `solve` line, then one line per decoded sum) and `diag`
//! receives the human-readable matrix dumps. Everything written is mirrored
//! into a [`Report`] so callers can inspect a run without parsing text.

use std::io::{self, Stderr, Stdout, Write};

use mega_types::{Matrix, NumRows, Number, Operand, RoundTripError, RowSums};
use tracing::{debug, info};

use crate::codec::{Callbacks, Codec};

/// Operands the fixture feeds to `solve`: a short, an int, a long, a float
/// and a double.
pub const SAMPLE_OPERANDS: [Operand; 5] = [
    Operand::Short(1),
    Operand::Int(2),
    Operand::Long(-3),
    Operand::Float(4.25),
    Operand::Double(5.75),
];

/// Decimal places used for the `solve` line unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 2;

/// Everything that parameterizes one round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub num_rows: NumRows,
    pub operands: [Operand; 5],
    pub precision: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            num_rows: NumRows::SAMPLE,
            operands: SAMPLE_OPERANDS,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// What a round trip produced, in the order it was produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Result of `solve`.
    pub solved: Option<Number>,
    /// Lines written to `out`.
    pub lines: Vec<String>,
    /// Matrix dumps written to `diag`.
    pub dumps: Vec<String>,
    /// Matrix as it arrived in `send`.
    pub encoded: Option<Matrix>,
    /// Sequence as it arrived in `output`.
    pub decoded: Option<RowSums>,
}

impl Report {
    /// Values handed to `output`, or an empty slice if it was never reached.
    #[must_use]
    pub fn decoded_values(&self) -> &[i64] {
        self.decoded.as_ref().map(RowSums::as_slice).unwrap_or(&[])
    }
}

pub struct Driver<O, E> {
    settings: RunSettings,
    out: O,
    diag: E,
    report: Report,
}

impl Driver<Stdout, Stderr> {
    /// Driver wired to the process's stdout and stderr.
    #[must_use]
    pub fn stdio(settings: RunSettings) -> Self {
        Self::new(settings, io::stdout(), io::stderr())
    }
}

impl Driver<Vec<u8>, Vec<u8>> {
    /// Driver writing into in-memory buffers.
    #[must_use]
    pub fn capture(settings: RunSettings) -> Self {
        Self::new(settings, Vec::new(), Vec::new())
    }
}

impl<O: Write, E: Write> Driver<O, E> {
    pub fn new(settings: RunSettings, out: O, diag: E) -> Self {
        Self {
            settings,
            out,
            diag,
            report: Report::default(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    #[must_use]
    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_parts(self) -> (O, E, Report) {
        (self.out, self.diag, self.report)
    }

    /// One full demonstration: print `solve`, build the sample matrix, dump
    /// it, and start the encode chain.
    pub fn run(&mut self, codec: &dyn Codec) -> Result<(), RoundTripError> {
        let num_rows = self.settings.num_rows;
        info!(%num_rows, "starting round trip");

        let [a, b, c, d, e] = self.settings.operands;
        let solved = codec.solve(a, b, c, d, e)?;
        self.report.solved = Some(solved);
        let line = solved.format_fixed(self.settings.precision);
        self.print(&line)?;

        let mut matrix = Matrix::sample(num_rows)?;
        self.dump(&matrix)?;
        codec.encode(num_rows, &mut matrix, self)?;

        self.out.flush()?;
        self.diag.flush()?;
        info!(lines = self.report.lines.len(), "round trip finished");
        Ok(())
    }

    fn print(&mut self, line: &str) -> Result<(), RoundTripError> {
        writeln!(self.out, "{line}")?;
        self.report.lines.push(line.to_owned());
        Ok(())
    }

    fn dump(&mut self, matrix: &Matrix) -> Result<(), RoundTripError> {
        let rendered = matrix.to_string();
        writeln!(self.diag, "{rendered}")?;
        self.report.dumps.push(rendered);
        Ok(())
    }
}

impl<O: Write, E: Write> Callbacks for Driver<O, E> {
    fn send(
        &mut self,
        codec: &dyn Codec,
        num_rows: NumRows,
        encoded: &mut Matrix,
    ) -> Result<(), RoundTripError> {
        debug!(%num_rows, "send");
        self.dump(encoded)?;
        self.report.encoded = Some(encoded.clone());
        let mut summed = encoded.row_sums()?;
        codec.decode(num_rows, &mut summed, self)
    }

    fn output(&mut self, num_rows: NumRows, solution: &RowSums) -> Result<(), RoundTripError> {
        debug!(%num_rows, "output");
        self.report.decoded = Some(solution.clone());
        for i in num_rows.indices() {
            let value = solution.get(i)?;
            self.print(&value.to_string())?;
        }
        Ok(())
    }
}
