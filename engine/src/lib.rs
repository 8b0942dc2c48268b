//! Round-trip engine for the mega fixture.
//!
//! Two components call each other synchronously on one thread:
//!
//! - [`Driver`] builds the sample matrix, prints results, and implements
//!   [`Callbacks`].
//! - [`Transform`] doubles values, sums operands, and implements [`Codec`].
//!
//! The binary wires them together; tests can swap either side for a double.

mod codec;
mod config;
mod driver;
mod transform;

pub use codec::{Callbacks, Codec};
pub use config::{
    CONFIG_PATH_ENV, ConfigError, MAX_NUM_ROWS, MAX_PRECISION, MegaConfig, RoundConfig,
    SolveConfig, config_path,
};
pub use driver::{DEFAULT_PRECISION, Driver, Report, RunSettings, SAMPLE_OPERANDS};
pub use transform::Transform;

// Re-export the data types so downstream crates need only one dependency.
pub use mega_types::{Axis, Matrix, NumRows, Number, Operand, RoundTripError, RowSums};
