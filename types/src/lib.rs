//! Core domain types for the mega round trip.
//!
//! This crate contains pure data types with no IO and minimal dependencies.
//! The engine and the binary both build on it.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod error;
mod matrix;
mod number;
mod rows;

pub use error::{Axis, RoundTripError};
pub use matrix::{Matrix, RowSums};
pub use number::{Number, Operand};
pub use rows::NumRows;
