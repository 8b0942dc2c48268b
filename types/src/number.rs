//! Mixed integer/fractional arithmetic for `solve`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of summing operands: stays integral until a fractional value joins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl Number {
    pub const MAX_FORMAT_PRECISION: usize = u16::MAX as usize;

    /// Add with numeric promotion. `None` only when two integers overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Number) -> Option<Number> {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => a.checked_add(b).map(Number::Integer),
            (a, b) => Some(Number::Real(a.as_f64() + b.as_f64())),
        }
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(value) => value as f64,
            Number::Real(value) => value,
        }
    }

    #[must_use]
    pub fn is_integral(self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Fixed-point rendering, e.g. `10.00` for `precision = 2`.
    ///
    /// `precision` is clamped to [`Number::MAX_FORMAT_PRECISION`], the widest
    /// precision `core::fmt` accepts.
    #[must_use]
    pub fn format_fixed(self, precision: usize) -> String {
        let precision = precision.min(Self::MAX_FORMAT_PRECISION);
        format!("{:.*}", precision, self.as_f64())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{value}"),
            Number::Real(value) => write!(f, "{value}"),
        }
    }
}

/// One argument to `solve`, tagged with the width it was supplied at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Operand {
    /// Widen to the common numeric representation.
    #[must_use]
    pub fn to_number(self) -> Number {
        match self {
            Operand::Short(v) => Number::Integer(i64::from(v)),
            Operand::Int(v) => Number::Integer(i64::from(v)),
            Operand::Long(v) => Number::Integer(v),
            Operand::Float(v) => Number::Real(f64::from(v)),
            Operand::Double(v) => Number::Real(v),
        }
    }
}

impl From<i16> for Operand {
    fn from(value: i16) -> Self {
        Operand::Short(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Int(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Long(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Float(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Double(value)
    }
}

impl From<Number> for Operand {
    fn from(value: Number) -> Self {
        match value {
            Number::Integer(v) => Operand::Long(v),
            Number::Real(v) => Operand::Double(v),
        }
    }
}
