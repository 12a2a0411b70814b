//! Configuration types shared by every operation
//!
//! [`MathContext`] carries the precision and rounding applied to computed
//! values, [`Policy`] selects how operands of unequal length are combined and
//! [`Window`] restricts an operation to a sub-range of every data sequence.

use crate::{Error, Result};
use bigdecimal::BigDecimal;
pub use bigdecimal::RoundingMode;
use std::num::NonZeroU64;

/// Precision and rounding applied to every computed value
///
/// A precision of zero means unlimited: results are returned exactly, except
/// for quotients and square roots which fall back to the decimal backend's
/// default of 100 significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathContext {
    precision: u64,
    rounding: RoundingMode,
}

impl MathContext {
    /// No rounding
    pub const UNLIMITED: Self = Self::new(0, RoundingMode::HalfUp);
    /// 7 significant digits, half-even
    pub const DECIMAL32: Self = Self::new(7, RoundingMode::HalfEven);
    /// 16 significant digits, half-even
    pub const DECIMAL64: Self = Self::new(16, RoundingMode::HalfEven);
    /// 34 significant digits, half-even
    pub const DECIMAL128: Self = Self::new(34, RoundingMode::HalfEven);

    pub const fn new(precision: u64, rounding: RoundingMode) -> Self {
        Self {
            precision,
            rounding,
        }
    }

    /// Significant digits kept, zero when unlimited
    pub fn precision(&self) -> u64 {
        self.precision
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    pub fn with_precision(mut self, precision: u64) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Round `value` to this context's precision
    ///
    /// Values already within the precision keep their scale; rounding never
    /// adds trailing zeros.
    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        match NonZeroU64::new(self.precision) {
            Some(precision) if value.digits() > precision.get() => {
                value.with_precision_round(precision, self.rounding)
            }
            _ => value,
        }
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DECIMAL128
    }
}

/// How two operands of different lengths are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Combine the shared prefix and pass the longer operand's tail through
    #[default]
    Standard,
    /// Combine the shared prefix and drop everything else
    Strict,
}

impl Policy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Strict => "strict",
        }
    }
}

/// A `[begin, begin + length)` sub-range of a data sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    begin: usize,
    length: usize,
}

impl Window {
    pub const fn new(begin: usize, length: usize) -> Self {
        Self { begin, length }
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Exclusive end index, failing when `begin + length` overflows
    pub fn end(&self) -> Result<usize> {
        self.begin.checked_add(self.length).ok_or_else(|| {
            Error::InvalidIndex(format!(
                "window begin {} plus length {} overflows",
                self.begin, self.length
            ))
        })
    }

    /// Fail unless the whole window lies inside `len` values
    pub fn check(&self, len: usize) -> Result<()> {
        if self.end()? > len {
            return Err(Error::window(*self, len));
        }
        Ok(())
    }

    /// The part of `values` covered by the window, clamped to its length
    pub fn apply<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        let begin = self.begin.min(values.len());
        let end = self.begin.saturating_add(self.length).min(values.len());
        &values[begin..end]
    }
}
