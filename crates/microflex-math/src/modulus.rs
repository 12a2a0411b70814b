//! Elementwise remainder

use crate::traits::BinaryOperation;
use microflex_core::{BigDecimal, Error, MathContext, Result};
use num_traits::Zero;

/// `left % right` with the sign of the dividend
///
/// A zero divisor fails with [`Error::Arithmetic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Modulus;

impl BinaryOperation for Modulus {
    fn name(&self) -> &str {
        "modulus"
    }

    fn apply(
        &self,
        left: &BigDecimal,
        right: &BigDecimal,
        ctx: &MathContext,
    ) -> Result<BigDecimal> {
        if right.is_zero() {
            return Err(Error::division_by_zero(self.name()));
        }
        Ok(ctx.round(left % right))
    }
}
