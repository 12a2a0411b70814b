//! Elementwise division

use crate::traits::BinaryOperation;
use microflex_core::{BigDecimal, Error, MathContext, Result};
use num_traits::Zero;

/// `left / right`, rounded to the context precision
///
/// A zero divisor fails with [`Error::Arithmetic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Division;

impl BinaryOperation for Division {
    fn name(&self) -> &str {
        "division"
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
        Ok(ctx.round(left / right))
    }
}
