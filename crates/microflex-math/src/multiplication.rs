//! Elementwise multiplication

use crate::traits::BinaryOperation;
use microflex_core::{BigDecimal, MathContext, Result};

/// `left * right`, rounded to the context precision
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplication;

impl BinaryOperation for Multiplication {
    fn name(&self) -> &str {
        "multiplication"
    }

    fn apply(
        &self,
        left: &BigDecimal,
        right: &BigDecimal,
        ctx: &MathContext,
    ) -> Result<BigDecimal> {
        Ok(ctx.round(left * right))
    }
}
