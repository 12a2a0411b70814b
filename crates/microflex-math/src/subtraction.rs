//! Elementwise subtraction

use crate::traits::BinaryOperation;
use microflex_core::{BigDecimal, MathContext, Result};

/// `left - right`, rounded to the context precision
#[derive(Debug, Clone, Copy, Default)]
pub struct Subtraction;

impl BinaryOperation for Subtraction {
    fn name(&self) -> &str {
        "subtraction"
    }

    fn apply(
        &self,
        left: &BigDecimal,
        right: &BigDecimal,
        ctx: &MathContext,
    ) -> Result<BigDecimal> {
        Ok(ctx.round(left - right))
    }
}
