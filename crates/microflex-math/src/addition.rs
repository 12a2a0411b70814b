//! Elementwise addition

use crate::traits::BinaryOperation;
use microflex_core::{BigDecimal, MathContext, Result};

/// `left + right`, rounded to the context precision
#[derive(Debug, Clone, Copy, Default)]
pub struct Addition;

impl BinaryOperation for Addition {
    fn name(&self) -> &str {
        "addition"
    }

    fn apply(
        &self,
        left: &BigDecimal,
        right: &BigDecimal,
        ctx: &MathContext,
    ) -> Result<BigDecimal> {
        Ok(ctx.round(left + right))
    }
}
