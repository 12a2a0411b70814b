//! Arithmetic mean

use crate::sum::total;
use crate::traits::{DescriptiveStatistic, WeightedStatistic};
use microflex_core::{BigDecimal, Error, MathContext, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl DescriptiveStatistic for Mean {
    type Output = BigDecimal;

    fn name(&self) -> &str {
        "mean"
    }

    fn calculate(&self, values: &[BigDecimal], ctx: &MathContext) -> Result<BigDecimal> {
        if values.is_empty() {
            return Err(Error::empty_input(self.name()));
        }
        Ok(ctx.round(average(values)))
    }
}

impl WeightedStatistic for Mean {}

/// Unrounded mean of a non-empty slice
pub(crate) fn average(values: &[BigDecimal]) -> BigDecimal {
    total(values) / BigDecimal::from(values.len() as u64)
}
