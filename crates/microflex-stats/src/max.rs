//! Largest value

use crate::traits::{DescriptiveStatistic, WeightedStatistic};
use microflex_core::{BigDecimal, Error, MathContext, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl DescriptiveStatistic for Max {
    type Output = BigDecimal;

    fn name(&self) -> &str {
        "max"
    }

    fn calculate(&self, values: &[BigDecimal], ctx: &MathContext) -> Result<BigDecimal> {
        values
            .iter()
            .max()
            .map(|max| ctx.round(max.clone()))
            .ok_or_else(|| Error::empty_input(self.name()))
    }
}

impl WeightedStatistic for Max {}
