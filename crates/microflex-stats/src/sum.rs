//! Total of all values

use crate::traits::{DescriptiveStatistic, WeightedStatistic};
use microflex_core::{BigDecimal, MathContext, Result};
use num_traits::Zero;

/// Sum of the values; zero for no values
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl DescriptiveStatistic for Sum {
    type Output = BigDecimal;

    fn name(&self) -> &str {
        "sum"
    }

    fn calculate(&self, values: &[BigDecimal], ctx: &MathContext) -> Result<BigDecimal> {
        Ok(ctx.round(total(values)))
    }
}

impl WeightedStatistic for Sum {}

/// Exact sum
pub(crate) fn total(values: &[BigDecimal]) -> BigDecimal {
    values
        .iter()
        .fold(BigDecimal::zero(), |acc, value| acc + value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sum() {
        let ctx = MathContext::default();
        let values: Vec<_> = ["0.1", "0.2", "-0.3", "10"]
            .iter()
            .map(|text| BigDecimal::from_str(text).unwrap())
            .collect();
        assert_eq!(Sum.calculate(&values, &ctx).unwrap(), BigDecimal::from(10));
        assert_eq!(Sum.calculate(&[], &ctx).unwrap(), BigDecimal::zero());
    }
}
