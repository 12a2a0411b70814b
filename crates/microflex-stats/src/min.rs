//! Smallest value

use crate::traits::{DescriptiveStatistic, WeightedStatistic};
use microflex_core::{BigDecimal, Error, MathContext, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl DescriptiveStatistic for Min {
    type Output = BigDecimal;

    fn name(&self) -> &str {
        "min"
    }

    fn calculate(&self, values: &[BigDecimal], ctx: &MathContext) -> Result<BigDecimal> {
        values
            .iter()
            .min()
            .map(|min| ctx.round(min.clone()))
            .ok_or_else(|| Error::empty_input(self.name()))
    }
}

impl WeightedStatistic for Min {}

#[cfg(test)]
mod tests {
    use super::*;
    use microflex_core::{RoundingMode, Window};
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    #[test]
    fn test_min_rounds() {
        let ctx = MathContext::new(2, RoundingMode::HalfUp);
        let values = [dec("1.25"), dec("-0.456"), dec("3")];
        assert_eq!(Min.calculate(&values, &ctx).unwrap(), dec("-0.46"));
    }

    #[test]
    fn test_range_outside_data() {
        let ctx = MathContext::default();
        assert!(matches!(
            Min.calculate_range(&[dec("1")], Window::new(1, 1), &ctx),
            Err(Error::InvalidArgument(_))
        ));
    }
}
