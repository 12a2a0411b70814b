//! Sample variance and standard deviation
//!
//! Both use the `n - 1` denominator and are zero for a single value. The
//! intermediate mean and sum of squares are kept unrounded; only the final
//! result is rounded to the context.

use crate::mean::average;
use crate::traits::{DescriptiveStatistic, WeightedStatistic};
use microflex_core::{BigDecimal, Error, MathContext, Result};
use num_traits::Zero;

#[derive(Debug, Clone, Copy, Default)]
pub struct Variance;

impl DescriptiveStatistic for Variance {
    type Output = BigDecimal;

    fn name(&self) -> &str {
        "variance"
    }

    fn calculate(&self, values: &[BigDecimal], ctx: &MathContext) -> Result<BigDecimal> {
        Ok(ctx.round(sample_variance(self.name(), values)?))
    }
}

impl WeightedStatistic for Variance {}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDeviation;

impl DescriptiveStatistic for StandardDeviation {
    type Output = BigDecimal;

    fn name(&self) -> &str {
        "standard deviation"
    }

    fn calculate(&self, values: &[BigDecimal], ctx: &MathContext) -> Result<BigDecimal> {
        let variance = sample_variance(self.name(), values)?;
        let deviation = variance.sqrt().ok_or_else(|| {
            Error::Arithmetic(format!("square root of {variance} is undefined"))
        })?;
        Ok(ctx.round(deviation))
    }
}

impl WeightedStatistic for StandardDeviation {}

fn sample_variance(statistic: &str, values: &[BigDecimal]) -> Result<BigDecimal> {
    match values.len() {
        0 => Err(Error::empty_input(statistic)),
        1 => Ok(BigDecimal::zero()),
        n => {
            let mean = average(values);
            let squares = values.iter().fold(BigDecimal::zero(), |acc, value| {
                let diff = value - &mean;
                acc + &diff * &diff
            });
            Ok(squares / BigDecimal::from((n - 1) as u64))
        }
    }
}
