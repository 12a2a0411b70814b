//! Most frequent values

use crate::traits::{DescriptiveStatistic, WeightedStatistic};
use microflex_core::{BigDecimal, MathContext, Result};
use std::collections::BTreeMap;

/// Every value sharing the highest frequency, in ascending order
///
/// Values compare numerically, so `1.0` and `1.00` count as the same value.
/// No values give an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mode;

impl DescriptiveStatistic for Mode {
    type Output = Vec<BigDecimal>;

    fn name(&self) -> &str {
        "mode"
    }

    fn calculate(&self, values: &[BigDecimal], ctx: &MathContext) -> Result<Vec<BigDecimal>> {
        let mut counts: BTreeMap<&BigDecimal, usize> = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_default() += 1;
        }

        let highest = counts.values().copied().max().unwrap_or(0);
        Ok(counts
            .into_iter()
            .filter(|&(_, count)| count == highest)
            .map(|(value, _)| ctx.round(value.clone()))
            .collect())
    }
}

impl WeightedStatistic for Mode {}
