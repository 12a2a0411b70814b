//! Capability traits for descriptive statistics

use crate::weighted::apply_weights;
use microflex_core::{BigDecimal, Error, MathContext, Result, Window};

/// A statistic computed from a flat sequence of values
///
/// `Output` is a single [`BigDecimal`] for most statistics and a
/// `Vec<BigDecimal>` for list-shaped ones such as [`Mode`](crate::Mode).
pub trait DescriptiveStatistic {
    type Output;

    /// Get the name of this statistic
    fn name(&self) -> &str;

    fn calculate(&self, values: &[BigDecimal], ctx: &MathContext) -> Result<Self::Output>;

    /// [`calculate`](Self::calculate) over `values[begin..begin + length]`
    ///
    /// A window reaching past the data fails with [`Error::InvalidArgument`].
    fn calculate_range(
        &self,
        values: &[BigDecimal],
        window: Window,
        ctx: &MathContext,
    ) -> Result<Self::Output> {
        window.check(values.len()).map_err(Error::into_argument)?;
        self.calculate(window.apply(values), ctx)
    }
}

/// A statistic that can run on positionally weighted values
///
/// Every value is multiplied by the weight at the same position before the
/// plain primitive runs. For ranged calls positions count from the window
/// start, so `weights[0]` scales `values[begin]`.
pub trait WeightedStatistic: DescriptiveStatistic {
    fn calculate_weighted(
        &self,
        values: &[BigDecimal],
        weights: &[f64],
        ctx: &MathContext,
    ) -> Result<Self::Output> {
        let weighted = apply_weights(values, weights)?;
        self.calculate(&weighted, ctx)
    }

    fn calculate_weighted_range(
        &self,
        values: &[BigDecimal],
        weights: &[f64],
        window: Window,
        ctx: &MathContext,
    ) -> Result<Self::Output> {
        window.check(values.len()).map_err(Error::into_argument)?;
        self.calculate_weighted(window.apply(values), weights, ctx)
    }
}
