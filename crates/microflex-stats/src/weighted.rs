//! Positional weighting of decimal values

use microflex_core::{BigDecimal, Error, Result};
use num_traits::FromPrimitive;

/// Multiply `values[i]` by `weights[i]`
///
/// Extra weights are ignored. Fewer weights than values, or a weight that is
/// NaN or infinite, fails with [`Error::InvalidArgument`].
pub fn apply_weights(values: &[BigDecimal], weights: &[f64]) -> Result<Vec<BigDecimal>> {
    if weights.len() < values.len() {
        return Err(Error::InvalidArgument(format!(
            "{} weights supplied for {} values",
            weights.len(),
            values.len()
        )));
    }

    values
        .iter()
        .zip(weights)
        .map(|(value, &weight)| {
            let weight = BigDecimal::from_f64(weight).ok_or_else(|| {
                Error::InvalidArgument(format!("weight {weight} is not a finite number"))
            })?;
            Ok(value * &weight)
        })
        .collect()
}
