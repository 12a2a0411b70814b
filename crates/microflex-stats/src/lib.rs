//! Descriptive statistics for microplate data
//!
//! A statistic implements [`DescriptiveStatistic::calculate`] over a flat
//! value slice. The [`StatisticContext`] extension trait applies it per well
//! or to the pooled values of sets, plates and stacks; statistics that also
//! implement [`WeightedStatistic`] get the same entry points through
//! [`WeightedStatisticContext`].
//!
//! # Example
//!
//! ```rust
//! use microflex_core::{BigDecimal, MathContext, Well};
//! use microflex_stats::{Max, WeightedStatisticContext};
//!
//! let well = Well::with_data(0, 1, [2, 4, 6].map(BigDecimal::from));
//! let ctx = MathContext::default();
//!
//! let max = Max.well_weighted(&well, &[1.0, 2.0, 3.0], None, &ctx)?;
//! assert_eq!(max, BigDecimal::from(18));
//! # Ok::<(), microflex_core::Error>(())
//! ```

pub mod context;
pub mod traits;
pub mod weighted;

// Statistics
pub mod deviation;
pub mod max;
pub mod mean;
pub mod min;
pub mod mode;
pub mod sum;

pub use context::{StatisticContext, WeightedStatisticContext};
pub use traits::{DescriptiveStatistic, WeightedStatistic};
pub use weighted::apply_weights;

pub use deviation::{StandardDeviation, Variance};
pub use max::Max;
pub use mean::Mean;
pub use min::Min;
pub use mode::Mode;
pub use sum::Sum;
