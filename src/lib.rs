//! Microplate data containers with elementwise arithmetic and descriptive statistics
//!
//! This umbrella crate re-exports the workspace members:
//!
//! - [`microflex_core`]: wells, well sets, plates, stacks, [`MathContext`](microflex_core::MathContext) and errors
//! - [`microflex_math`]: binary and unary operations applied across every container level
//! - [`microflex_stats`]: plain and weighted descriptive statistics
//!
//! # Example
//!
//! ```rust
//! use microflex::prelude::*;
//!
//! let ctx = MathContext::default();
//! let mut plate1 = Plate::standard(96, "baseline")?;
//! let mut plate2 = Plate::standard(96, "treated")?;
//! plate1.add_well(Well::with_data(0, 1, [1, 2].map(BigDecimal::from)))?;
//! plate2.add_well(Well::with_data(0, 1, [3, 4].map(BigDecimal::from)))?;
//! plate2.add_well(Well::with_data(0, 2, [5].map(BigDecimal::from)))?;
//!
//! let sum = Addition.plates(&plate1, &plate2, Policy::Standard, None, &ctx)?;
//! assert_eq!(sum.len(), 2);
//!
//! let mean = Mean.plate_aggregated(&sum, None, &ctx)?;
//! assert_eq!(mean, BigDecimal::from(5));
//! # Ok::<(), microflex::prelude::Error>(())
//! ```

pub use microflex_core;
pub use microflex_math;
pub use microflex_stats;

/// Commonly used types and traits
pub mod prelude {
    pub use microflex_core::{
        BigDecimal, Error, MathContext, Plate, Policy, Result, RoundingMode, Stack, Well,
        WellGroup, WellSet, Window,
    };
    pub use microflex_math::{
        Absolute, Addition, BinaryContext, BinaryOperation, Decrement, Division, Increment,
        Modulus, Multiplication, Negate, Subtraction, UnaryContext, UnaryOperation,
    };
    pub use microflex_stats::{
        DescriptiveStatistic, Max, Mean, Min, Mode, StandardDeviation, StatisticContext, Sum,
        Variance, WeightedStatistic, WeightedStatisticContext,
    };
}
