//! Elementwise arithmetic for microplate data
//!
//! Operations implement a single scalar method of [`BinaryOperation`] or
//! [`UnaryOperation`]; the [`BinaryContext`] and [`UnaryContext`] extension
//! traits apply them to wells, well sets, plates and stacks.
//!
//! # Example
//!
//! ```rust
//! use microflex_core::{BigDecimal, MathContext, Policy, Well};
//! use microflex_math::{Addition, BinaryContext};
//!
//! let a = Well::with_data(0, 1, [1, 2, 3].map(BigDecimal::from));
//! let b = Well::with_data(0, 1, [10, 20].map(BigDecimal::from));
//! let ctx = MathContext::default();
//!
//! let standard = Addition.wells(&a, &b, Policy::Standard, None, &ctx)?;
//! assert_eq!(standard, [11, 22, 3].map(BigDecimal::from));
//!
//! let strict = Addition.wells(&a, &b, Policy::Strict, None, &ctx)?;
//! assert_eq!(strict, [11, 22].map(BigDecimal::from));
//! # Ok::<(), microflex_core::Error>(())
//! ```

pub mod binary;
pub mod traits;
pub mod unary;

mod fanout;

// Operations
pub mod absolute;
pub mod addition;
pub mod decrement;
pub mod division;
pub mod increment;
pub mod modulus;
pub mod multiplication;
pub mod negate;
pub mod subtraction;

pub use binary::BinaryContext;
pub use traits::{BinaryOperation, UnaryOperation};
pub use unary::UnaryContext;

pub use absolute::Absolute;
pub use addition::Addition;
pub use decrement::Decrement;
pub use division::Division;
pub use increment::Increment;
pub use modulus::Modulus;
pub use multiplication::Multiplication;
pub use negate::Negate;
pub use subtraction::Subtraction;
