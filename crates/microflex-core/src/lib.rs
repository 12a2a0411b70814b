//! Core types for microplate data
//!
//! This crate provides the container hierarchy shared by the arithmetic and
//! statistics crates, together with the error type and the value-typed
//! configuration every operation takes.
//!
//! # Containers
//!
//! 1. [`Well`] - a `(row, column)` identity holding ordered decimal values
//! 2. [`WellSet`] - wells unique by identity, iterated in row-major order
//! 3. [`Plate`] - a fixed `rows x columns` grid owning a well set and named [`WellGroup`]s
//! 4. [`Stack`] - an ordered list of plates sharing one extent
//!
//! # Example
//!
//! ```rust
//! use microflex_core::{BigDecimal, Plate, Well};
//!
//! let mut plate = Plate::standard(96, "assay")?;
//! plate.add_well(Well::with_data(0, 1, [BigDecimal::from(1), BigDecimal::from(2)]))?;
//!
//! let well = plate.get(0, 1).unwrap();
//! assert_eq!(well.index(), "A1");
//! assert_eq!(well.len(), 2);
//! # Ok::<(), microflex_core::Error>(())
//! ```

pub mod context;
pub mod error;
pub mod group;
pub mod json;
pub mod plate;
pub mod stack;
pub mod validate;
pub mod well;
pub mod well_set;

// Re-export core types
pub use context::{MathContext, Policy, RoundingMode, Window};
pub use error::{Error, Result};
pub use group::WellGroup;
pub use plate::{Plate, STANDARD_FORMATS};
pub use stack::Stack;
pub use well::Well;
pub use well_set::WellSet;

pub use bigdecimal::BigDecimal;
