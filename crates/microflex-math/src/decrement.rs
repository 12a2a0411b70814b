//! Subtract one from every value

use crate::traits::UnaryOperation;
use microflex_core::BigDecimal;
use num_traits::One;

#[derive(Debug, Clone, Copy, Default)]
pub struct Decrement;

impl UnaryOperation for Decrement {
    fn name(&self) -> &str {
        "decrement"
    }

    fn apply(&self, value: &BigDecimal) -> BigDecimal {
        value - &BigDecimal::one()
    }
}
