//! Absolute value of every value

use crate::traits::UnaryOperation;
use microflex_core::BigDecimal;

#[derive(Debug, Clone, Copy, Default)]
pub struct Absolute;

impl UnaryOperation for Absolute {
    fn name(&self) -> &str {
        "absolute"
    }

    fn apply(&self, value: &BigDecimal) -> BigDecimal {
        value.abs()
    }
}
