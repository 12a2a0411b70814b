//! Flip the sign of every value

use crate::traits::UnaryOperation;
use microflex_core::BigDecimal;

#[derive(Debug, Clone, Copy, Default)]
pub struct Negate;

impl UnaryOperation for Negate {
    fn name(&self) -> &str {
        "negate"
    }

    fn apply(&self, value: &BigDecimal) -> BigDecimal {
        -value.clone()
    }
}
