//! Add one to every value

use crate::traits::UnaryOperation;
use microflex_core::BigDecimal;
use num_traits::One;

#[derive(Debug, Clone, Copy, Default)]
pub struct Increment;

impl UnaryOperation for Increment {
    fn name(&self) -> &str {
        "increment"
    }

    fn apply(&self, value: &BigDecimal) -> BigDecimal {
        value + &BigDecimal::one()
    }
}
