//! Capability traits for elementwise operations
//!
//! An operation implements one scalar method; the list-level primitives are
//! provided and may be overridden. Container fan-out lives in the
//! [`BinaryContext`](crate::BinaryContext) and
//! [`UnaryContext`](crate::UnaryContext) extension traits.

use microflex_core::{BigDecimal, MathContext, Policy, Result, Window};

/// A two-operand operation applied element by element
pub trait BinaryOperation {
    /// Get the name of this operation
    fn name(&self) -> &str;

    /// Combine two scalars under `ctx`
    fn apply(&self, left: &BigDecimal, right: &BigDecimal, ctx: &MathContext)
        -> Result<BigDecimal>;

    /// Combine the shared prefix and append the longer list's tail unchanged
    fn calculate(
        &self,
        list1: &[BigDecimal],
        list2: &[BigDecimal],
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        zip_apply(self, list1, list2, ctx, true)
    }

    /// Combine the shared prefix only
    fn calculate_strict(
        &self,
        list1: &[BigDecimal],
        list2: &[BigDecimal],
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        zip_apply(self, list1, list2, ctx, false)
    }

    /// [`calculate`](Self::calculate) over the window of each list
    ///
    /// The window must end within the longer list.
    fn calculate_range(
        &self,
        list1: &[BigDecimal],
        list2: &[BigDecimal],
        window: Window,
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        window.check(list1.len().max(list2.len()))?;
        self.calculate(window.apply(list1), window.apply(list2), ctx)
    }

    /// [`calculate_strict`](Self::calculate_strict) over the window of each list
    fn calculate_strict_range(
        &self,
        list1: &[BigDecimal],
        list2: &[BigDecimal],
        window: Window,
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        window.check(list1.len().max(list2.len()))?;
        self.calculate_strict(window.apply(list1), window.apply(list2), ctx)
    }

    /// Combine every value with the same constant
    fn calculate_constant(
        &self,
        list: &[BigDecimal],
        constant: &BigDecimal,
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        list.iter()
            .map(|value| self.apply(value, constant, ctx))
            .collect()
    }

    fn calculate_values(
        &self,
        list: &[BigDecimal],
        values: &[BigDecimal],
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        self.calculate(list, values, ctx)
    }

    fn calculate_values_strict(
        &self,
        list: &[BigDecimal],
        values: &[BigDecimal],
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        self.calculate_strict(list, values, ctx)
    }

    /// Windowed [`calculate_values`](Self::calculate_values); the window must end within `list`
    fn calculate_values_range(
        &self,
        list: &[BigDecimal],
        values: &[BigDecimal],
        window: Window,
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        window.check(list.len())?;
        self.calculate_values(window.apply(list), window.apply(values), ctx)
    }

    fn calculate_values_strict_range(
        &self,
        list: &[BigDecimal],
        values: &[BigDecimal],
        window: Window,
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        window.check(list.len())?;
        self.calculate_values_strict(window.apply(list), window.apply(values), ctx)
    }

    /// Dispatch to the list primitive selected by `policy` and `window`
    fn calculate_with(
        &self,
        list1: &[BigDecimal],
        list2: &[BigDecimal],
        policy: Policy,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        match (policy, window) {
            (Policy::Standard, None) => self.calculate(list1, list2, ctx),
            (Policy::Strict, None) => self.calculate_strict(list1, list2, ctx),
            (Policy::Standard, Some(window)) => self.calculate_range(list1, list2, window, ctx),
            (Policy::Strict, Some(window)) => {
                self.calculate_strict_range(list1, list2, window, ctx)
            }
        }
    }

    /// Dispatch to the value-slice primitive selected by `policy` and `window`
    fn calculate_values_with(
        &self,
        list: &[BigDecimal],
        values: &[BigDecimal],
        policy: Policy,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        match (policy, window) {
            (Policy::Standard, None) => self.calculate_values(list, values, ctx),
            (Policy::Strict, None) => self.calculate_values_strict(list, values, ctx),
            (Policy::Standard, Some(window)) => {
                self.calculate_values_range(list, values, window, ctx)
            }
            (Policy::Strict, Some(window)) => {
                self.calculate_values_strict_range(list, values, window, ctx)
            }
        }
    }
}

/// A one-operand transform applied element by element
pub trait UnaryOperation {
    /// Get the name of this operation
    fn name(&self) -> &str;

    fn apply(&self, value: &BigDecimal) -> BigDecimal;

    fn calculate(&self, list: &[BigDecimal]) -> Vec<BigDecimal> {
        list.iter().map(|value| self.apply(value)).collect()
    }

    /// Transform only the window, which must lie inside `list`
    fn calculate_range(&self, list: &[BigDecimal], window: Window) -> Result<Vec<BigDecimal>> {
        window.check(list.len())?;
        Ok(self.calculate(window.apply(list)))
    }
}

fn zip_apply<O>(
    op: &O,
    list1: &[BigDecimal],
    list2: &[BigDecimal],
    ctx: &MathContext,
    keep_tail: bool,
) -> Result<Vec<BigDecimal>>
where
    O: BinaryOperation + ?Sized,
{
    let shared = list1.len().min(list2.len());
    let longer = if list1.len() >= list2.len() { list1 } else { list2 };

    let mut result = Vec::with_capacity(if keep_tail { longer.len() } else { shared });
    for (left, right) in list1.iter().zip(list2) {
        result.push(op.apply(left, right, ctx)?);
    }
    if keep_tail {
        result.extend_from_slice(&longer[shared..]);
    }
    Ok(result)
}
