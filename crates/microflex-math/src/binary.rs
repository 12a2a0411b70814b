//! Container-level composition for binary operations
//!
//! [`BinaryContext`] is implemented for every [`BinaryOperation`], so each
//! concrete operation gets the same well, set, plate and stack semantics:
//!
//! - wells combine through the list primitive chosen by [`Policy`] and window
//! - sets combine wells matched by identity; in standard mode the unmatched
//!   wells of both sets are copied into the result, in strict mode dropped
//! - plates must share dimensions; standard keeps the union of both plates'
//!   groups, strict the groups present on both
//! - stacks combine plates by position; standard appends the longer stack's
//!   remaining plates
//!
//! With a window, every value outside `[begin, begin + length)` is left out of
//! the result, including those of copied wells and plates. Windows are checked
//! against every participating well before anything is computed.

use crate::fanout::{map_plate, map_set, map_stack};
use crate::traits::BinaryOperation;
use microflex_core::{
    validate, BigDecimal, MathContext, Plate, Policy, Result, Stack, Well, WellSet, Window,
};
use tracing::{debug, instrument, trace};

/// Container fan-out for [`BinaryOperation`]s
pub trait BinaryContext: BinaryOperation {
    /// Combine the data of two wells
    fn wells(
        &self,
        well1: &Well,
        well2: &Well,
        policy: Policy,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        self.calculate_with(well1.data(), well2.data(), policy, window, ctx)
    }

    /// Combine every value of a well with `constant`
    fn wells_constant(
        &self,
        well: &Well,
        constant: &BigDecimal,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        match window {
            Some(window) => {
                window.check(well.len())?;
                self.calculate_constant(window.apply(well.data()), constant, ctx)
            }
            None => self.calculate_constant(well.data(), constant, ctx),
        }
    }

    /// Combine a well with a value slice
    fn wells_values(
        &self,
        well: &Well,
        values: &[BigDecimal],
        policy: Policy,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<BigDecimal>> {
        self.calculate_values_with(well.data(), values, policy, window, ctx)
    }

    fn sets(
        &self,
        set1: &WellSet,
        set2: &WellSet,
        policy: Policy,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<WellSet> {
        combine_sets(self, set1, set2, policy, window, ctx)
    }

    fn sets_constant(
        &self,
        set: &WellSet,
        constant: &BigDecimal,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<WellSet> {
        require_all(set, window)?;
        map_set(set, |well| self.wells_constant(well, constant, window, ctx))
    }

    fn sets_values(
        &self,
        set: &WellSet,
        values: &[BigDecimal],
        policy: Policy,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<WellSet> {
        require_all(set, window)?;
        map_set(set, |well| self.wells_values(well, values, policy, window, ctx))
    }

    /// Combine two plates of equal dimensions
    fn plates(
        &self,
        plate1: &Plate,
        plate2: &Plate,
        policy: Policy,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Plate> {
        combine_plates(self, plate1, plate2, policy, window, ctx)
    }

    fn plates_constant(
        &self,
        plate: &Plate,
        constant: &BigDecimal,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Plate> {
        require_all(plate, window)?;
        map_plate(plate, |well| self.wells_constant(well, constant, window, ctx))
    }

    fn plates_values(
        &self,
        plate: &Plate,
        values: &[BigDecimal],
        policy: Policy,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Plate> {
        require_all(plate, window)?;
        map_plate(plate, |well| self.wells_values(well, values, policy, window, ctx))
    }

    /// Combine two stacks plate by plate
    fn stacks(
        &self,
        stack1: &Stack,
        stack2: &Stack,
        policy: Policy,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Stack> {
        combine_stacks(self, stack1, stack2, policy, window, ctx)
    }

    fn stacks_constant(
        &self,
        stack: &Stack,
        constant: &BigDecimal,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Stack> {
        require_all(stack.iter().flat_map(Plate::iter), window)?;
        map_stack(stack, |well| self.wells_constant(well, constant, window, ctx))
    }

    fn stacks_values(
        &self,
        stack: &Stack,
        values: &[BigDecimal],
        policy: Policy,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Stack> {
        require_all(stack.iter().flat_map(Plate::iter), window)?;
        map_stack(stack, |well| self.wells_values(well, values, policy, window, ctx))
    }
}

impl<T: BinaryOperation + ?Sized> BinaryContext for T {}

fn require_all<'a, I>(wells: I, window: Option<Window>) -> Result<()>
where
    I: IntoIterator<Item = &'a Well>,
{
    match window {
        Some(window) => validate::require_window(wells, window),
        None => Ok(()),
    }
}

fn copy_well(well: &Well, window: Option<Window>) -> Result<Well> {
    match window {
        Some(window) => well.slice(window),
        None => Ok(well.clone()),
    }
}

fn copy_plate(plate: &Plate, window: Option<Window>) -> Result<Plate> {
    match window {
        Some(window) => plate.slice(window),
        None => Ok(plate.clone()),
    }
}

#[instrument(level = "debug", skip_all, fields(op = op.name(), policy = policy.name()))]
fn combine_sets<O>(
    op: &O,
    set1: &WellSet,
    set2: &WellSet,
    policy: Policy,
    window: Option<Window>,
    ctx: &MathContext,
) -> Result<WellSet>
where
    O: BinaryOperation + ?Sized,
{
    let matched: Vec<(&Well, &Well)> = set1
        .iter()
        .filter_map(|well1| {
            set2.get(well1.row(), well1.column())
                .map(|well2| (well1, well2))
        })
        .collect();
    let excluded: Vec<&Well> = set1
        .iter()
        .filter(|well| !set2.contains(well))
        .chain(set2.iter().filter(|well| !set1.contains(well)))
        .collect();

    debug!(
        matched = matched.len(),
        excluded = excluded.len(),
        "combining well sets"
    );

    require_all(matched.iter().flat_map(|&(well1, well2)| [well1, well2]), window)?;
    if policy == Policy::Standard {
        require_all(excluded.iter().copied(), window)?;
    }

    let mut result = WellSet::with_label(set1.label());
    for (well1, well2) in matched {
        let data = op.calculate_with(well1.data(), well2.data(), policy, window, ctx)?;
        trace!(well = %well1.index(), values = data.len(), "combined well");
        result.add(Well::with_data(well1.row(), well1.column(), data));
    }

    if policy == Policy::Standard {
        for well in excluded {
            result.add(copy_well(well, window)?);
        }
    }

    Ok(result)
}

#[instrument(level = "debug", skip_all, fields(op = op.name(), policy = policy.name()))]
fn combine_plates<O>(
    op: &O,
    plate1: &Plate,
    plate2: &Plate,
    policy: Policy,
    window: Option<Window>,
    ctx: &MathContext,
) -> Result<Plate>
where
    O: BinaryOperation + ?Sized,
{
    plate1.check_dimensions(plate2)?;

    let data = combine_sets(op, plate1.data_set(), plate2.data_set(), policy, window, ctx)?;
    let mut result = plate1.with_data(data)?;

    match policy {
        Policy::Standard => {
            for group in plate2.groups() {
                result.add_group(group.clone());
            }
        }
        Policy::Strict => result.retain_groups(|group| plate2.group(group.label()) == Some(group)),
    }

    Ok(result)
}

#[instrument(level = "debug", skip_all, fields(op = op.name(), policy = policy.name()))]
fn combine_stacks<O>(
    op: &O,
    stack1: &Stack,
    stack2: &Stack,
    policy: Policy,
    window: Option<Window>,
    ctx: &MathContext,
) -> Result<Stack>
where
    O: BinaryOperation + ?Sized,
{
    validate::require_dimensions(
        (stack1.rows(), stack1.columns()),
        (stack2.rows(), stack2.columns()),
    )?;

    let shared = stack1.len().min(stack2.len());
    let longer = if stack1.len() >= stack2.len() { stack1 } else { stack2 };
    let leftover: &[Plate] = match policy {
        Policy::Standard => &longer.plates()[shared..],
        Policy::Strict => &[],
    };

    debug!(
        combined = shared,
        leftover = leftover.len(),
        "combining stacks"
    );

    require_all(leftover.iter().flat_map(Plate::iter), window)?;

    let mut result = stack1.empty_like();
    for (plate1, plate2) in stack1.iter().zip(stack2) {
        result.add(combine_plates(op, plate1, plate2, policy, window, ctx)?)?;
    }
    for plate in leftover {
        result.add(copy_plate(plate, window)?)?;
    }

    Ok(result)
}
