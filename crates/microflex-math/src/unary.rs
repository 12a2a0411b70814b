//! Container-level fan-out for unary operations
//!
//! Plates keep their label, dimensions and groups; stacks transform each
//! plate independently and keep their label. A window must fit every well.

use crate::fanout::{map_plate, map_set, map_stack};
use crate::traits::UnaryOperation;
use microflex_core::{validate, BigDecimal, Plate, Result, Stack, Well, WellSet, Window};
use tracing::{debug, instrument};

/// Container fan-out for [`UnaryOperation`]s
pub trait UnaryContext: UnaryOperation {
    fn wells(&self, well: &Well, window: Option<Window>) -> Result<Vec<BigDecimal>> {
        match window {
            Some(window) => self.calculate_range(well.data(), window),
            None => Ok(self.calculate(well.data())),
        }
    }

    fn sets(&self, set: &WellSet, window: Option<Window>) -> Result<WellSet> {
        transform_set(self, set, window)
    }

    fn plates(&self, plate: &Plate, window: Option<Window>) -> Result<Plate> {
        require_all(plate, window)?;
        map_plate(plate, |well| self.wells(well, window))
    }

    fn stacks(&self, stack: &Stack, window: Option<Window>) -> Result<Stack> {
        debug!(plates = stack.len(), "transforming stack");
        require_all(stack.iter().flat_map(Plate::iter), window)?;
        map_stack(stack, |well| self.wells(well, window))
    }
}

impl<T: UnaryOperation + ?Sized> UnaryContext for T {}

fn require_all<'a, I>(wells: I, window: Option<Window>) -> Result<()>
where
    I: IntoIterator<Item = &'a Well>,
{
    window.map_or(Ok(()), |window| validate::require_window(wells, window))
}

#[instrument(level = "debug", skip_all, fields(op = op.name(), wells = set.len()))]
fn transform_set<O>(op: &O, set: &WellSet, window: Option<Window>) -> Result<WellSet>
where
    O: UnaryOperation + ?Sized,
{
    require_all(set, window)?;
    map_set(set, |well| op.wells(well, window))
}
