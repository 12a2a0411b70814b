//! Rebuild containers from a per-well transform
//!
//! Results keep the source container's shape: set labels, plate labels,
//! dimensions and groups, and stack labels are carried over.

use microflex_core::{BigDecimal, Plate, Result, Stack, Well, WellSet};
use tracing::trace;

pub(crate) fn map_set<F>(set: &WellSet, mut f: F) -> Result<WellSet>
where
    F: FnMut(&Well) -> Result<Vec<BigDecimal>>,
{
    let mut result = WellSet::with_label(set.label());
    for well in set {
        let data = f(well)?;
        trace!(well = %well.index(), values = data.len(), "mapped well");
        result.add(Well::with_data(well.row(), well.column(), data));
    }
    Ok(result)
}

pub(crate) fn map_plate<F>(plate: &Plate, f: F) -> Result<Plate>
where
    F: FnMut(&Well) -> Result<Vec<BigDecimal>>,
{
    plate.with_data(map_set(plate.data_set(), f)?)
}

pub(crate) fn map_stack<F>(stack: &Stack, mut f: F) -> Result<Stack>
where
    F: FnMut(&Well) -> Result<Vec<BigDecimal>>,
{
    let mut result = stack.empty_like();
    for plate in stack {
        result.add(map_plate(plate, &mut f)?)?;
    }
    Ok(result)
}
