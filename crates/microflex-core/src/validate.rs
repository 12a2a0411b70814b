//! Precondition checks shared by the operation engines
//!
//! Every check runs before any value is computed, so a failing call never
//! produces a partial result.

use crate::{Error, Result, Well, Window};

/// Fail unless `well` holds at least `window.end()` values
pub fn require_well(well: &Well, window: Window) -> Result<()> {
    let end = window.end()?;
    if end > well.len() {
        return Err(Error::InvalidIndex(format!(
            "window [{}, {}) exceeds well {} of length {}",
            window.begin(),
            end,
            well.index(),
            well.len()
        )));
    }
    Ok(())
}

/// [`require_well`] for every well yielded by `wells`
pub fn require_window<'a, I>(wells: I, window: Window) -> Result<()>
where
    I: IntoIterator<Item = &'a Well>,
{
    wells
        .into_iter()
        .try_for_each(|well| require_well(well, window))
}

/// Fail unless two `(rows, columns)` extents agree
pub fn require_dimensions(expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch {
            expected_rows: expected.0,
            expected_columns: expected.1,
            rows: actual.0,
            columns: actual.1,
        });
    }
    Ok(())
}
