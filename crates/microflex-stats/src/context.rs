//! Container fan-out for descriptive statistics
//!
//! Per-well entry points (`well`, `set`, `plate`) run the statistic once per
//! well and key the results by a clone of the well. Aggregated entry points
//! pool the values of every well in iteration order and run the statistic once
//! per container. Multi-container results pair each container with its result
//! in input order, so containers that compare equal still get their own entry.
//!
//! A window is checked against every well it touches before anything is
//! computed; a well shorter than `begin + length` fails the whole call with
//! [`Error::InvalidArgument`] instead of being skipped.

use crate::traits::{DescriptiveStatistic, WeightedStatistic};
use crate::weighted::apply_weights;
use microflex_core::{
    validate, BigDecimal, Error, MathContext, Plate, Result, Stack, Well, WellSet, Window,
};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Plain statistics over wells, sets, plates and stacks
pub trait StatisticContext: DescriptiveStatistic {
    fn well(&self, well: &Well, window: Option<Window>, ctx: &MathContext) -> Result<Self::Output> {
        match window {
            Some(window) => self.calculate_range(well.data(), window, ctx),
            None => self.calculate(well.data(), ctx),
        }
    }

    /// One result per well of `set`
    fn set(
        &self,
        set: &WellSet,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<BTreeMap<Well, Self::Output>> {
        per_well(set, window, |well| self.well(well, window, ctx))
    }

    /// One result per well of `plate`
    fn plate(
        &self,
        plate: &Plate,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<BTreeMap<Well, Self::Output>> {
        self.set(plate.data_set(), window, ctx)
    }

    /// One result over the pooled values of every well in `set`
    fn set_aggregated(
        &self,
        set: &WellSet,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Self::Output> {
        let values = pool(self.name(), set, window, None)?;
        self.calculate(&values, ctx)
    }

    fn plate_aggregated(
        &self,
        plate: &Plate,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Self::Output> {
        self.set_aggregated(plate.data_set(), window, ctx)
    }

    /// One pooled result per set, paired with a clone of the set
    fn sets_aggregated(
        &self,
        sets: &[WellSet],
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<(WellSet, Self::Output)>> {
        check_window(sets.iter().flat_map(WellSet::iter), window)?;
        sets.iter()
            .map(|set| Ok((set.clone(), self.set_aggregated(set, window, ctx)?)))
            .collect()
    }

    /// One pooled result per plate, paired with a clone of the plate
    fn plates_aggregated(
        &self,
        plates: &[Plate],
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<(Plate, Self::Output)>> {
        check_window(plates.iter().flat_map(Plate::iter), window)?;
        plates
            .iter()
            .map(|plate| Ok((plate.clone(), self.plate_aggregated(plate, window, ctx)?)))
            .collect()
    }

    /// [`plates_aggregated`](Self::plates_aggregated) over the plates of `stack`
    fn stack_aggregated(
        &self,
        stack: &Stack,
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<(Plate, Self::Output)>> {
        debug!(statistic = self.name(), stack = %stack.label(), plates = stack.len(), "aggregating stack");
        self.plates_aggregated(stack.plates(), window, ctx)
    }
}

impl<T: DescriptiveStatistic + ?Sized> StatisticContext for T {}

/// Weighted statistics over wells, sets, plates and stacks
///
/// Weights are positional within each well (or within each well's window)
/// and are applied before pooling.
pub trait WeightedStatisticContext: WeightedStatistic {
    fn well_weighted(
        &self,
        well: &Well,
        weights: &[f64],
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Self::Output> {
        match window {
            Some(window) => self.calculate_weighted_range(well.data(), weights, window, ctx),
            None => self.calculate_weighted(well.data(), weights, ctx),
        }
    }

    fn set_weighted(
        &self,
        set: &WellSet,
        weights: &[f64],
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<BTreeMap<Well, Self::Output>> {
        per_well(set, window, |well| self.well_weighted(well, weights, window, ctx))
    }

    fn plate_weighted(
        &self,
        plate: &Plate,
        weights: &[f64],
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<BTreeMap<Well, Self::Output>> {
        self.set_weighted(plate.data_set(), weights, window, ctx)
    }

    fn set_aggregated_weighted(
        &self,
        set: &WellSet,
        weights: &[f64],
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Self::Output> {
        let values = pool(self.name(), set, window, Some(weights))?;
        self.calculate(&values, ctx)
    }

    fn plate_aggregated_weighted(
        &self,
        plate: &Plate,
        weights: &[f64],
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Self::Output> {
        self.set_aggregated_weighted(plate.data_set(), weights, window, ctx)
    }

    fn sets_aggregated_weighted(
        &self,
        sets: &[WellSet],
        weights: &[f64],
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<(WellSet, Self::Output)>> {
        check_window(sets.iter().flat_map(WellSet::iter), window)?;
        sets.iter()
            .map(|set| {
                let output = self.set_aggregated_weighted(set, weights, window, ctx)?;
                Ok((set.clone(), output))
            })
            .collect()
    }

    fn plates_aggregated_weighted(
        &self,
        plates: &[Plate],
        weights: &[f64],
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<(Plate, Self::Output)>> {
        check_window(plates.iter().flat_map(Plate::iter), window)?;
        plates
            .iter()
            .map(|plate| {
                let output = self.plate_aggregated_weighted(plate, weights, window, ctx)?;
                Ok((plate.clone(), output))
            })
            .collect()
    }

    fn stack_aggregated_weighted(
        &self,
        stack: &Stack,
        weights: &[f64],
        window: Option<Window>,
        ctx: &MathContext,
    ) -> Result<Vec<(Plate, Self::Output)>> {
        self.plates_aggregated_weighted(stack.plates(), weights, window, ctx)
    }
}

impl<T: WeightedStatistic + ?Sized> WeightedStatisticContext for T {}

fn check_window<'a, I>(wells: I, window: Option<Window>) -> Result<()>
where
    I: IntoIterator<Item = &'a Well>,
{
    match window {
        Some(window) => validate::require_window(wells, window).map_err(Error::into_argument),
        None => Ok(()),
    }
}

fn per_well<O, F>(set: &WellSet, window: Option<Window>, mut f: F) -> Result<BTreeMap<Well, O>>
where
    F: FnMut(&Well) -> Result<O>,
{
    check_window(set, window)?;
    set.iter()
        .map(|well| Ok((well.clone(), f(well)?)))
        .collect()
}

#[instrument(level = "debug", skip(set, window, weights), fields(wells = set.len(), weighted = weights.is_some()))]
fn pool(
    statistic: &str,
    set: &WellSet,
    window: Option<Window>,
    weights: Option<&[f64]>,
) -> Result<Vec<BigDecimal>> {
    check_window(set, window)?;

    let mut pooled = Vec::new();
    for well in set {
        let data = match window {
            Some(window) => window.apply(well.data()),
            None => well.data(),
        };
        match weights {
            Some(weights) => pooled.extend(apply_weights(data, weights)?),
            None => pooled.extend_from_slice(data),
        }
    }

    debug!(values = pooled.len(), "pooled well data");
    Ok(pooled)
}
