//! Statistical equivalence tests against statrs
//!
//! Aggregated results over a plate must match pooling every well's values in
//! iteration order and computing the statistic once with a reference
//! implementation.

mod common;

use common::*;
use microflex_core::{MathContext, Plate, Window};
use microflex_stats::*;
use statrs::statistics::Statistics;

fn pooled(plate: &Plate, window: Option<Window>) -> Vec<f64> {
    plate
        .iter()
        .flat_map(|well| match window {
            Some(window) => window.apply(well.data()),
            None => well.data(),
        })
        .map(to_f64)
        .collect()
}

#[test]
fn test_aggregated_matches_reference() {
    let ctx = MathContext::DECIMAL64;

    for seed in 0..5 {
        let mut rng = rng(seed);
        let plate = random_plate(&mut rng, 1, 20, "reference");
        let reference = pooled(&plate, None);

        let mean = Mean.set_aggregated(plate.data_set(), None, &ctx).unwrap();
        assert_relative_eq!(to_f64(&mean), reference.iter().mean(), epsilon = EPSILON);

        let variance = Variance.plate_aggregated(&plate, None, &ctx).unwrap();
        assert_relative_eq!(
            to_f64(&variance),
            reference.iter().variance(),
            max_relative = EPSILON
        );

        let deviation = StandardDeviation.plate_aggregated(&plate, None, &ctx).unwrap();
        assert_relative_eq!(
            to_f64(&deviation),
            reference.iter().std_dev(),
            max_relative = EPSILON
        );

        let max = Max.plate_aggregated(&plate, None, &ctx).unwrap();
        assert_relative_eq!(to_f64(&max), Statistics::max(reference.iter()));

        let min = Min.plate_aggregated(&plate, None, &ctx).unwrap();
        assert_relative_eq!(to_f64(&min), Statistics::min(reference.iter()));

        let sum = Sum.plate_aggregated(&plate, None, &ctx).unwrap();
        assert_relative_eq!(to_f64(&sum), reference.iter().sum::<f64>(), epsilon = 1e-6);
    }
}

#[test]
fn test_ranged_aggregate_matches_reference() {
    let ctx = MathContext::DECIMAL64;
    let mut rng = rng(42);
    let plate = random_plate(&mut rng, 10, 16, "ranged");
    let window = Window::new(3, 7);
    let reference = pooled(&plate, Some(window));

    let deviation = StandardDeviation
        .plate_aggregated(&plate, Some(window), &ctx)
        .unwrap();
    assert_relative_eq!(
        to_f64(&deviation),
        reference.iter().std_dev(),
        max_relative = EPSILON
    );
}

#[test]
fn test_per_well_matches_reference() {
    let ctx = MathContext::DECIMAL64;
    let mut rng = rng(7);
    let plate = random_plate(&mut rng, 2, 30, "per-well");

    let results = Variance.plate(&plate, None, &ctx).unwrap();
    assert_eq!(results.len(), 96);
    for (well, variance) in &results {
        let reference = to_f64s(plate.get(well.row(), well.column()).unwrap().data());
        assert_relative_eq!(
            to_f64(variance),
            reference.iter().variance(),
            max_relative = EPSILON
        );
    }
}

#[test]
fn test_weighted_matches_scaled_reference() {
    let ctx = MathContext::DECIMAL64;
    let mut rng = rng(99);
    let plate = random_plate(&mut rng, 5, 5, "weighted");
    let weights = [0.5, 1.0, 1.5, 2.0, 2.5];

    let scaled: Vec<f64> = plate
        .iter()
        .flat_map(|well| {
            well.data()
                .iter()
                .zip(weights)
                .map(|(value, weight)| to_f64(value) * weight)
        })
        .collect();

    let mean = Mean
        .plate_aggregated_weighted(&plate, &weights, None, &ctx)
        .unwrap();
    assert_relative_eq!(to_f64(&mean), scaled.iter().mean(), epsilon = EPSILON);
}
