//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use bigdecimal::BigDecimal;
use microflex_core::{Plate, Well};
use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const EPSILON: f64 = 1e-9;

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Values with three decimal places in `[-500, 500)`
pub fn random_values<R: Rng>(rng: &mut R, len: usize) -> Vec<BigDecimal> {
    (0..len)
        .map(|_| BigDecimal::new(rng.gen_range(-500_000i64..500_000).into(), 3))
        .collect()
}

/// A 96-well plate where every well holds between `min_len` and `max_len` values
pub fn random_plate<R: Rng>(rng: &mut R, min_len: usize, max_len: usize, label: &str) -> Plate {
    let mut plate = Plate::new(8, 12, label);
    for row in 0..8 {
        for column in 1..=12 {
            let len = rng.gen_range(min_len..=max_len);
            plate
                .add_well(Well::with_data(row, column, random_values(rng, len)))
                .expect("well inside plate");
        }
    }
    plate
}

pub fn to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().expect("decimal fits in f64")
}

pub fn to_f64s<'a, I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a BigDecimal>,
{
    values.into_iter().map(to_f64).collect()
}
