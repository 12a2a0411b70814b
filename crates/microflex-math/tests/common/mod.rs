//! Shared utilities for integration tests

#![allow(dead_code)]

use bigdecimal::BigDecimal;
use microflex_core::{Plate, Stack, Well, WellSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const SEED: u64 = 0x5eed_f1e7;

pub fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(SEED)
}

/// Values with two decimal places in `[-100, 100)`
pub fn random_values<R: Rng>(rng: &mut R, len: usize) -> Vec<BigDecimal> {
    (0..len)
        .map(|_| BigDecimal::new(rng.gen_range(-10_000i64..10_000).into(), 2))
        .collect()
}

pub fn random_well<R: Rng>(rng: &mut R, rows: usize, columns: usize, max_len: usize) -> Well {
    let row = rng.gen_range(0..rows);
    let column = rng.gen_range(1..=columns);
    let len = rng.gen_range(0..=max_len);
    Well::with_data(row, column, random_values(rng, len))
}

pub fn random_set<R: Rng>(rng: &mut R, rows: usize, columns: usize, wells: usize) -> WellSet {
    (0..wells)
        .map(|_| random_well(rng, rows, columns, 12))
        .collect()
}

pub fn random_plate<R: Rng>(rng: &mut R, rows: usize, columns: usize, label: &str) -> Plate {
    let mut plate = Plate::new(rows, columns, label);
    let wells = random_set(rng, rows, columns, rows * columns / 2);
    plate
        .add_wells(wells)
        .expect("random wells lie inside the plate");
    plate
}

pub fn random_stack<R: Rng>(rng: &mut R, plates: usize, label: &str) -> Stack {
    let mut stack = Stack::new(8, 12, label);
    for i in 0..plates {
        stack
            .add(random_plate(rng, 8, 12, &format!("{label}-{i}")))
            .expect("plates share the stack dimensions");
    }
    stack
}

/// Every value at least `len` long, so any window inside `[0, len)` fits
pub fn uniform_plate<R: Rng>(rng: &mut R, len: usize, label: &str) -> Plate {
    let mut plate = Plate::new(8, 12, label);
    for row in 0..8 {
        for column in 1..=12 {
            let extra = rng.gen_range(0..4);
            plate
                .add_well(Well::with_data(row, column, random_values(rng, len + extra)))
                .expect("well inside plate");
        }
    }
    plate
}

pub fn decimals(values: &[i64]) -> Vec<BigDecimal> {
    values.iter().map(|&v| BigDecimal::from(v)).collect()
}
