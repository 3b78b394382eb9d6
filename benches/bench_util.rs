#![allow(dead_code)]

use criterion::{black_box, BenchmarkGroup, Criterion};
use std::time::Duration;

use fastsqrt::SqrtError;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;
const RNG_DENOM: f32 = (1u64 << 24) as f32;

pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

pub fn uniform_f32(state: &mut u64) -> f32 {
    let bits = (lcg_next(state) >> 40) as u32;
    (bits as f32) / RNG_DENOM
}

pub fn gen_range(count: usize, min: f32, max: f32, seed: u64) -> Vec<f32> {
    let mut state = seed;
    let span = max - min;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(min + uniform_f32(&mut state) * span);
    }
    values
}

pub type SqrtMethod = fn(f32) -> Result<f32, SqrtError>;

pub fn bench_methods(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[f32],
    methods: &[(&str, SqrtMethod)],
) {
    for &(name, method) in methods {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for &x in inputs {
                    acc += method(black_box(x)).expect("non-negative input");
                }
                black_box(acc)
            })
        });
    }
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
}
