use fastsqrt::bench::measure;
use fastsqrt::{sqrt_lib, sqrt_newton, sqrt_pow, SqrtError};

// Compiled-in configuration: the benchmarked input and trials per method.
const NUM: i8 = 42;
const TEST_RUNS: u32 = 10_000;

fn main() -> Result<(), SqrtError> {
    let methods: [(&str, fn(f32) -> Result<f32, SqrtError>); 3] = [
        ("std powf function", sqrt_pow),
        ("std sqrt function", sqrt_lib),
        ("Newton's Method", sqrt_newton),
    ];

    for (name, method) in methods {
        let report = measure(name, NUM, TEST_RUNS, method)?;
        println!("{report}");
    }
    println!();

    Ok(())
}
