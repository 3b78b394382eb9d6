//! Sequential measurement pass and report formatting for the driver.

use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use crate::maths::sqrt::SqrtError;

/// One method's benchmark outcome: the last trial's result and the average
/// wall-clock nanoseconds per call.
pub struct MethodReport {
    pub method: &'static str,
    pub input: i8,
    pub result: f32,
    pub avg_runtime_ns: u64,
}

/// Runs `method` on `input` for `trials` calls, timing each call with a
/// monotonic clock and averaging with integer division. Only the last trial's
/// result is kept; every trial uses the same input.
///
/// `trials` must be positive.
pub fn measure<F>(
    name: &'static str,
    input: i8,
    trials: u32,
    method: F,
) -> Result<MethodReport, SqrtError>
where
    F: Fn(f32) -> Result<f32, SqrtError>,
{
    let num = f32::from(input);
    let mut total_ns: u64 = 0;
    let mut result: f32 = 0.0;

    for _ in 0..trials {
        let start = Instant::now();
        result = black_box(method(black_box(num))?);
        total_ns += start.elapsed().as_nanos() as u64;
    }

    Ok(MethodReport {
        method: name,
        input,
        result,
        avg_runtime_ns: total_ns / u64::from(trials),
    })
}

impl fmt::Display for MethodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}:", self.method)?;
        // Float varargs promote to double in the original printf; print the
        // f64 widening of the f32 result to match digit-for-digit.
        writeln!(f, "\tsqrt({}) = {:.17}", self.input, f64::from(self.result))?;
        write!(f, "\tAverage runtime = {} nanoseconds.", self.avg_runtime_ns)
    }
}
