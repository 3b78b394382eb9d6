//! Single-precision square-root routines.
//!
//! Three real methods (`sqrt_pow`, `sqrt_lib`, `sqrt_newton`) plus the
//! bit-level IEEE 754 approximation (`sqrt_approx`) that seeds the Newton
//! refinement. All four reject negative inputs before computing anything.

use thiserror::Error;

/// Precondition violation raised by every routine in this module.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SqrtError {
    #[error("Error: input must be greater than or equal to zero.")]
    NegativeInput,
}

// Exponent-field bias constants for the seed trick: one ulp of the exponent's
// low bit, and the half-bias restored after the shift.
const EXP_LOW_BIT: u32 = 1 << 23;
const HALF_EXP_BIAS: u32 = 1 << 29;

// Subnormal inputs sit below the trick's validity range. Scale them up by an
// even power of two, take the approximate root, scale back by half the power.
const SUBNORMAL_SCALE_UP: f32 = 281_474_976_710_656.0; // 2^48
const SUBNORMAL_SCALE_DOWN: f32 = 5.960_464_5e-8; // 2^-24

/// Square-root approximation exploiting the IEEE 754 single-precision layout.
///
/// Halving the exponent+mantissa bit pattern approximates halving the
/// exponent, which is what a square root does in log-space. Accurate to a few
/// percent; meant to seed [`sqrt_newton`], not to be a final answer.
pub fn sqrt_approx(num: f32) -> Result<f32, SqrtError> {
    if num < 0.0 {
        return Err(SqrtError::NegativeInput);
    }
    if num == 0.0 {
        // The bit trick would wrap below zero in the subtraction; define the
        // boundary as an exact zero instead.
        return Ok(0.0);
    }

    let (x, scale) = if num < f32::MIN_POSITIVE {
        (num * SUBNORMAL_SCALE_UP, SUBNORMAL_SCALE_DOWN)
    } else {
        (num, 1.0)
    };

    let mut bits = x.to_bits();
    bits -= EXP_LOW_BIT;
    bits >>= 1;
    bits += HALF_EXP_BIAS;

    Ok(f32::from_bits(bits) * scale)
}

/// Square root via the generic power routine, `num^0.5`.
///
/// Computed through double precision and narrowed back, matching the usual
/// libm `pow` path.
pub fn sqrt_pow(num: f32) -> Result<f32, SqrtError> {
    if num < 0.0 {
        return Err(SqrtError::NegativeInput);
    }
    Ok(f64::from(num).powf(0.5) as f32)
}

/// Square root via the dedicated library routine.
pub fn sqrt_lib(num: f32) -> Result<f32, SqrtError> {
    if num < 0.0 {
        return Err(SqrtError::NegativeInput);
    }
    Ok(num.sqrt())
}

/// Square root via Newton's Method, seeded by [`sqrt_approx`].
///
/// Exactly two update steps. One is not precise enough; capping at two keeps
/// the cost bounded instead of iterating to convergence.
pub fn sqrt_newton(num: f32) -> Result<f32, SqrtError> {
    if num < 0.0 {
        return Err(SqrtError::NegativeInput);
    }
    if num == 0.0 {
        // Short-circuit before seeding so the refinement never divides by a
        // near-zero seed.
        return Ok(0.0);
    }

    let mut x = sqrt_approx(num)?;
    x = 0.5 * (x + num / x);
    Ok(0.5 * (x + num / x))
}
