pub mod bench;
pub mod maths;

pub use maths::sqrt::{sqrt_approx, sqrt_lib, sqrt_newton, sqrt_pow, SqrtError};
