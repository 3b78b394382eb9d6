pub mod sqrt;

pub use sqrt::{sqrt_approx, sqrt_lib, sqrt_newton, sqrt_pow, SqrtError};
