//! Hyperbolic sine and cosine from the exponential and its reciprocal.

use super::{exp, Double};

/// `sinh(x) = (e^x - e^-x) / 2`, with `e^-x` taken as the extended-precision
/// reciprocal of `e^x` so the exponential is evaluated once.
pub fn sinh(x: Double) -> Double {
    let e = exp(x);
    e.sub(e.inv()).mul_pow2(-1)
}

/// `cosh(x) = (e^x + e^-x) / 2`.
pub fn cosh(x: Double) -> Double {
    let e = exp(x);
    e.add(e.inv()).mul_pow2(-1)
}
