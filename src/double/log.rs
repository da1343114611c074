//! Natural logarithm via one Newton step through `exp`.

use super::{exp, Double};

/// `ln(x)` in extended precision.
///
/// A native `log` of the high limb seeds `z`, then a single Newton iteration
/// `x * e^(-z) + z - 1` lifts it to full pair accuracy; convergence rides on
/// the accuracy of [`exp`]. Non-positive input maps to negative infinity and
/// `x == 1` short-circuits to zero.
pub fn ln(x: Double) -> Double {
    if x.le_f64(0.0) {
        return Double::NEG_INFINITY;
    }
    if x.eq_f64(1.0) {
        return Double::ZERO;
    }
    let z = Double::from_f64(libm::log(x.hi));
    x.mul(exp(-z)).add(z).sub_f64(1.0)
}
