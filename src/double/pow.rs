//! General and integer powers.

use super::{exp, ln, Double};

/// `base^exponent` as `exp(ln(base) * exponent)`. Follows the logarithm's
/// domain: a non-positive base yields the exponential of negative infinity.
pub fn pow(base: Double, exponent: Double) -> Double {
    exp(ln(base).mul(exponent))
}

/// `x^n` for a native integer exponent by square-and-multiply over the bits
/// of `n`, so the loop length is bounded by the exponent's bit width. A
/// negative exponent is the reciprocal of the positive power.
pub fn powi(x: Double, n: i32) -> Double {
    if n == 0 {
        return Double::ONE;
    }
    if n == 1 {
        return x;
    }
    let mut m = n.unsigned_abs();
    let mut base = x;
    let mut acc = Double::ONE;
    while m > 1 {
        if m & 1 == 1 {
            acc = acc.mul(base);
        }
        base = base.sqr();
        m >>= 1;
    }
    let r = acc.mul(base);
    if n > 0 {
        r
    } else {
        r.inv()
    }
}
