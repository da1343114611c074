//! Double-double extended-precision arithmetic.
//!
//! A [`Double`] is an unevaluated sum of two `f64` limbs `hi + lo`, giving
//! roughly 106 bits of significand. Every producing operation returns a
//! normalized pair (`|lo|` at most one ulp of `hi`), built on error-free
//! transformations after T. J. Dekker, "A floating-point technique for
//! extending the available precision", Numer. Math. 18 (1971), 224-242.
//!
//! Accuracy is "good enough" double-double, not correctly rounded: arithmetic
//! carries a single compensation step and the transcendental kernels use one
//! Newton-style refinement over an accurate native seed.

mod arith;
mod eft;
mod exp;
mod hyperbolic;
mod log;
mod pow;
mod sqrt;

pub use exp::exp;
pub use hyperbolic::{cosh, sinh};
pub use log::ln;
pub use pow::{pow, powi};
pub use sqrt::sqrt;

pub(crate) use eft::{one_sqr, quick_two_sum, two_prod, two_sum};

/// Unevaluated sum of two `f64` limbs representing `hi + lo`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Double {
    pub(crate) hi: f64,
    pub(crate) lo: f64,
}

impl Double {
    pub const ZERO: Double = Double { hi: 0.0, lo: 0.0 };
    pub const ONE: Double = Double { hi: 1.0, lo: 0.0 };
    pub const INFINITY: Double = Double {
        hi: f64::INFINITY,
        lo: f64::INFINITY,
    };
    pub const NEG_INFINITY: Double = Double {
        hi: f64::NEG_INFINITY,
        lo: f64::NEG_INFINITY,
    };
    pub const NAN: Double = Double {
        hi: f64::NAN,
        lo: f64::NAN,
    };
    // Low limbs computed offline at 256-bit precision.
    pub const PI: Double = Double {
        hi: core::f64::consts::PI,
        lo: 1.2246467991473532e-16,
    };
    pub const TAU: Double = Double {
        hi: core::f64::consts::TAU,
        lo: 2.4492935982947064e-16,
    };
    pub const E: Double = Double {
        hi: core::f64::consts::E,
        lo: 1.4456468917292502e-16,
    };
    pub const LN_2: Double = Double {
        hi: core::f64::consts::LN_2,
        lo: 2.319046813846299e-17,
    };
    pub const PHI: Double = Double {
        hi: 1.618033988749895,
        lo: -5.432115203682505e-17,
    };

    /// Widens a native float; the correction limb starts at zero.
    #[inline(always)]
    pub const fn from_f64(x: f64) -> Double {
        Double { hi: x, lo: 0.0 }
    }

    /// Exact sum of two native floats (error-free as long as `a + b` is finite).
    #[inline(always)]
    pub fn from_sum(a: f64, b: f64) -> Double {
        two_sum(a, b)
    }

    /// Exact product of two native floats (error-free as long as `a * b` is finite).
    #[inline(always)]
    pub fn from_mul(a: f64, b: f64) -> Double {
        two_prod(a, b)
    }

    /// Exact square of a native float.
    #[inline(always)]
    pub fn from_sqr(a: f64) -> Double {
        one_sqr(a)
    }

    /// Collapses to native precision.
    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// High limb (the value rounded to native precision).
    #[inline(always)]
    pub const fn hi(self) -> f64 {
        self.hi
    }

    /// Low limb (the rounding correction relative to `hi`).
    #[inline(always)]
    pub const fn lo(self) -> f64 {
        self.lo
    }

    #[inline(always)]
    pub fn is_nan(self) -> bool {
        self.hi.is_nan() || self.lo.is_nan()
    }

    // Fast comparisons against a bare float, used by the kernel short-circuits.
    #[inline(always)]
    pub(crate) fn eq_f64(self, f: f64) -> bool {
        self.hi == f && self.lo == 0.0
    }

    #[inline(always)]
    pub(crate) fn le_f64(self, f: f64) -> bool {
        self.hi < f || (self.hi == f && self.lo <= 0.0)
    }
}

impl From<f64> for Double {
    #[inline(always)]
    fn from(x: f64) -> Double {
        Double::from_f64(x)
    }
}

impl From<Double> for f64 {
    #[inline(always)]
    fn from(d: Double) -> f64 {
        d.to_f64()
    }
}

/// Lexicographic order on `(hi, lo)`. NaN limbs never compare, as with `f64`.
impl PartialOrd for Double {
    #[inline(always)]
    fn partial_cmp(&self, other: &Double) -> Option<core::cmp::Ordering> {
        match self.hi.partial_cmp(&other.hi) {
            Some(core::cmp::Ordering::Equal) => self.lo.partial_cmp(&other.lo),
            ord => ord,
        }
    }
}

impl core::ops::Add for Double {
    type Output = Double;
    #[inline(always)]
    fn add(self, rhs: Double) -> Double {
        Double::add(self, rhs)
    }
}

impl core::ops::Sub for Double {
    type Output = Double;
    #[inline(always)]
    fn sub(self, rhs: Double) -> Double {
        Double::sub(self, rhs)
    }
}

impl core::ops::Mul for Double {
    type Output = Double;
    #[inline(always)]
    fn mul(self, rhs: Double) -> Double {
        Double::mul(self, rhs)
    }
}

impl core::ops::Div for Double {
    type Output = Double;
    #[inline(always)]
    fn div(self, rhs: Double) -> Double {
        Double::div(self, rhs)
    }
}

impl core::ops::Add<f64> for Double {
    type Output = Double;
    #[inline(always)]
    fn add(self, rhs: f64) -> Double {
        self.add_f64(rhs)
    }
}

impl core::ops::Sub<f64> for Double {
    type Output = Double;
    #[inline(always)]
    fn sub(self, rhs: f64) -> Double {
        self.sub_f64(rhs)
    }
}

impl core::ops::Mul<f64> for Double {
    type Output = Double;
    #[inline(always)]
    fn mul(self, rhs: f64) -> Double {
        self.mul_f64(rhs)
    }
}

impl core::ops::Div<f64> for Double {
    type Output = Double;
    #[inline(always)]
    fn div(self, rhs: f64) -> Double {
        self.div_f64(rhs)
    }
}

impl core::ops::Neg for Double {
    type Output = Double;
    #[inline(always)]
    fn neg(self) -> Double {
        Double {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_sum_keeps_exact_residual() {
        let d = Double::from_sum(1.0, 1e-20);
        assert_eq!(d.hi, 1.0);
        assert_eq!(d.lo, 1e-20);
        assert_eq!(d.to_f64(), 1.0 + 1e-20);
    }

    #[test]
    fn from_mul_matches_integer_reference() {
        // Integer-valued operands keep the exact product representable in i128,
        // so hi + lo can be checked without a bignum library.
        let cases = [
            (134_217_729.0f64, 67_108_865.0f64),
            (9_007_199_254_740_993.0, 3.0),
            (1_048_575.0, 1_048_577.0),
            (268_435_459.0, 268_435_417.0),
        ];
        for &(a, b) in &cases {
            let d = Double::from_mul(a, b);
            assert_eq!(d.hi, a * b, "hi must be the rounded product of {a} * {b}");
            let exact = (a as i128) * (b as i128);
            let residual = exact - (d.hi as i128);
            assert_eq!(d.lo, residual as f64, "lo residual mismatch for {a} * {b}");
        }
    }

    #[test]
    fn from_sqr_agrees_with_from_mul() {
        for &a in &[3.1415926, -2.5e8, 1.0 + f64::EPSILON, 0.1] {
            assert_eq!(Double::from_sqr(a), Double::from_mul(a, a));
        }
    }

    #[test]
    fn constants_are_normalized() {
        for d in [
            Double::PI,
            Double::TAU,
            Double::E,
            Double::LN_2,
            Double::PHI,
        ] {
            assert_eq!(d.hi + d.lo, d.hi, "lo must vanish at native precision");
            assert!(d.lo != 0.0, "constant should carry a correction limb");
        }
        assert_eq!(Double::NEG_INFINITY.to_f64(), f64::NEG_INFINITY);
        assert_eq!(Double::INFINITY.to_f64(), f64::INFINITY);
        assert!(Double::NAN.is_nan());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Double::from_sum(1.0, 1e-20);
        let b = Double::from_f64(1.0);
        assert!(a > b);
        assert!(b < a);
        assert!(a >= a && a <= a);
        assert_eq!(a.partial_cmp(&Double::NAN), None);
    }

    #[test]
    fn conversion_round_trip() {
        let d: Double = 2.5f64.into();
        let back: f64 = d.into();
        assert_eq!(back, 2.5);
    }
}
