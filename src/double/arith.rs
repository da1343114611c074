//! Compensated arithmetic on normalized pairs, plus mixed fast paths that
//! take a bare `f64` operand without widening it first. The transcendental
//! kernels lean on the mixed paths in their inner loops.

use super::{one_sqr, quick_two_sum, two_prod, two_sum, Double};

impl Double {
    /// `self + rhs` with one compensation and one renormalization step.
    #[inline]
    pub fn add(self, rhs: Double) -> Double {
        let s = two_sum(self.hi, rhs.hi);
        let e = two_sum(self.lo, rhs.lo);
        let c = s.lo + e.hi;
        let v = quick_two_sum(s.hi, c);
        quick_two_sum(v.hi, v.lo + e.lo)
    }

    /// `self - rhs`.
    #[inline]
    pub fn sub(self, rhs: Double) -> Double {
        let s = two_sum(self.hi, -rhs.hi);
        let e = two_sum(self.lo, -rhs.lo);
        let c = s.lo + e.hi;
        let v = quick_two_sum(s.hi, c);
        quick_two_sum(v.hi, v.lo + e.lo)
    }

    /// `self * rhs`: exact product of the high limbs, cross terms folded into
    /// the correction.
    #[inline]
    pub fn mul(self, rhs: Double) -> Double {
        let mut p = two_prod(self.hi, rhs.hi);
        p.lo += self.hi * rhs.lo + self.lo * rhs.hi;
        quick_two_sum(p.hi, p.lo)
    }

    /// `self / rhs`: native quotient estimate plus a single residual
    /// correction, good to ~106 bits. No iterative refinement.
    #[inline]
    pub fn div(self, rhs: Double) -> Double {
        let s = self.hi / rhs.hi;
        let t = two_prod(s, rhs.hi);
        let e = ((((self.hi - t.hi) - t.lo) + self.lo) - s * rhs.lo) / rhs.hi;
        quick_two_sum(s, e)
    }

    /// `self * self`, cheaper than `mul` by one split.
    #[inline]
    pub fn sqr(self) -> Double {
        let mut p = one_sqr(self.hi);
        let cross = self.hi * self.lo;
        p.lo += cross + cross;
        quick_two_sum(p.hi, p.lo)
    }

    /// `1 / self` via one Newton correction of the native reciprocal.
    #[inline]
    pub fn inv(self) -> Double {
        let xh = self.hi;
        let s = 1.0 / xh;
        let t = self.mul_f64(s);
        let e = (1.0 - t.hi - t.lo) / xh;
        quick_two_sum(s, e)
    }

    /// `|self|`. Sign is decided by the high limb.
    #[inline(always)]
    pub fn abs(self) -> Double {
        if self.hi < 0.0 {
            -self
        } else {
            self
        }
    }

    /// `self + f` without widening `f` first (saves one two-sum).
    #[inline]
    pub fn add_f64(self, f: f64) -> Double {
        let mut s = two_sum(self.hi, f);
        s.lo += self.lo;
        quick_two_sum(s.hi, s.lo)
    }

    /// `self - f`.
    #[inline]
    pub fn sub_f64(self, f: f64) -> Double {
        let mut s = two_sum(self.hi, -f);
        s.lo += self.lo;
        quick_two_sum(s.hi, s.lo)
    }

    /// `self * f` without widening `f` first (saves one two-prod).
    #[inline]
    pub fn mul_f64(self, f: f64) -> Double {
        let c = two_prod(self.hi, f);
        let cl = self.lo * f;
        let t = quick_two_sum(c.hi, cl);
        quick_two_sum(t.hi, t.lo + c.lo)
    }

    /// `self / f`.
    #[inline]
    pub fn div_f64(self, f: f64) -> Double {
        let t = self.hi / f;
        let p = two_prod(t, f);
        let d = two_sum(self.hi, -p.hi);
        let e = (d.hi + (d.lo + (self.lo - p.lo))) / f;
        quick_two_sum(t, e)
    }

    /// `self * 2^n`, exact for either sign of `n` (both limbs scale by the
    /// same power of two, so no renormalization is needed).
    #[inline(always)]
    pub fn mul_pow2(self, n: i32) -> Double {
        Double {
            hi: libm::scalbn(self.hi, n),
            lo: libm::scalbn(self.lo, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rand_next(state: &mut u64) -> u64 {
        *state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *state
    }

    fn rand_range(state: &mut u64, min: f64, max: f64) -> f64 {
        let unit = (rand_next(state) >> 11) as f64 / (1u64 << 53) as f64;
        min + (max - min) * unit
    }

    fn rand_double(state: &mut u64, min: f64, max: f64) -> Double {
        let hi = rand_range(state, min, max);
        Double::from_sum(hi, hi * 1e-18 * rand_range(state, -1.0, 1.0))
    }

    fn rel_err(actual: Double, expected: Double) -> f64 {
        let denom = expected.to_f64().abs().max(f64::MIN_POSITIVE);
        actual.sub(expected).to_f64().abs() / denom
    }

    #[test]
    fn add_zero_is_identity() {
        let mut state = 7u64;
        for _ in 0..500 {
            let d = rand_double(&mut state, -1e10, 1e10);
            assert_eq!(d.add(Double::ZERO), d);
            assert_eq!(d.add_f64(0.0), d);
        }
    }

    #[test]
    fn sub_self_is_zero() {
        let mut state = 11u64;
        for _ in 0..500 {
            let d = rand_double(&mut state, -1e10, 1e10);
            assert_eq!(d.sub(d), Double::ZERO);
        }
    }

    #[test]
    fn mul_self_equals_sqr() {
        let mut state = 13u64;
        for _ in 0..500 {
            let d = rand_double(&mut state, -1e5, 1e5);
            assert_eq!(d.mul(d), d.sqr());
        }
    }

    #[test]
    fn mul_then_div_round_trips() {
        let mut state = 17u64;
        for _ in 0..500 {
            let a = rand_double(&mut state, -1e8, 1e8);
            let mut b = rand_double(&mut state, -1e8, 1e8);
            if b.hi == 0.0 {
                b = Double::ONE;
            }
            let q = a.mul(b).div(b);
            assert!(
                rel_err(q, a) < 1e-29,
                "(a*b)/b drifted: a={a:?} b={b:?} q={q:?}"
            );
        }
    }

    #[test]
    fn inv_matches_div_by_one() {
        let mut state = 19u64;
        for _ in 0..500 {
            let d = rand_double(&mut state, 0.1, 1e6);
            let inv = d.inv();
            assert!(rel_err(inv, Double::ONE.div(d)) < 1e-30);
            assert!(rel_err(d.mul(inv), Double::ONE) < 1e-30);
        }
    }

    #[test]
    fn mixed_paths_agree_with_widened_operands() {
        let mut state = 23u64;
        for _ in 0..500 {
            let d = rand_double(&mut state, -1e6, 1e6);
            let f = rand_range(&mut state, -1e3, 1e3);
            let wide = Double::from_f64(f);
            assert!(rel_err(d.add_f64(f), d.add(wide)) < 1e-30);
            assert!(rel_err(d.sub_f64(f), d.sub(wide)) < 1e-30);
            assert!(rel_err(d.mul_f64(f), d.mul(wide)) < 1e-30);
            if f != 0.0 {
                assert!(rel_err(d.div_f64(f), d.div(wide)) < 1e-30);
            }
        }
    }

    #[test]
    fn mul_pow2_scales_both_limbs() {
        let d = Double::from_sum(3.0, 1e-17);
        let up = d.mul_pow2(4);
        assert_eq!(up.hi, 48.0);
        assert_eq!(up.lo, 16e-17);
        let down = d.mul_pow2(-1);
        assert_eq!(down.hi, 1.5);
        assert_eq!(down.lo, 0.5e-17);
        assert_eq!(d.mul_pow2(0), d);
    }

    #[test]
    fn abs_and_neg() {
        let d = Double::from_sum(-2.0, -1e-18);
        assert_eq!(d.abs(), -d);
        assert_eq!((-d).abs(), -d);
        assert_eq!(Double::ZERO.abs(), Double::ZERO);
    }

    #[test]
    fn add_keeps_sub_ulp_residue() {
        // 1 + 1e-20 is invisible at native precision but not in the pair.
        let d = Double::ONE.add_f64(1e-20);
        assert_eq!(d.hi, 1.0);
        assert_eq!(d.lo, 1e-20);
    }
}
