//! Error-free transformations: each returns a rounded result plus the exact
//! rounding error, so the pair sums to the true mathematical value.

use super::Double;

// Veltkamp splitter, 2^27 + 1. Splits a 53-bit significand into two 26-bit
// halves whose products are exact.
pub(crate) const SPLITTER: f64 = 134_217_729.0;

/// Knuth two-sum. Valid for any `a`, `b` whose sum does not overflow.
#[inline(always)]
pub(crate) fn two_sum(a: f64, b: f64) -> Double {
    let s = a + b;
    let a1 = s - b;
    Double {
        hi: s,
        lo: (a - a1) + (b - (s - a1)),
    }
}

/// Fast two-sum renormalization. Requires `|a| >= |b|` (or `a == 0`), which
/// holds wherever the arithmetic layer calls it.
#[inline(always)]
pub(crate) fn quick_two_sum(a: f64, b: f64) -> Double {
    let s = a + b;
    Double {
        hi: s,
        lo: b - (s - a),
    }
}

/// Dekker two-product. Valid as long as `a * b` does not overflow.
#[inline(always)]
pub(crate) fn two_prod(a: f64, b: f64) -> Double {
    let t = SPLITTER * a;
    let ah = t + (a - t);
    let al = a - ah;
    let t = SPLITTER * b;
    let bh = t + (b - t);
    let bl = b - bh;
    let p = a * b;
    Double {
        hi: p,
        lo: ((ah * bh - p) + ah * bl + al * bh) + al * bl,
    }
}

/// Squaring specialization of [`two_prod`]: one split instead of two.
#[inline(always)]
pub(crate) fn one_sqr(a: f64) -> Double {
    let t = SPLITTER * a;
    let ah = t + (a - t);
    let al = a - ah;
    let p = a * a;
    let cross = al * ah;
    Double {
        hi: p,
        lo: ((ah * ah - p) + cross + cross) + al * al,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sum_hi_is_rounded_sum() {
        let cases = [
            (1.0, f64::EPSILON / 2.0),
            (1e16, 1.0),
            (-2.5, 2.5),
            (0.1, 0.2),
            (1e308, -1e292),
        ];
        for &(a, b) in &cases {
            let s = two_sum(a, b);
            assert_eq!(s.hi, a + b, "two_sum({a}, {b}) hi");
        }
    }

    #[test]
    fn two_sum_recovers_dropped_bits() {
        // Spacing at 1e16 is 2, so the 0.5 below the midpoint survives only
        // in the error term.
        let s = two_sum(1e16, 2.5);
        assert_eq!(s.hi, 10_000_000_000_000_002.0);
        assert_eq!(s.lo, 0.5);
    }

    #[test]
    fn two_sum_is_symmetric_in_value() {
        let a = 0.1;
        let b = 1e9;
        let s1 = two_sum(a, b);
        let s2 = two_sum(b, a);
        assert_eq!(s1.hi, s2.hi);
        assert_eq!(s1.lo, s2.lo);
    }

    #[test]
    fn quick_two_sum_matches_two_sum_when_ordered() {
        let cases = [(1e9, 0.1), (42.0, 1e-12), (-8.0, 3.0)];
        for &(a, b) in &cases {
            assert_eq!(quick_two_sum(a, b), two_sum(a, b));
        }
    }

    #[test]
    fn two_prod_residual_vanishes_for_exact_products() {
        for &(a, b) in &[(3.0, 4.0), (0.5, 1e300), (1024.0, -4096.0)] {
            let p = two_prod(a, b);
            assert_eq!(p.hi, a * b);
            assert_eq!(p.lo, 0.0);
        }
    }

    #[test]
    fn two_prod_residual_matches_integer_reference() {
        let mut state = 0x9e37_79b9_7f4a_7c15u64;
        for _ in 0..1000 {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let a = ((state >> 34) as i64 - (1 << 29)) as f64;
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let b = ((state >> 34) as i64 - (1 << 29)) as f64;
            let p = two_prod(a, b);
            let exact = (a as i128) * (b as i128);
            assert_eq!(p.lo, (exact - p.hi as i128) as f64, "two_prod({a}, {b})");
        }
    }

    #[test]
    fn one_sqr_equals_two_prod() {
        let mut state = 1u64;
        for _ in 0..1000 {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let a = f64::from_bits((state >> 12) | 0x3ff0_0000_0000_0000) - 1.5;
            assert_eq!(one_sqr(a), two_prod(a, a), "one_sqr({a})");
        }
    }
}
