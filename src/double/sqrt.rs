//! Square root from a native seed plus one refinement.

use super::{one_sqr, quick_two_sum, Double};

/// `sqrt(x)` for `x` with a positive high limb.
///
/// Seeds with the native square root, squares it exactly, and folds the
/// residual back in; one step suffices because the seed is already correct to
/// native precision. The domain is the caller's responsibility: zero divides
/// by zero and negative input propagates NaN, exactly as native float
/// semantics would.
pub fn sqrt(x: Double) -> Double {
    let s = libm::sqrt(x.hi);
    let t = one_sqr(s);
    let e = (x.hi - t.hi - t.lo + x.lo) * 0.5 / s;
    quick_two_sum(s, e)
}
