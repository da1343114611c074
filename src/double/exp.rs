//! Natural exponential over a Pade-style rational approximant.

use super::Double;

// Shared numerator/denominator coefficients of the degree-17 rational
// approximant to e^x on the reduced range |x| <= ln(2)/2. The denominator
// reuses the table with alternating signs. Values are exact integers up to
// the f64 rounding of the largest entries.
const PADE_COEF: [f64; 17] = [
    1.0,
    272.0,
    36_720.0,
    3_255_840.0,
    211_629_600.0,
    10_666_131_840.0,
    430_200_650_880.0,
    14_135_164_243_200.0,
    381_649_434_566_400.0,
    8_481_098_545_920_000.0,
    154_355_993_535_744_030.0,
    2_273_242_813_890_047_700.0,
    26_521_166_162_050_560_000.0,
    236_650_405_753_681_870_000.0,
    1.5213240369879552e21,
    6.288139352883548e21,
    1.2576278705767096e22,
];

/// `e^x` in extended precision.
///
/// Range-reduces by the nearest multiple of ln 2, evaluates the rational
/// approximant with Horner recurrences over [`PADE_COEF`], then restores the
/// scale with an exact power-of-two multiply. `x == 0` and `x == 1` short-
/// circuit to the stored constants.
pub fn exp(x: Double) -> Double {
    if x.eq_f64(0.0) {
        return Double::ONE;
    }
    if x.eq_f64(1.0) {
        return Double::E;
    }
    let n = libm::floor(x.hi / Double::LN_2.hi + 0.5);
    let r = x.sub(Double::LN_2.mul_f64(n));
    let mut u = Double::ONE;
    let mut v = Double::ONE;
    for &c in PADE_COEF.iter() {
        u = u.mul(r).add_f64(c);
    }
    for (i, &c) in PADE_COEF.iter().enumerate() {
        let c = if i % 2 == 0 { c } else { -c };
        v = v.mul(r).add_f64(c);
    }
    u.div(v).mul_pow2(n as i32)
}
