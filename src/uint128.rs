//! 128-bit unsigned integer built from two `u64` limbs.
//!
//! Arithmetic is plain carry propagation with wrapping semantics; the
//! widening variants (`add_carry`, `sub_borrow`, `mul_full`) expose the
//! carry/borrow/high-product so [`crate::Uint256`] can chain them one level
//! up. Independent of the double-double core.

use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint128 {
    // Field order matters: derived comparison is lexicographic on (hi, lo).
    hi: u64,
    lo: u64,
}

impl Uint128 {
    pub const ZERO: Uint128 = Uint128 { hi: 0, lo: 0 };
    pub const MAX: Uint128 = Uint128 {
        hi: u64::MAX,
        lo: u64::MAX,
    };

    #[inline(always)]
    pub const fn new(hi: u64, lo: u64) -> Uint128 {
        Uint128 { hi, lo }
    }

    #[inline(always)]
    pub const fn from_u64(v: u64) -> Uint128 {
        Uint128 { hi: 0, lo: v }
    }

    #[inline(always)]
    pub const fn from_u128(v: u128) -> Uint128 {
        Uint128 {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }

    #[inline(always)]
    pub const fn to_u128(self) -> u128 {
        ((self.hi as u128) << 64) | self.lo as u128
    }

    #[inline(always)]
    pub const fn parts(self) -> (u64, u64) {
        (self.hi, self.lo)
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.hi | self.lo == 0
    }

    /// Wrapping `self + 1`.
    #[inline(always)]
    pub const fn inc(self) -> Uint128 {
        let (lo, carry) = self.lo.overflowing_add(1);
        Uint128 {
            hi: self.hi.wrapping_add(carry as u64),
            lo,
        }
    }

    /// Wrapping `self - 1`.
    #[inline(always)]
    pub const fn dec(self) -> Uint128 {
        let (lo, borrow) = self.lo.overflowing_sub(1);
        Uint128 {
            hi: self.hi.wrapping_sub(borrow as u64),
            lo,
        }
    }

    /// Wrapping addition.
    #[inline(always)]
    pub const fn add(self, rhs: Uint128) -> Uint128 {
        let (s, _) = self.add_carry(rhs, 0);
        s
    }

    /// Addition with carry in and carry out (always 0 or 1).
    #[inline(always)]
    pub const fn add_carry(self, rhs: Uint128, carry: u64) -> (Uint128, u64) {
        let (lo, c0) = self.lo.overflowing_add(rhs.lo);
        let (lo, c1) = lo.overflowing_add(carry);
        let (hi, c2) = self.hi.overflowing_add(rhs.hi);
        let (hi, c3) = hi.overflowing_add(c0 as u64 + c1 as u64);
        (Uint128 { hi, lo }, c2 as u64 + c3 as u64)
    }

    /// Wrapping subtraction.
    #[inline(always)]
    pub const fn sub(self, rhs: Uint128) -> Uint128 {
        let (d, _) = self.sub_borrow(rhs, 0);
        d
    }

    /// Subtraction with borrow in and borrow out (always 0 or 1).
    #[inline(always)]
    pub const fn sub_borrow(self, rhs: Uint128, borrow: u64) -> (Uint128, u64) {
        let (lo, b0) = self.lo.overflowing_sub(rhs.lo);
        let (lo, b1) = lo.overflowing_sub(borrow);
        let (hi, b2) = self.hi.overflowing_sub(rhs.hi);
        let (hi, b3) = hi.overflowing_sub(b0 as u64 + b1 as u64);
        (Uint128 { hi, lo }, b2 as u64 + b3 as u64)
    }

    /// Wrapping multiplication (low 128 bits of the product).
    #[inline(always)]
    pub const fn mul(self, rhs: Uint128) -> Uint128 {
        Uint128::from_u128(self.to_u128().wrapping_mul(rhs.to_u128()))
    }

    /// Full 256-bit product as `(high, low)` halves.
    pub const fn mul_full(self, rhs: Uint128) -> (Uint128, Uint128) {
        let p00 = (self.lo as u128) * (rhs.lo as u128);
        let p01 = (self.lo as u128) * (rhs.hi as u128);
        let p10 = (self.hi as u128) * (rhs.lo as u128);
        let p11 = (self.hi as u128) * (rhs.hi as u128);
        let (mid, c1) = p01.overflowing_add(p10);
        let (lo, c2) = p00.overflowing_add(mid << 64);
        let hi = p11
            .wrapping_add(mid >> 64)
            .wrapping_add((c1 as u128) << 64)
            .wrapping_add(c2 as u128);
        (Uint128::from_u128(hi), Uint128::from_u128(lo))
    }

    // Inherent const forms of the bitwise operators, usable from the
    // `const fn` shift/multiply chains in `Uint256`.
    #[inline(always)]
    pub const fn and(self, rhs: Uint128) -> Uint128 {
        Uint128 {
            hi: self.hi & rhs.hi,
            lo: self.lo & rhs.lo,
        }
    }

    #[inline(always)]
    pub const fn or(self, rhs: Uint128) -> Uint128 {
        Uint128 {
            hi: self.hi | rhs.hi,
            lo: self.lo | rhs.lo,
        }
    }

    #[inline(always)]
    pub const fn xor(self, rhs: Uint128) -> Uint128 {
        Uint128 {
            hi: self.hi ^ rhs.hi,
            lo: self.lo ^ rhs.lo,
        }
    }

    #[inline(always)]
    pub const fn complement(self) -> Uint128 {
        Uint128 {
            hi: !self.hi,
            lo: !self.lo,
        }
    }

    /// Left shift; `n >= 128` yields zero.
    #[inline]
    pub const fn shl(self, n: u32) -> Uint128 {
        match n {
            0 => self,
            1..=63 => Uint128 {
                hi: self.hi << n | self.lo >> (64 - n),
                lo: self.lo << n,
            },
            64..=127 => Uint128 {
                hi: self.lo << (n - 64),
                lo: 0,
            },
            _ => Uint128::ZERO,
        }
    }

    /// Right shift; `n >= 128` yields zero.
    #[inline]
    pub const fn shr(self, n: u32) -> Uint128 {
        match n {
            0 => self,
            1..=63 => Uint128 {
                hi: self.hi >> n,
                lo: self.lo >> n | self.hi << (64 - n),
            },
            64..=127 => Uint128 {
                hi: 0,
                lo: self.hi >> (n - 64),
            },
            _ => Uint128::ZERO,
        }
    }
}

impl From<u64> for Uint128 {
    #[inline(always)]
    fn from(v: u64) -> Uint128 {
        Uint128::from_u64(v)
    }
}

impl From<u128> for Uint128 {
    #[inline(always)]
    fn from(v: u128) -> Uint128 {
        Uint128::from_u128(v)
    }
}

impl From<Uint128> for u128 {
    #[inline(always)]
    fn from(v: Uint128) -> u128 {
        v.to_u128()
    }
}

impl core::ops::BitAnd for Uint128 {
    type Output = Uint128;
    #[inline(always)]
    fn bitand(self, rhs: Uint128) -> Uint128 {
        self.and(rhs)
    }
}

impl core::ops::BitOr for Uint128 {
    type Output = Uint128;
    #[inline(always)]
    fn bitor(self, rhs: Uint128) -> Uint128 {
        self.or(rhs)
    }
}

impl core::ops::BitXor for Uint128 {
    type Output = Uint128;
    #[inline(always)]
    fn bitxor(self, rhs: Uint128) -> Uint128 {
        self.xor(rhs)
    }
}

impl core::ops::Not for Uint128 {
    type Output = Uint128;
    #[inline(always)]
    fn not(self) -> Uint128 {
        self.complement()
    }
}

impl core::ops::Shl<u32> for Uint128 {
    type Output = Uint128;
    #[inline(always)]
    fn shl(self, n: u32) -> Uint128 {
        Uint128::shl(self, n)
    }
}

impl core::ops::Shr<u32> for Uint128 {
    type Output = Uint128;
    #[inline(always)]
    fn shr(self, n: u32) -> Uint128 {
        Uint128::shr(self, n)
    }
}

impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_u128(), f)
    }
}

impl FromStr for Uint128 {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Uint128, ParseIntError> {
        s.parse::<u128>().map(Uint128::from_u128)
    }
}
