//! 256-bit unsigned integer: two [`Uint128`] limbs, carry chains one level up.

use core::fmt;

use crate::Uint128;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint256 {
    hi: Uint128,
    lo: Uint128,
}

impl Uint256 {
    pub const ZERO: Uint256 = Uint256 {
        hi: Uint128::ZERO,
        lo: Uint128::ZERO,
    };
    pub const MAX: Uint256 = Uint256 {
        hi: Uint128::MAX,
        lo: Uint128::MAX,
    };

    #[inline(always)]
    pub const fn new(hi: Uint128, lo: Uint128) -> Uint256 {
        Uint256 { hi, lo }
    }

    #[inline(always)]
    pub const fn from_u64(v: u64) -> Uint256 {
        Uint256 {
            hi: Uint128::ZERO,
            lo: Uint128::from_u64(v),
        }
    }

    #[inline(always)]
    pub const fn from_u128(v: u128) -> Uint256 {
        Uint256 {
            hi: Uint128::ZERO,
            lo: Uint128::from_u128(v),
        }
    }

    #[inline(always)]
    pub const fn parts(self) -> (Uint128, Uint128) {
        (self.hi, self.lo)
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.hi.is_zero() && self.lo.is_zero()
    }

    /// Wrapping `self + 1`.
    #[inline(always)]
    pub const fn inc(self) -> Uint256 {
        self.add(Uint256::from_u64(1))
    }

    /// Wrapping `self - 1`.
    #[inline(always)]
    pub const fn dec(self) -> Uint256 {
        self.sub(Uint256::from_u64(1))
    }

    /// Wrapping addition.
    #[inline(always)]
    pub const fn add(self, rhs: Uint256) -> Uint256 {
        let (s, _) = self.add_carry(rhs, 0);
        s
    }

    /// Addition with carry in and carry out.
    #[inline(always)]
    pub const fn add_carry(self, rhs: Uint256, carry: u64) -> (Uint256, u64) {
        let (lo, c) = self.lo.add_carry(rhs.lo, carry);
        let (hi, c) = self.hi.add_carry(rhs.hi, c);
        (Uint256 { hi, lo }, c)
    }

    /// Wrapping subtraction.
    #[inline(always)]
    pub const fn sub(self, rhs: Uint256) -> Uint256 {
        let (d, _) = self.sub_borrow(rhs, 0);
        d
    }

    /// Subtraction with borrow in and borrow out.
    #[inline(always)]
    pub const fn sub_borrow(self, rhs: Uint256, borrow: u64) -> (Uint256, u64) {
        let (lo, b) = self.lo.sub_borrow(rhs.lo, borrow);
        let (hi, b) = self.hi.sub_borrow(rhs.hi, b);
        (Uint256 { hi, lo }, b)
    }

    /// Wrapping multiplication (low 256 bits of the product).
    pub const fn mul(self, rhs: Uint256) -> Uint256 {
        let (hi, lo) = self.lo.mul_full(rhs.lo);
        let hi = hi.add(self.hi.mul(rhs.lo));
        let hi = hi.add(self.lo.mul(rhs.hi));
        Uint256 { hi, lo }
    }

    /// Full 512-bit product as `(high, low)` halves.
    pub const fn mul_full(self, rhs: Uint256) -> (Uint256, Uint256) {
        let (l1, l0) = self.lo.mul_full(rhs.lo);
        let (h1, h0) = self.hi.mul_full(rhs.hi);
        let (t0, t1) = self.lo.mul_full(rhs.hi);
        let (t2, t3) = self.hi.mul_full(rhs.lo);

        let (m, c0) = l1.add_carry(t1, 0);
        let (m, c1) = m.add_carry(t3, 0);
        let lo = Uint256 { hi: m, lo: l0 };

        let (h, c0) = h0.add_carry(t0, c0);
        let (h, c1) = h.add_carry(t2, c1);
        let hi = Uint256 {
            hi: h1.add(Uint128::from_u64(c0 + c1)),
            lo: h,
        };
        (hi, lo)
    }

    /// Left shift; `n >= 256` yields zero.
    #[inline]
    pub const fn shl(self, n: u32) -> Uint256 {
        match n {
            0 => self,
            1..=127 => Uint256 {
                hi: self.hi.shl(n).or(self.lo.shr(128 - n)),
                lo: self.lo.shl(n),
            },
            128..=255 => Uint256 {
                hi: self.lo.shl(n - 128),
                lo: Uint128::ZERO,
            },
            _ => Uint256::ZERO,
        }
    }

    /// Right shift; `n >= 256` yields zero.
    #[inline]
    pub const fn shr(self, n: u32) -> Uint256 {
        match n {
            0 => self,
            1..=127 => Uint256 {
                hi: self.hi.shr(n),
                lo: self.lo.shr(n).or(self.hi.shl(128 - n)),
            },
            128..=255 => Uint256 {
                hi: Uint128::ZERO,
                lo: self.hi.shr(n - 128),
            },
            _ => Uint256::ZERO,
        }
    }

    // Divide by a small divisor, limb by limb; used by Display.
    fn divmod_u64(self, d: u64) -> (Uint256, u64) {
        let (h_hi, h_lo) = self.hi.parts();
        let (l_hi, l_lo) = self.lo.parts();
        let mut rem = 0u128;
        let mut out = [0u64; 4];
        for (i, limb) in [h_hi, h_lo, l_hi, l_lo].into_iter().enumerate() {
            let cur = (rem << 64) | limb as u128;
            out[i] = (cur / d as u128) as u64;
            rem = cur % d as u128;
        }
        (
            Uint256 {
                hi: Uint128::new(out[0], out[1]),
                lo: Uint128::new(out[2], out[3]),
            },
            rem as u64,
        )
    }
}

impl From<u64> for Uint256 {
    #[inline(always)]
    fn from(v: u64) -> Uint256 {
        Uint256::from_u64(v)
    }
}

impl From<u128> for Uint256 {
    #[inline(always)]
    fn from(v: u128) -> Uint256 {
        Uint256::from_u128(v)
    }
}

impl core::ops::BitAnd for Uint256 {
    type Output = Uint256;
    #[inline(always)]
    fn bitand(self, rhs: Uint256) -> Uint256 {
        Uint256 {
            hi: self.hi & rhs.hi,
            lo: self.lo & rhs.lo,
        }
    }
}

impl core::ops::BitOr for Uint256 {
    type Output = Uint256;
    #[inline(always)]
    fn bitor(self, rhs: Uint256) -> Uint256 {
        Uint256 {
            hi: self.hi | rhs.hi,
            lo: self.lo | rhs.lo,
        }
    }
}

impl core::ops::BitXor for Uint256 {
    type Output = Uint256;
    #[inline(always)]
    fn bitxor(self, rhs: Uint256) -> Uint256 {
        Uint256 {
            hi: self.hi ^ rhs.hi,
            lo: self.lo ^ rhs.lo,
        }
    }
}

impl core::ops::Not for Uint256 {
    type Output = Uint256;
    #[inline(always)]
    fn not(self) -> Uint256 {
        Uint256 {
            hi: !self.hi,
            lo: !self.lo,
        }
    }
}

impl core::ops::Shl<u32> for Uint256 {
    type Output = Uint256;
    #[inline(always)]
    fn shl(self, n: u32) -> Uint256 {
        Uint256::shl(self, n)
    }
}

impl core::ops::Shr<u32> for Uint256 {
    type Output = Uint256;
    #[inline(always)]
    fn shr(self, n: u32) -> Uint256 {
        Uint256::shr(self, n)
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        // Peel 19 decimal digits at a time (largest power of ten in u64).
        const CHUNK: u64 = 10_000_000_000_000_000_000;
        let mut rest = *self;
        let mut chunks = [0u64; 5];
        let mut n = 0;
        while !rest.is_zero() {
            let (q, r) = rest.divmod_u64(CHUNK);
            chunks[n] = r;
            n += 1;
            rest = q;
        }
        write!(f, "{}", chunks[n - 1])?;
        for &c in chunks[..n - 1].iter().rev() {
            write!(f, "{c:019}")?;
        }
        Ok(())
    }
}
