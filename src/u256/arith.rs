use std::ops::{
    Add,
    AddAssign,
    Mul,
    MulAssign,
    Shl,
    ShlAssign,
    Sub,
    SubAssign
};

use super::U256;

impl U256 {
    /// Addition modulo 2^256, the carry out of the top limb is discarded
    pub fn wrapping_add(self, other: U256) -> U256 {
        let mut result = [0u64; 4];
        let mut carry = 0u64;

        for i in 0..4 {
            let (res, overflow1) = self.0[i].overflowing_add(other.0[i]);
            let (res, overflow2) = res.overflowing_add(carry);
            result[i] = res;
            carry = (overflow1 | overflow2) as u64;
        }

        U256(result)
    }

    /// Subtraction modulo 2^256, the borrow out of the top limb is discarded
    pub fn wrapping_sub(self, other: U256) -> U256 {
        let mut result = [0u64; 4];
        let mut borrow = 0u64;

        for i in 0..4 {
            let (res, overflow1) = self.0[i].overflowing_sub(other.0[i]);
            let (res, overflow2) = res.overflowing_sub(borrow);
            result[i] = res;
            borrow = (overflow1 | overflow2) as u64;
        }

        U256(result)
    }

    /// Shift left by `shift` bits.
    ///
    /// Bits moved past position 255 are lost and the low bits are zero filled.
    /// A shift of 256 or more gives zero.
    pub fn wrapping_shl(self, shift: u32) -> U256 {
        if shift >= Self::BITS {
            return U256::ZERO;
        }

        let mut result = [0u64; 4];
        let word_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;

        for i in (word_shift..4).rev() {
            result[i] = self.0[i - word_shift] << bit_shift;
            if bit_shift > 0 && i > word_shift {
                result[i] |= self.0[i - word_shift - 1] >> (64 - bit_shift);
            }
        }

        U256(result)
    }

    /// Multiplication modulo 2^256 using shift-and-add:
    /// for every set bit `i` of `other`, `self << i` is added to the product.
    pub fn wrapping_mul(self, other: U256) -> U256 {
        // No set bits above the top non-zero limb of the multiplier
        let bits = other.top_limb().map_or(0, |limb| (limb + 1) * 64);
        trace!("shift-and-add multiplication over {} multiplier bits", bits);

        let mut product = U256::ZERO;
        for i in 0..bits {
            if other.bit(i) {
                product = product.wrapping_add(self.wrapping_shl(i as u32));
            }
        }

        product
    }
}

impl Add for U256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for U256 {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(rhs);
    }
}

impl Sub for U256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for U256 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(rhs);
    }
}

impl Mul for U256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl MulAssign for U256 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.wrapping_mul(rhs);
    }
}

impl Shl<u32> for U256 {
    type Output = Self;

    fn shl(self, shift: u32) -> Self {
        self.wrapping_shl(shift)
    }
}

impl ShlAssign<u32> for U256 {
    fn shl_assign(&mut self, shift: u32) {
        *self = self.wrapping_shl(shift);
    }
}
