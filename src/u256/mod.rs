mod arith;
mod convert;
#[cfg(feature = "serde")]
mod serializable;

use std::cmp::Ordering;

use crate::IndexError;

/// Fixed-width 256-bit unsigned integer.
///
/// Stored as four 64-bit limbs, least significant first.
/// All arithmetic wraps modulo 2^256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U256([u64; 4]);

impl U256 {
    pub const BITS: u32 = 256;
    pub const MAX: U256 = U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX]);
    pub const ONE: U256 = U256([1, 0, 0, 0]);
    pub const ZERO: U256 = U256([0, 0, 0, 0]);

    /// Create a new U256 from four u64 values (from least significant to most significant)
    pub const fn new(lowest: u64, low: u64, high: u64, highest: u64) -> U256 {
        U256([lowest, low, high, highest])
    }

    /// Create a U256 holding `value` in its lowest limb
    pub const fn from_u64(value: u64) -> U256 {
        U256([value, 0, 0, 0])
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&x| x == 0)
    }

    /// All four limbs, least significant first
    #[inline(always)]
    pub const fn limbs(&self) -> [u64; 4] {
        self.0
    }

    /// Get the 64-bit limb at `index`, where 0 is the least significant.
    ///
    /// Any index above 3 is rejected with [`IndexError::Limb`].
    pub fn limb(&self, index: usize) -> Result<u64, IndexError> {
        self.0.get(index)
            .copied()
            .ok_or(IndexError::Limb(index))
    }

    /// Check whether bit `index` is set, where bit 0 is the least significant bit of limb 0.
    ///
    /// Any index above 255 is rejected with [`IndexError::Bit`].
    pub fn bit_is_set(&self, index: usize) -> Result<bool, IndexError> {
        if index >= Self::BITS as usize {
            return Err(IndexError::Bit(index));
        }

        Ok(self.bit(index))
    }

    // Caller guarantees index < 256
    #[inline(always)]
    fn bit(&self, index: usize) -> bool {
        (self.0[index / 64] >> (index % 64)) & 1 == 1
    }

    // Index of the most significant non-zero limb, None for zero
    fn top_limb(&self) -> Option<usize> {
        self.0.iter().rposition(|&x| x != 0)
    }

    /// Export the data as a big-endian byte array
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(self.0.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        bytes
    }

    /// Import the data from a big-endian byte array
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut data = [0u64; 4];
        for (limb, chunk) in data.iter_mut().rev().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }

        U256(data)
    }

    /// Export the data as a little-endian byte array
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }

        bytes
    }

    /// Import the data from a little-endian byte array
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut data = [0u64; 4];
        for (limb, chunk) in data.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }

        U256(data)
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare from the most significant part to the least significant
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        U256::from_u64(value as u64)
    }
}

impl From<u16> for U256 {
    fn from(value: u16) -> Self {
        U256::from_u64(value as u64)
    }
}

impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        U256::from_u64(value as u64)
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256::from_u64(value)
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        U256([value as u64, (value >> 64) as u64, 0, 0])
    }
}

impl From<[u64; 4]> for U256 {
    fn from(limbs: [u64; 4]) -> Self {
        U256(limbs)
    }
}
