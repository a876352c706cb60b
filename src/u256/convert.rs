use core::fmt;
use std::{fmt::Write, str::FromStr};

use crate::ParseError;
use super::U256;

impl U256 {
    /// Parse a string of hexadecimal digits.
    ///
    /// No `0x` prefix, either case, at most 64 digits. The empty string is zero.
    pub fn from_hex(s: &str) -> Result<U256, ParseError> {
        Self::from_str_radix_pow2(s, 16)
    }

    /// Parse a string of binary digits, at most 256 of them. The empty string is zero.
    pub fn from_bin(s: &str) -> Result<U256, ParseError> {
        Self::from_str_radix_pow2(s, 2)
    }

    // Digits are packed into limbs from the right: each group of
    // 64 / log2(radix) trailing digits fills the next more significant limb
    fn from_str_radix_pow2(s: &str, radix: u32) -> Result<U256, ParseError> {
        debug_assert!(radix.is_power_of_two() && radix <= 16);

        let digit_bits = radix.trailing_zeros() as usize;
        let digits_per_limb = 64 / digit_bits;
        let max = Self::BITS as usize / digit_bits;

        if let Some((position, digit)) = s.chars()
            .enumerate()
            .find(|(_, c)| !c.is_digit(radix))
        {
            debug!("rejecting base-{} input: invalid digit {:?} at {}", radix, digit, position);
            return Err(ParseError::InvalidDigit { digit, position, radix });
        }

        // Only ASCII digits remain, so the byte length is the digit count
        let len = s.len();
        if len > max {
            debug!("rejecting base-{} input: {} digits, max is {}", radix, len, max);
            return Err(ParseError::TooManyDigits { len, max });
        }

        let mut data = [0u64; 4];
        for (limb, group) in data.iter_mut().zip(s.as_bytes().rchunks(digits_per_limb)) {
            *limb = group.iter()
                .fold(0u64, |acc, &b| (acc << digit_bits) | nibble(b));
        }

        Ok(U256(data))
    }

    /// Format as canonical lowercase hex: the top non-zero limb without
    /// leading zeros, every lower limb padded to 16 digits. Zero is `"0"`.
    pub fn to_hex(&self) -> String {
        self.format_limbs(16)
    }

    /// Format as canonical binary: the top non-zero limb without
    /// leading zeros, every lower limb padded to 64 digits. Zero is `"0"`.
    pub fn to_bin(&self) -> String {
        self.format_limbs(2)
    }

    fn format_limbs(&self, radix: u32) -> String {
        let Some(top) = self.top_limb() else {
            return String::from("0");
        };

        let digit_bits = radix.trailing_zeros() as usize;
        let width = 64 / digit_bits;
        let leading = self.0[top];
        // Digits needed by the unpadded top limb, plus full width for each lower limb
        let leading_len = (64 - leading.leading_zeros() as usize).div_ceil(digit_bits);
        let mut result = String::with_capacity(leading_len + top * width);

        // Writing into a String cannot fail
        let _ = match radix {
            16 => write!(result, "{:x}", leading),
            _ => write!(result, "{:b}", leading),
        };
        for &limb in self.0[..top].iter().rev() {
            let _ = match radix {
                16 => write!(result, "{:0width$x}", limb, width = width),
                _ => write!(result, "{:0width$b}", limb, width = width),
            };
        }

        debug_assert_eq!(result.len(), leading_len + top * width);
        result
    }
}

#[inline(always)]
fn nibble(b: u8) -> u64 {
    // Input was validated beforehand
    (b as char).to_digit(16).unwrap_or(0) as u64
}

impl FromStr for U256 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_hex(s)
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.to_hex())
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_hex())
    }
}

impl fmt::Binary for U256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_bin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(U256::from_hex("0").unwrap(), U256::ZERO);
        assert_eq!(U256::from_hex("").unwrap(), U256::ZERO);
        assert_eq!(U256::from_hex("1").unwrap(), U256::ONE);
        assert_eq!(U256::from_hex("deadBEEF").unwrap(), U256::from(0xdead_beefu64));
        assert_eq!(U256::from_hex("ffffffffffffffff").unwrap(), U256::from(u64::MAX));
        assert_eq!(U256::from_hex(&"f".repeat(64)).unwrap(), U256::MAX);
    }

    #[test]
    fn test_from_hex_limb_boundary() {
        let value = U256::from_hex("10000000000000000").unwrap();
        assert_eq!(value.limbs(), [0, 1, 0, 0]);
        assert_eq!(value.to_hex(), "10000000000000000");

        let value = U256::from_hex("000000000000000000000000000000001").unwrap();
        assert_eq!(value, U256::ONE);

        let value = U256::from_hex("4000000000000000300000000000000020000000000000001").unwrap();
        assert_eq!(value.limbs(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_from_hex_invalid_digit() {
        assert_eq!(
            U256::from_hex("12g3"),
            Err(ParseError::InvalidDigit { digit: 'g', position: 2, radix: 16 })
        );
        assert_eq!(
            U256::from_hex("0x12"),
            Err(ParseError::InvalidDigit { digit: 'x', position: 1, radix: 16 })
        );
        assert!(matches!(U256::from_hex("+1"), Err(ParseError::InvalidDigit { digit: '+', .. })));
        assert!(matches!(U256::from_hex("1 2"), Err(ParseError::InvalidDigit { digit: ' ', .. })));
        assert!(matches!(U256::from_hex("é"), Err(ParseError::InvalidDigit { digit: 'é', position: 0, .. })));
    }

    #[test]
    fn test_from_hex_too_long() {
        let input = "1".repeat(65);
        assert_eq!(U256::from_hex(&input), Err(ParseError::TooManyDigits { len: 65, max: 64 }));

        // leading zeros still count towards the width
        let input = format!("0{}", "f".repeat(64));
        assert_eq!(U256::from_hex(&input), Err(ParseError::TooManyDigits { len: 65, max: 64 }));
    }

    #[test]
    fn test_from_bin() {
        assert_eq!(U256::from_bin("").unwrap(), U256::ZERO);
        assert_eq!(U256::from_bin("0").unwrap(), U256::ZERO);
        assert_eq!(U256::from_bin("110").unwrap(), U256::from(6u64));
        assert_eq!(U256::from_bin(&"1".repeat(256)).unwrap(), U256::MAX);

        let value = U256::from_bin(&format!("1{}", "0".repeat(64))).unwrap();
        assert_eq!(value.limbs(), [0, 1, 0, 0]);

        let value = U256::from_bin(&format!("1{}", "0".repeat(255))).unwrap();
        assert_eq!(value.limbs(), [0, 0, 0, 1 << 63]);
    }

    #[test]
    fn test_from_bin_errors() {
        assert_eq!(
            U256::from_bin("1012"),
            Err(ParseError::InvalidDigit { digit: '2', position: 3, radix: 2 })
        );
        assert_eq!(
            U256::from_bin(&"1".repeat(257)),
            Err(ParseError::TooManyDigits { len: 257, max: 256 })
        );
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(U256::ZERO.to_hex(), "0");
        assert_eq!(U256::ONE.to_hex(), "1");
        assert_eq!(U256::from(0xabcdefu64).to_hex(), "abcdef");
        assert_eq!(U256::MAX.to_hex(), "f".repeat(64));
        assert_eq!(U256::new(0, 0, 0, 1).to_hex(), format!("1{}", "0".repeat(48)));
        assert_eq!(
            U256::new(0xf, 0, 0x1234, 0).to_hex(),
            format!("1234{}f", "0".repeat(31))
        );
    }

    #[test]
    fn test_to_hex_canonicalizes() {
        let value = U256::from_hex("000ABC").unwrap();
        assert_eq!(value.to_hex(), "abc");
        assert_eq!(U256::from_hex(&"0".repeat(64)).unwrap().to_hex(), "0");
    }

    #[test]
    fn test_to_bin() {
        assert_eq!(U256::ZERO.to_bin(), "0");
        assert_eq!(U256::from(6u64).to_bin(), "110");
        assert_eq!(U256::MAX.to_bin(), "1".repeat(256));
        assert_eq!(U256::new(1, 1, 0, 0).to_bin(), format!("1{}1", "0".repeat(63)));
    }

    #[test]
    fn test_string() {
        let value = U256::new(0x1, 0x2, 0, 0);
        assert_eq!(value.to_string(), "20000000000000001");
        assert_eq!(format!("{:x}", value), "20000000000000001");
        assert_eq!(format!("{:#x}", U256::from(255u64)), "0xff");
        assert_eq!(format!("{:08x}", U256::from(255u64)), "000000ff");
        assert_eq!(format!("{:#b}", U256::from(5u64)), "0b101");
        assert_eq!(U256::from_str("ff").unwrap(), U256::from(255u64));
        assert!("zz".parse::<U256>().is_err());
    }
}
