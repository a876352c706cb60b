use thiserror::Error;

/// Errors returned when parsing a digit string into a `U256`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid base-{radix} digit {digit:?} at position {position}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },
    #[error("Too many digits: {len} exceeds the maximum of {max}")]
    TooManyDigits {
        len: usize,
        max: usize,
    },
}

/// Errors returned by the checked accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("Limb index out of bounds: {0} (expected 0..4)")]
    Limb(usize),
    #[error("Bit index out of bounds: {0} (expected 0..256)")]
    Bit(usize),
}
