// ============================================================================
// BigInteger Errors
// Error types for arbitrary-precision integer operations
// ============================================================================

use std::fmt;

/// Errors that can occur during arbitrary-precision integer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BigIntError {
    /// Input string does not match the integer or scientific-notation grammar
    InvalidFormat,
    /// Attempted division or modulus by zero
    DivisionByZero,
    /// Group count, digit count, or an internal shift bound exceeded its cap
    Overflow,
    /// Shift operator invoked with a negative amount
    NegativeShiftAmount,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::InvalidFormat => {
                write!(f, "invalid format: not an integer expression")
            },
            BigIntError::DivisionByZero => write!(f, "division by zero"),
            BigIntError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum magnitude")
            },
            BigIntError::NegativeShiftAmount => {
                write!(f, "negative shift amount: shift requires a non-negative exponent")
            },
        }
    }
}

impl std::error::Error for BigIntError {}

/// Result type alias for integer operations
pub type BigIntResult<T> = Result<T, BigIntError>;
