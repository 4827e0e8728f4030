// ============================================================================
// BigInteger Parsing
// Decimal and scientific-notation grammar, stream input
// ============================================================================
//
// An integer string satisfies the following rules:
//   1. At most one sign, and only at the front.
//   2. No superfluous zero in front of the number.
//   3. General notation, or standard scientific notation "aEb" with
//      1 <= |a| < 10 and b >= 1.
//
// The matching regular expression:
//   ^[+-]?(0|[1-9][0-9]*|[1-9](\.[0-9]+)?[eE]\+?[1-9][0-9]*)$

use std::io;
use std::str::FromStr;

use super::{BigIntError, BigIntResult, BigInteger, GroupVec, Sign, MAX_GROUPS};

/// Shape of a validated integer string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberForm {
    Zero,
    PositiveInteger,
    ScientificNotation,
}

#[inline]
fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
fn is_nonzero_digit(b: u8) -> bool {
    (b'1'..=b'9').contains(&b)
}

/// Validates the unsigned part of the input against the grammar and
/// reports which alternative matched.
fn classify(bytes: &[u8]) -> BigIntResult<NumberForm> {
    let len = bytes.len();
    if len == 0 {
        return Err(BigIntError::InvalidFormat);
    }
    if bytes[0] == b'0' {
        if len != 1 {
            return Err(BigIntError::InvalidFormat);
        }
        return Ok(NumberForm::Zero);
    }
    if !is_nonzero_digit(bytes[0]) {
        return Err(BigIntError::InvalidFormat);
    }
    let mut i = 1;
    if i < len && (bytes[i] == b'.' || bytes[i] == b'e' || bytes[i] == b'E') {
        if bytes[i] == b'.' {
            i += 1;
            if i >= len || !is_digit(bytes[i]) {
                return Err(BigIntError::InvalidFormat);
            }
            while i < len && is_digit(bytes[i]) {
                i += 1;
            }
            if i >= len || (bytes[i] != b'e' && bytes[i] != b'E') {
                return Err(BigIntError::InvalidFormat);
            }
        }
        i += 1;
        if i < len && bytes[i] == b'+' {
            i += 1;
        }
        if i >= len || !is_nonzero_digit(bytes[i]) {
            return Err(BigIntError::InvalidFormat);
        }
        while i < len && is_digit(bytes[i]) {
            i += 1;
        }
        if i != len {
            return Err(BigIntError::InvalidFormat);
        }
        return Ok(NumberForm::ScientificNotation);
    }
    while i < len && is_digit(bytes[i]) {
        i += 1;
    }
    if i != len {
        return Err(BigIntError::InvalidFormat);
    }
    Ok(NumberForm::PositiveInteger)
}

/// Value of a run of decimal digit bytes short enough to fit one group.
#[inline]
fn group_value(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
}

impl BigInteger {
    /// Builds a positive value from decimal digit bytes, consumed in
    /// four-digit chunks from the least significant end.
    fn from_decimal_digits(digits: &[u8]) -> BigIntResult<Self> {
        let mut groups = GroupVec::with_capacity(digits.len() / 4 + 1);
        let mut end = digits.len();
        while end > 4 {
            if groups.len() >= MAX_GROUPS {
                return Err(BigIntError::Overflow);
            }
            groups.push(group_value(&digits[end - 4..end]));
            end -= 4;
        }
        if groups.len() >= MAX_GROUPS {
            return Err(BigIntError::Overflow);
        }
        groups.push(group_value(&digits[..end]));
        Ok(Self::from_parts(Sign::Positive, groups))
    }

    /// Builds a value from a validated scientific-notation body:
    /// mantissa digits shifted left by `exponent - fraction_len`.
    fn from_scientific(bytes: &[u8]) -> BigIntResult<Self> {
        let epos = bytes
            .iter()
            .position(|b| *b == b'e' || *b == b'E')
            .ok_or(BigIntError::InvalidFormat)?;
        let fraction: &[u8] = if bytes.get(1) == Some(&b'.') {
            &bytes[2..epos]
        } else {
            &[]
        };
        let mut exponent_digits = &bytes[epos + 1..];
        if exponent_digits.first() == Some(&b'+') {
            exponent_digits = &exponent_digits[1..];
        }
        // An exponent too large for u64 cannot fit the digit cap either
        let exponent: u64 = std::str::from_utf8(exponent_digits)
            .map_err(|_| BigIntError::InvalidFormat)?
            .parse()
            .map_err(|_| BigIntError::Overflow)?;

        let fraction_len = fraction.len() as u64;
        if exponent < fraction_len {
            // The value would have fractional digits left over
            return Err(BigIntError::InvalidFormat);
        }

        let mut mantissa = Vec::with_capacity(1 + fraction.len());
        mantissa.push(bytes[0]);
        mantissa.extend_from_slice(fraction);
        let mut value = Self::from_decimal_digits(&mantissa)?;
        value.shift10_left(exponent - fraction_len)?;
        Ok(value)
    }

    /// Reads one whitespace-delimited token from `reader` and parses it.
    ///
    /// # Errors
    /// Returns `InvalidFormat` on I/O failure, end of input with no token,
    /// or a token that rejects the grammar.
    pub fn read_token<R: io::BufRead>(reader: &mut R) -> BigIntResult<Self> {
        let mut token = Vec::new();
        let mut in_token = false;
        loop {
            let available = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(_) => return Err(BigIntError::InvalidFormat),
            };
            if available.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut finished = false;
            for &byte in available {
                consumed += 1;
                if byte.is_ascii_whitespace() {
                    if in_token {
                        finished = true;
                        break;
                    }
                } else {
                    in_token = true;
                    token.push(byte);
                }
            }
            reader.consume(consumed);
            if finished {
                break;
            }
        }
        let text = std::str::from_utf8(&token).map_err(|_| BigIntError::InvalidFormat)?;
        text.parse()
    }
}

impl FromStr for BigInteger {
    type Err = BigIntError;

    /// Parses a decimal or scientific-notation integer string.
    ///
    /// # Examples
    /// - `"0"`, `"-42"`, `"123456789012345678901234567890"`
    /// - `"1e3"` -> 1000, `"2.5e3"` -> 2500, `"-1.25E+4"` -> -12500
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let (negative, body) = match bytes.first() {
            Some(b'+') => (false, &bytes[1..]),
            Some(b'-') => (true, &bytes[1..]),
            _ => (false, bytes),
        };
        let mut value = match classify(body)? {
            NumberForm::Zero => Self::zero(),
            NumberForm::PositiveInteger => Self::from_decimal_digits(body)?,
            NumberForm::ScientificNotation => Self::from_scientific(body)?,
        };
        if negative {
            value.set_sign(Sign::Negative);
        }
        Ok(value)
    }
}
