// ============================================================================
// BigInteger Conversion and Output
// Text rendering, native-integer conversion, serialization
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;

use super::{BigIntError, BigInteger};

mod sealed {
    pub trait Sealed {}
}

/// Native integer types a [`BigInteger`] can convert into.
///
/// Implemented for the primitive signed and unsigned integers; this trait is
/// sealed and not implementable outside the crate.
pub trait FromBigInteger: sealed::Sealed + Sized {
    #[doc(hidden)]
    fn from_big(value: &BigInteger) -> Option<Self>;
}

macro_rules! impl_from_big {
    ($($t:ty),*) => {
        $(
        impl sealed::Sealed for $t {}

        impl FromBigInteger for $t {
            fn from_big(value: &BigInteger) -> Option<$t> {
                if value.compare(&BigInteger::from(<$t>::MIN)) == Ordering::Less
                    || value.compare(&BigInteger::from(<$t>::MAX)) == Ordering::Greater
                {
                    return None;
                }
                // Horner's rule in base 10000, most significant group first.
                // The bounds check above keeps every prefix inside i128.
                let mut n: i128 = 0;
                if value.is_negative() {
                    for i in (0..value.group_count()).rev() {
                        n = n * 10_000 - i128::from(value.group(i));
                    }
                } else {
                    for i in (0..value.group_count()).rev() {
                        n = n * 10_000 + i128::from(value.group(i));
                    }
                }
                <$t>::try_from(n).ok()
            }
        }

        impl TryFrom<&BigInteger> for $t {
            type Error = BigIntError;

            fn try_from(value: &BigInteger) -> Result<$t, BigIntError> {
                value.to_integer().ok_or(BigIntError::Overflow)
            }
        }
        )*
    };
}

impl_from_big!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl BigInteger {
    /// Converts to a native integer if the value fits its range.
    ///
    /// Out-of-range conversion is an expected, checkable outcome, so it
    /// reports as `None` rather than an error.
    ///
    /// # Example
    /// ```
    /// use big_integer::BigInteger;
    ///
    /// let b = BigInteger::from(2147483647);
    /// assert_eq!(b.to_integer::<i32>(), Some(2147483647));
    /// assert_eq!(b.checked_add(&BigInteger::from(1)).unwrap().to_integer::<i32>(), None);
    /// ```
    #[inline]
    pub fn to_integer<T: FromBigInteger>(&self) -> Option<T> {
        T::from_big(self)
    }

    /// The decimal text of the magnitude: most significant group unpadded,
    /// every later group zero-padded to four digits.
    pub(crate) fn magnitude_string(&self) -> String {
        use fmt::Write as _;

        let count = self.group_count();
        let mut text = String::with_capacity(count * 4 + 1);
        let _ = write!(text, "{}", self.group(count - 1));
        for i in (0..count - 1).rev() {
            let _ = write!(text, "{:04}", self.group(i));
        }
        text
    }

    /// Writes the decimal form to stdout in one call, optionally followed
    /// by a separator. Buffered output beats the formatting machinery when
    /// printing many large values.
    pub fn print(&self, separator: Option<char>) {
        let mut text = String::with_capacity(self.group_count() * 4 + 2);
        if self.is_negative() {
            text.push('-');
        }
        text.push_str(&self.magnitude_string());
        if let Some(sep) = separator {
            text.push(sep);
        }
        let stdout = std::io::stdout();
        let _ = stdout.lock().write_all(text.as_bytes());
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(&self.magnitude_string())
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}

// ============================================================================
// Serde (wire form is the decimal string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BigInteger {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInteger {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BigIntegerVisitor;

        impl serde::de::Visitor<'_> for BigIntegerVisitor {
            type Value = BigInteger;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal integer string")
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<BigInteger, E> {
                s.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BigIntegerVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(big("0").to_string(), "0");
        assert_eq!(big("42").to_string(), "42");
        assert_eq!(big("10000").to_string(), "10000");
        // Interior groups are zero-padded
        assert_eq!(big("100000001").to_string(), "100000001");
        assert_eq!(big("12000034000056").to_string(), "12000034000056");
        assert_eq!(big("-9000000001").to_string(), "-9000000001");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", big("-17")), "BigInteger(-17)");
    }

    #[test]
    fn test_to_integer_in_range() {
        assert_eq!(big("0").to_integer::<i32>(), Some(0));
        assert_eq!(big("2147483647").to_integer::<i32>(), Some(i32::MAX));
        assert_eq!(big("-2147483648").to_integer::<i32>(), Some(i32::MIN));
        assert_eq!(big("255").to_integer::<u8>(), Some(255));
        assert_eq!(
            big("18446744073709551615").to_integer::<u64>(),
            Some(u64::MAX)
        );
        assert_eq!(
            big("-9223372036854775808").to_integer::<i64>(),
            Some(i64::MIN)
        );
    }

    #[test]
    fn test_to_integer_out_of_range() {
        assert_eq!(big("2147483648").to_integer::<i32>(), None);
        assert_eq!(big("-2147483649").to_integer::<i32>(), None);
        assert_eq!(big("-1").to_integer::<u64>(), None);
        assert_eq!(big("256").to_integer::<u8>(), None);
        assert_eq!(big("18446744073709551616").to_integer::<u64>(), None);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(i64::try_from(&big("123456789")), Ok(123_456_789_i64));
        assert_eq!(u8::try_from(&big("300")), Err(BigIntError::Overflow));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let value = big("-123456789012345678901234567890");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        let back: BigInteger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
