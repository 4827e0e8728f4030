// ============================================================================
// BigInteger Division / Modulus
// Long division with a binary search for each quotient digit
// ============================================================================

use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use smallvec::smallvec;

use super::{BigIntError, BigIntResult, BigInteger, GroupVec, Sign, GROUP_DIGITS};

impl BigInteger {
    /// The value formed by the top `n` groups of the magnitude.
    fn high_range(&self, n: usize) -> Self {
        let g = self.group_count();
        let slice = &self.groups[g - n..];
        Self::from_parts(Sign::Positive, GroupVec::from_slice(slice))
    }

    /// Binary search for the quotient digit `q` in `[1, 9999]` such that
    /// `divisor * q <= window < divisor * (q + 1)`.
    ///
    /// The interval keeps `low <= q <= high`; once it collapses to two
    /// candidates, the larger one that still satisfies `<=` wins.
    fn search_quotient_digit(window: &Self, divisor: &Self) -> BigIntResult<u16> {
        let mut low: u16 = 1;
        let mut high: u16 = 9999;
        while low < high {
            if low + 1 == high {
                let upper = divisor.checked_mul(&Self::from(high))?;
                return Ok(if window.mag_cmp(&upper) == Ordering::Less {
                    low
                } else {
                    high
                });
            }
            let half = (low + high) >> 1;
            let probe = divisor.checked_mul(&Self::from(half))?;
            if window.mag_cmp(&probe) == Ordering::Less {
                high = half - 1;
            } else {
                low = half;
            }
        }
        Ok(low)
    }

    /// Long division of two magnitudes with `dividend > divisor > 0`.
    ///
    /// Each round takes the top `divisor_groups` groups of the shrinking
    /// dividend as a window (one more group when that window is still
    /// smaller than the divisor), finds the quotient digit by binary
    /// search, and subtracts the shifted multiple.
    fn div_magnitudes(dividend: &Self, divisor: &Self) -> BigIntResult<GroupVec> {
        let g2 = divisor.group_count();
        let mut rem = dividend.absolute();
        let mut quotient: GroupVec = smallvec![0; dividend.group_count()];

        loop {
            let g1 = rem.group_count();
            if g1 < g2 {
                break;
            }
            let mut window = rem.high_range(g2);
            let mut extra = 0;
            if window.mag_cmp(divisor) == Ordering::Less {
                if g1 == g2 {
                    break;
                }
                extra = 1;
                window = rem.high_range(g2 + 1);
            }
            let position = g1 - g2 - extra;
            let digit = Self::search_quotient_digit(&window, divisor)?;
            let mut multiple = divisor.checked_mul(&Self::from(digit))?;
            multiple.shift10_left(position as u64 * GROUP_DIGITS)?;
            rem = rem.checked_sub(&multiple)?;
            quotient[position] = digit;
        }
        Ok(quotient)
    }

    /// Checked division, truncating toward zero.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the divisor is zero.
    pub fn checked_div(&self, divisor: &Self) -> BigIntResult<Self> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let negative = self.is_negative() != divisor.is_negative();
        let magnitude = self.absolute();
        let divisor_magnitude = divisor.absolute();

        let mut result = match magnitude.mag_cmp(&divisor_magnitude) {
            Ordering::Less => Self::zero(),
            Ordering::Equal => Self::from(1),
            Ordering::Greater => {
                if let Some(exponent) = divisor_magnitude.pow10_exponent() {
                    tracing::trace!(exponent, "power-of-ten divisor, shifting instead");
                    let mut shifted = magnitude;
                    shifted.shift10_right(exponent)?;
                    shifted
                } else {
                    let groups = Self::div_magnitudes(&magnitude, &divisor_magnitude)?;
                    Self::from_parts(Sign::Positive, groups)
                }
            },
        };
        if negative {
            result.set_sign(Sign::Negative);
        }
        Ok(result)
    }

    /// Checked remainder, defined by `(a / b) * b + (a % b) == a` and
    /// computed from the division result rather than an independent
    /// remainder algorithm (one extra multiply and subtract).
    ///
    /// The remainder takes the dividend's sign.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the modulus is zero.
    pub fn checked_rem(&self, modulus: &Self) -> BigIntResult<Self> {
        if modulus.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let quotient = self.checked_div(modulus)?;
        let product = quotient.checked_mul(modulus)?;
        self.checked_sub(&product)
    }
}

impl Div<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: &BigInteger) -> BigInteger {
        self.checked_div(rhs).expect("BigInteger division by zero")
    }
}

impl Div for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn div(self, rhs: BigInteger) -> BigInteger {
        &self / &rhs
    }
}

impl DivAssign<&BigInteger> for BigInteger {
    fn div_assign(&mut self, rhs: &BigInteger) {
        *self = &*self / rhs;
    }
}

impl DivAssign for BigInteger {
    fn div_assign(&mut self, rhs: BigInteger) {
        *self = &*self / &rhs;
    }
}

impl Rem<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn rem(self, rhs: &BigInteger) -> BigInteger {
        self.checked_rem(rhs).expect("BigInteger modulus by zero")
    }
}

impl Rem for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn rem(self, rhs: BigInteger) -> BigInteger {
        &self % &rhs
    }
}

impl RemAssign<&BigInteger> for BigInteger {
    fn rem_assign(&mut self, rhs: &BigInteger) {
        *self = &*self % rhs;
    }
}

impl RemAssign for BigInteger {
    fn rem_assign(&mut self, rhs: BigInteger) {
        *self = &*self % &rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            big("1").checked_div(&big("0")),
            Err(BigIntError::DivisionByZero)
        );
        assert_eq!(
            big("1").checked_rem(&big("0")),
            Err(BigIntError::DivisionByZero)
        );
        assert_eq!(
            big("0").checked_div(&big("0")),
            Err(BigIntError::DivisionByZero)
        );
    }

    #[test]
    fn test_smaller_dividend() {
        assert!((big("3") / big("5")).is_zero());
        assert!((big("9999") / big("10000")).is_zero());
        assert!((big("0") / big("7")).is_zero());
    }

    #[test]
    fn test_equal_magnitudes() {
        assert_eq!(big("12345") / big("12345"), big("1"));
        assert_eq!(big("-12345") / big("12345"), big("-1"));
    }

    #[test]
    fn test_single_digit_quotients() {
        assert_eq!(big("20") / big("3"), big("6"));
        assert_eq!(big("9999") / big("2"), big("4999"));
    }

    #[test]
    fn test_multi_group_division() {
        assert_eq!(big("121932631112635269") / big("987654321"), big("123456789"));
        assert_eq!(big("123456789012345678") / big("1000000007"), big("123456788"));
        assert_eq!(
            big("98765432109876543210") / big("12345"),
            big("8000440025101380")
        );
        assert_eq!(big("98765432109876543210") % big("12345"), big("7110"));
    }

    #[test]
    fn test_power_of_ten_shortcut() {
        assert_eq!(big("100000") / big("100"), big("1000"));
        assert_eq!(big("1230000") / big("10000"), big("123"));
        assert_eq!(big("123456") / big("10"), big("12345"));
    }

    #[test]
    fn test_signs() {
        assert_eq!(big("-12") / big("4"), big("-3"));
        assert_eq!(big("12") / big("-4"), big("-3"));
        assert_eq!(big("-12") / big("-4"), big("3"));
        // Truncation toward zero
        assert_eq!(big("-7") / big("3"), big("-2"));
    }

    #[test]
    fn test_remainder() {
        assert_eq!(big("20") % big("3"), big("2"));
        assert_eq!(big("21") % big("3"), big("0"));
        assert_eq!(big("-7") % big("3"), big("-1"));
        assert_eq!(big("7") % big("-3"), big("1"));
    }

    #[test]
    fn test_division_law() {
        let cases = [
            ("123456789012345678901234567890", "987654321"),
            ("-123456789012345678901234567890", "987654321"),
            ("123456789012345678901234567890", "-987654321"),
            ("99999999999999999999", "10007"),
            ("10007", "99999999999999999999"),
        ];
        for (a, b) in cases {
            let a = big(a);
            let b = big(b);
            let q = a.checked_div(&b).unwrap();
            let r = a.checked_rem(&b).unwrap();
            assert_eq!(q.checked_mul(&b).unwrap().checked_add(&r).unwrap(), a);
        }
    }

    #[test]
    fn test_equal_window_multi_group_divisor() {
        // Final window equals the divisor exactly: 10007 * 10001
        assert_eq!(big("100080007") / big("10007"), big("10001"));
        assert_eq!(big("100080007") % big("10007"), big("0"));
    }
}
