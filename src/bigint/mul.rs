// ============================================================================
// BigInteger Multiplication
// Schoolbook grouped multiplication with a power-of-ten shortcut
// ============================================================================

use std::ops::{Mul, MulAssign};

use smallvec::smallvec;

use super::{BigIntError, BigIntResult, BigInteger, GroupVec, Sign, BASE, MAX_DIGITS};

impl BigInteger {
    /// Schoolbook multiplication of two nonzero magnitudes.
    ///
    /// The result buffer holds `la + lb` groups; every partial product
    /// `a[i] * b[j]` lands at position `i + j` with base-10000 carry
    /// propagation, and the leftover carry flushes past the inner loop.
    fn mul_magnitudes(a: &Self, b: &Self) -> GroupVec {
        let la = a.group_count();
        let lb = b.group_count();
        let mut out: GroupVec = smallvec![0; la + lb];
        for j in 0..lb {
            let bj = u32::from(b.group(j));
            let mut carry = 0u32;
            for i in 0..la {
                let acc = u32::from(out[i + j]) + u32::from(a.group(i)) * bj + carry;
                out[i + j] = (acc % BASE) as u16;
                carry = acc / BASE;
            }
            let mut k = j + la;
            while carry > 0 {
                let acc = u32::from(out[k]) + carry;
                out[k] = (acc % BASE) as u16;
                carry = acc / BASE;
                k += 1;
            }
        }
        out
    }

    /// Checked multiplication.
    ///
    /// An n-digit by m-digit product has at least `n + m - 1` digits, so the
    /// digit cap is checked up front. A power-of-ten multiplier reduces to a
    /// decimal shift of the multiplicand.
    ///
    /// # Errors
    /// Returns `Overflow` if the result would exceed the digit cap.
    pub fn checked_mul(&self, rhs: &Self) -> BigIntResult<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }
        if self.digits() + rhs.digits() - 1 > MAX_DIGITS {
            return Err(BigIntError::Overflow);
        }
        let negative = self.is_negative() != rhs.is_negative();

        let mut result = if let Some(exponent) = rhs.pow10_exponent() {
            tracing::trace!(exponent, "power-of-ten multiplier, shifting instead");
            let mut shifted = self.absolute();
            shifted.shift10_left(exponent)?;
            shifted
        } else {
            Self::from_parts(Sign::Positive, Self::mul_magnitudes(self, rhs))
        };
        if negative {
            result.set_sign(Sign::Negative);
        }
        Ok(result)
    }
}

impl Mul<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: &BigInteger) -> BigInteger {
        self.checked_mul(rhs)
            .expect("BigInteger multiplication overflow")
    }
}

impl Mul for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn mul(self, rhs: BigInteger) -> BigInteger {
        &self * &rhs
    }
}

impl MulAssign<&BigInteger> for BigInteger {
    fn mul_assign(&mut self, rhs: &BigInteger) {
        *self = &*self * rhs;
    }
}

impl MulAssign for BigInteger {
    fn mul_assign(&mut self, rhs: BigInteger) {
        *self = &*self * &rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_zero_short_circuit() {
        assert!((big("0") * big("123456789")).is_zero());
        assert!((big("123456789") * big("0")).is_zero());
        // Canonical zero even with a negative operand
        let z = big("-5") * big("0");
        assert!(z.is_zero());
        assert!(!z.is_negative());
    }

    #[test]
    fn test_single_group() {
        assert_eq!(big("12") * big("34"), big("408"));
        assert_eq!(big("9999") * big("9999"), big("99980001"));
    }

    #[test]
    fn test_multi_group_carry() {
        assert_eq!(
            big("123456789") * big("987654321"),
            big("121932631112635269")
        );
        assert_eq!(
            big("99999999999999999999") * big("99999999999999999999"),
            big("9999999999999999999800000000000000000001")
        );
    }

    #[test]
    fn test_signs() {
        assert_eq!(big("-3") * big("4"), big("-12"));
        assert_eq!(big("3") * big("-4"), big("-12"));
        assert_eq!(big("-3") * big("-4"), big("12"));
    }

    #[test]
    fn test_power_of_ten_shortcut() {
        assert_eq!(big("100") * big("1000"), big("100000"));
        assert_eq!(big("123") * big("10000"), big("1230000"));
        assert_eq!(big("123") * big("10"), big("1230"));
        assert_eq!(big("-7") * big("100"), big("-700"));
        // Multiplying by one is the degenerate 10^0 shift
        assert_eq!(big("123456789") * big("1"), big("123456789"));
    }

    #[test]
    fn test_commutativity_samples() {
        let pairs = [("37", "91"), ("123456", "789"), ("-55", "10000001")];
        for (a, b) in pairs {
            assert_eq!(big(a) * big(b), big(b) * big(a));
        }
    }

    #[test]
    fn test_mul_assign_aliasing() {
        let mut a = big("99999");
        let copy = a.clone();
        a *= copy;
        assert_eq!(a, big("9999800001"));
    }
}
