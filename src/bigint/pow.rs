// ============================================================================
// BigInteger Power / Shift
// Exponentiation by squaring plus decimal power-of-ten scaling
// ============================================================================

use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use smallvec::smallvec;

use super::{BigIntError, BigIntResult, BigInteger, GroupVec, Sign, GROUP_DIGITS, MAX_DIGITS};

impl BigInteger {
    /// If the magnitude is exactly `10^k`, returns `k`. Sign is ignored;
    /// zero is not a power of ten.
    pub(crate) fn pow10_exponent(&self) -> Option<u64> {
        for i in 0..self.group_count() - 1 {
            if self.group(i) != 0 {
                return None;
            }
        }
        let log = match self.group(self.group_count() - 1) {
            1 => 0,
            10 => 1,
            100 => 2,
            1000 => 3,
            _ => return None,
        };
        Some((self.group_count() as u64 - 1) * GROUP_DIGITS + log)
    }

    /// Scales the magnitude up by `10^n`. The sign is left untouched.
    ///
    /// A shift aligned to the group width inserts zero groups at the low
    /// end in O(group_count); anything else renders to text, appends `n`
    /// zero characters, and reparses.
    ///
    /// # Errors
    /// Returns `Overflow` if the result would exceed the digit cap.
    pub(crate) fn shift10_left(&mut self, n: u64) -> BigIntResult<()> {
        if self.is_zero() || n == 0 {
            return Ok(());
        }
        match self.digits().checked_add(n) {
            Some(total) if total <= MAX_DIGITS => (),
            _ => return Err(BigIntError::Overflow),
        }
        if n % GROUP_DIGITS == 0 {
            let inserted = (n / GROUP_DIGITS) as usize;
            let mut groups: GroupVec = smallvec![0; inserted];
            groups.extend_from_slice(&self.groups);
            self.groups = groups;
        } else {
            tracing::debug!(shift = n, "non-aligned decimal shift, string round-trip");
            let mut text = self.magnitude_string();
            text.extend(std::iter::repeat('0').take(n as usize));
            let parsed: Self = text.parse()?;
            self.groups = parsed.groups;
        }
        Ok(())
    }

    /// Scales the magnitude down by `10^n`, truncating. The sign is left
    /// untouched by a nonzero result; shifting out every digit leaves
    /// canonical zero.
    pub(crate) fn shift10_right(&mut self, n: u64) -> BigIntResult<()> {
        if self.is_zero() || n == 0 {
            return Ok(());
        }
        if n >= self.digits() {
            self.groups = smallvec![0];
            self.sign = Sign::Positive;
            return Ok(());
        }
        if n % GROUP_DIGITS == 0 {
            let removed = (n / GROUP_DIGITS) as usize;
            self.groups.drain(0..removed);
        } else {
            tracing::debug!(shift = n, "non-aligned decimal shift, string round-trip");
            let mut text = self.magnitude_string();
            text.truncate(text.len() - n as usize);
            let parsed: Self = text.parse()?;
            self.groups = parsed.groups;
        }
        Ok(())
    }

    /// Raises `self` to the power `n`.
    ///
    /// Algebraic special cases short-circuit (`x^0`, `x^1`, `(±1)^n`,
    /// power-of-ten bases); the general case is exponentiation by squaring
    /// with `n / 2` computed through the division engine. A negative
    /// exponent truncates to zero for any base of magnitude above one.
    ///
    /// # Errors
    /// Returns `Overflow` if the base is zero with a non-positive exponent,
    /// if the exponent does not fit the internal shift bound, or if the
    /// result would exceed the digit cap.
    pub fn power(&self, n: &Self) -> BigIntResult<Self> {
        if self.is_zero() {
            if !n.is_positive() {
                return Err(BigIntError::Overflow);
            }
            return Ok(Self::zero());
        }
        if n.is_zero() {
            return Ok(Self::from(1));
        }
        if self.group_count() == 1 && self.group(0) == 1 {
            // 1^n, or (-1)^n settled by the exponent's parity
            if !self.is_negative() || n.is_even() {
                return Ok(Self::from(1));
            }
            return Ok(Self::from(-1));
        }
        if n.is_negative() {
            // |base| > 1, truncated toward zero
            return Ok(Self::zero());
        }
        if n.group_count() == 1 && n.group(0) == 1 {
            return Ok(self.clone());
        }

        if let Some(base_exponent) = self.pow10_exponent() {
            let exponent: u32 = n.to_integer().ok_or(BigIntError::Overflow)?;
            let shift = base_exponent
                .checked_mul(u64::from(exponent))
                .ok_or(BigIntError::Overflow)?;
            if shift >= MAX_DIGITS {
                return Err(BigIntError::Overflow);
            }
            let mut result = Self::from(1);
            result.shift10_left(shift)?;
            if self.is_negative() && n.is_odd() {
                result.set_sign(Sign::Negative);
            }
            return Ok(result);
        }

        // Digit growth bound: the result has at least (digits-1)*n digits
        let exponent: u32 = n.to_integer().ok_or(BigIntError::Overflow)?;
        let growth = (self.digits() - 1)
            .checked_mul(u64::from(exponent))
            .ok_or(BigIntError::Overflow)?;
        if growth >= MAX_DIGITS {
            return Err(BigIntError::Overflow);
        }

        let half_exponent = n.checked_div(&Self::from(2))?;
        let half = self.power(&half_exponent)?;
        let mut result = half.checked_mul(&half)?;
        if n.is_odd() {
            result = result.checked_mul(self)?;
        }
        Ok(result)
    }

    /// Checked left shift: multiplies by `2^n`.
    ///
    /// This scales by a power of two through the power engine; it is not a
    /// bit-pattern shift.
    ///
    /// # Errors
    /// Returns `NegativeShiftAmount` for a negative `n`, or `Overflow` if
    /// the result would exceed the digit cap.
    pub fn checked_shl(&self, n: &Self) -> BigIntResult<Self> {
        if n.is_negative() {
            return Err(BigIntError::NegativeShiftAmount);
        }
        let factor = Self::from(2).power(n)?;
        self.checked_mul(&factor)
    }

    /// Checked right shift: divides by `2^n`, truncating toward zero.
    ///
    /// # Errors
    /// Returns `NegativeShiftAmount` for a negative `n`, or `Overflow` if
    /// the exponent exceeds the internal shift bound.
    pub fn checked_shr(&self, n: &Self) -> BigIntResult<Self> {
        if n.is_negative() {
            return Err(BigIntError::NegativeShiftAmount);
        }
        let factor = Self::from(2).power(n)?;
        self.checked_div(&factor)
    }
}

impl Shl<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn shl(self, n: &BigInteger) -> BigInteger {
        self.checked_shl(n).expect("BigInteger left shift failed")
    }
}

impl Shl for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn shl(self, n: BigInteger) -> BigInteger {
        &self << &n
    }
}

impl ShlAssign<&BigInteger> for BigInteger {
    fn shl_assign(&mut self, n: &BigInteger) {
        *self = &*self << n;
    }
}

impl ShlAssign for BigInteger {
    fn shl_assign(&mut self, n: BigInteger) {
        *self = &*self << &n;
    }
}

impl Shr<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn shr(self, n: &BigInteger) -> BigInteger {
        self.checked_shr(n).expect("BigInteger right shift failed")
    }
}

impl Shr for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn shr(self, n: BigInteger) -> BigInteger {
        &self >> &n
    }
}

impl ShrAssign<&BigInteger> for BigInteger {
    fn shr_assign(&mut self, n: &BigInteger) {
        *self = &*self >> n;
    }
}

impl ShrAssign for BigInteger {
    fn shr_assign(&mut self, n: BigInteger) {
        *self = &*self >> &n;
    }
}
