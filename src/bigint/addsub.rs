// ============================================================================
// BigInteger Addition / Subtraction
// Positive-magnitude primitives with sign dispatch layered on top
// ============================================================================

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use smallvec::smallvec;

use super::{BigIntError, BigIntResult, BigInteger, GroupVec, Sign, BASE, MAX_GROUPS};

impl BigInteger {
    /// Adds two magnitudes group-wise with carry propagation.
    fn add_magnitudes(a: &Self, b: &Self) -> BigIntResult<GroupVec> {
        let la = a.group_count();
        let lb = b.group_count();
        let common = la.max(lb);
        let mut out = GroupVec::with_capacity(common + 1);
        let mut carry = 0u32;
        for i in 0..common {
            let mut sum = carry;
            if i < la {
                sum += u32::from(a.group(i));
            }
            if i < lb {
                sum += u32::from(b.group(i));
            }
            out.push((sum % BASE) as u16);
            carry = sum / BASE;
        }
        if carry > 0 {
            if out.len() >= MAX_GROUPS {
                return Err(BigIntError::Overflow);
            }
            out.push(carry as u16);
        }
        Ok(out)
    }

    /// Subtracts the smaller magnitude from the larger, group-wise with
    /// borrow. The flag reports whether `a` had the smaller magnitude.
    fn sub_magnitudes(a: &Self, b: &Self) -> (GroupVec, bool) {
        let (larger, smaller, negative) = match a.mag_cmp(b) {
            Ordering::Equal => return (smallvec![0], false),
            Ordering::Less => (b, a, true),
            Ordering::Greater => (a, b, false),
        };
        let ll = larger.group_count();
        let ls = smaller.group_count();
        let mut out = GroupVec::with_capacity(ll);
        let mut borrow = 0i32;
        for i in 0..ll {
            let mut diff = i32::from(larger.group(i)) - borrow;
            if i < ls {
                diff -= i32::from(smaller.group(i));
            }
            if diff < 0 {
                diff += BASE as i32;
                borrow = 1;
            } else {
                borrow = 0;
            }
            out.push(diff as u16);
        }
        (out, negative)
    }

    /// Checked addition.
    ///
    /// Dispatches on the operand signs so the positive-magnitude primitives
    /// do all the digit work:
    /// `x + (-y) = x - y`, `(-x) + y = y - x`, `(-x) + (-y) = -(x + y)`.
    ///
    /// The result is built in scratch storage, so `a.checked_add(&a)` is
    /// safe and `self` is untouched on failure.
    ///
    /// # Errors
    /// Returns `Overflow` if the group cap is reached.
    pub fn checked_add(&self, rhs: &Self) -> BigIntResult<Self> {
        let result = match (self.is_negative(), rhs.is_negative()) {
            (false, false) => {
                Self::from_parts(Sign::Positive, Self::add_magnitudes(self, rhs)?)
            },
            (true, true) => {
                Self::from_parts(Sign::Negative, Self::add_magnitudes(self, rhs)?)
            },
            (false, true) => {
                let (groups, negative) = Self::sub_magnitudes(self, rhs);
                Self::from_parts(Self::sign_for(negative), groups)
            },
            (true, false) => {
                let (groups, negative) = Self::sub_magnitudes(rhs, self);
                Self::from_parts(Self::sign_for(negative), groups)
            },
        };
        Ok(result)
    }

    /// Checked subtraction. Mirrors [`checked_add`](Self::checked_add) with
    /// the subtrahend's sign flipped.
    ///
    /// # Errors
    /// Returns `Overflow` if the group cap is reached.
    pub fn checked_sub(&self, rhs: &Self) -> BigIntResult<Self> {
        let result = match (self.is_negative(), rhs.is_negative()) {
            (false, false) => {
                let (groups, negative) = Self::sub_magnitudes(self, rhs);
                Self::from_parts(Self::sign_for(negative), groups)
            },
            (true, true) => {
                // (-x) - (-y) = y - x
                let (groups, negative) = Self::sub_magnitudes(rhs, self);
                Self::from_parts(Self::sign_for(negative), groups)
            },
            (false, true) => {
                Self::from_parts(Sign::Positive, Self::add_magnitudes(self, rhs)?)
            },
            (true, false) => {
                Self::from_parts(Sign::Negative, Self::add_magnitudes(self, rhs)?)
            },
        };
        Ok(result)
    }

    #[inline]
    fn sign_for(negative: bool) -> Sign {
        if negative {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

// ============================================================================
// Operator impls
// Operators delegate to the checked core and panic on overflow; callers who
// need failures as values use the checked_* methods.
// ============================================================================

impl Add<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: &BigInteger) -> BigInteger {
        self.checked_add(rhs).expect("BigInteger addition overflow")
    }
}

impl Add for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn add(self, rhs: BigInteger) -> BigInteger {
        &self + &rhs
    }
}

impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        *self = &*self + rhs;
    }
}

impl AddAssign for BigInteger {
    fn add_assign(&mut self, rhs: BigInteger) {
        *self = &*self + &rhs;
    }
}

impl Sub<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: &BigInteger) -> BigInteger {
        self.checked_sub(rhs)
            .expect("BigInteger subtraction overflow")
    }
}

impl Sub for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn sub(self, rhs: BigInteger) -> BigInteger {
        &self - &rhs
    }
}

impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        *self = &*self - rhs;
    }
}

impl SubAssign for BigInteger {
    fn sub_assign(&mut self, rhs: BigInteger) {
        *self = &*self - &rhs;
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.opposite()
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_with_carry() {
        assert_eq!(big("9999") + big("1"), big("10000"));
        assert_eq!(big("9999999999999999") + big("1"), big("10000000000000000"));
        assert_eq!(big("5000") + big("5000"), big("10000"));
    }

    #[test]
    fn test_add_different_lengths() {
        assert_eq!(big("123456789012") + big("1"), big("123456789013"));
        assert_eq!(big("1") + big("123456789012"), big("123456789013"));
    }

    #[test]
    fn test_sub_with_borrow() {
        assert_eq!(big("10000") - big("1"), big("9999"));
        assert_eq!(big("100000000") - big("1"), big("99999999"));
        assert_eq!(big("12345678") - big("12345678"), big("0"));
    }

    #[test]
    fn test_sub_smaller_from_larger_flips_sign() {
        assert_eq!(big("3") - big("5"), big("-2"));
        assert_eq!(big("5") - big("30000"), big("-29995"));
    }

    #[test]
    fn test_sign_dispatch() {
        // x + (-y)
        assert_eq!(big("10") + big("-4"), big("6"));
        assert_eq!(big("4") + big("-10"), big("-6"));
        // (-x) + y
        assert_eq!(big("-10") + big("4"), big("-6"));
        assert_eq!(big("-4") + big("10"), big("6"));
        // (-x) + (-y)
        assert_eq!(big("-10") + big("-4"), big("-14"));
        // x - (-y)
        assert_eq!(big("10") - big("-4"), big("14"));
        // (-x) - y
        assert_eq!(big("-10") - big("4"), big("-14"));
        // (-x) - (-y)
        assert_eq!(big("-10") - big("-4"), big("-6"));
        assert_eq!(big("-4") - big("-10"), big("6"));
    }

    #[test]
    fn test_aliasing_is_safe() {
        let mut a = big("123456789");
        let copy = a.clone();
        a += copy.clone();
        assert_eq!(a, big("246913578"));

        let mut b = big("987654321");
        let copy = b.clone();
        b -= copy;
        assert!(b.is_zero());
    }

    #[test]
    fn test_result_is_normalized() {
        let diff = big("10000000000") - big("9999999999");
        assert_eq!(diff.group_count(), 1);
        assert_eq!(diff, big("1"));
    }

    #[test]
    fn test_neg_operator() {
        assert_eq!(-big("5"), big("-5"));
        assert_eq!(-big("-5"), big("5"));
        assert_eq!(-big("0"), big("0"));
    }

    #[test]
    fn test_add_sub_round_trip() {
        let a = big("314159265358979323846");
        let b = big("-271828182845904523536");
        assert_eq!((a.clone() + b.clone()) - b, a);
    }
}
