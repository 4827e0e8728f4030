// ============================================================================
// BigInteger Library
// Arbitrary-precision signed decimal integer arithmetic
// ============================================================================

//! # big-integer
//!
//! Arbitrary-precision signed decimal integers with the full operator set of
//! a built-in integer type.
//!
//! ## Features
//!
//! - **Unbounded magnitude** up to ~4.3 billion decimal digits, stored as
//!   base-10000 digit groups with an explicit sign
//! - **Checked arithmetic** — every fallible operation has a `checked_*`
//!   form returning a typed error; operators panic only on those errors
//! - **Power-of-ten shortcuts** that turn multiplication and division by
//!   `10^k` into plain digit-group shifts
//! - **Exponentiation by squaring** with algebraic special cases
//! - **Scientific notation** input (`"2.5e3"` parses to 2500)
//! - Optional **serde** support serializing the decimal string form
//!
//! ## Example
//!
//! ```rust
//! use big_integer::BigInteger;
//!
//! let a: BigInteger = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInteger::from(987654321);
//!
//! // (a * b) is divisible by b again
//! let product = a.checked_mul(&b).unwrap();
//! assert_eq!(product.checked_div(&b).unwrap(), a);
//!
//! // Powers grow without bound
//! let p = BigInteger::from(2).power(&BigInteger::from(64)).unwrap();
//! assert_eq!(p.to_string(), "18446744073709551616");
//!
//! // Conversion back to native integers is checked
//! assert_eq!(BigInteger::from(300).to_integer::<u8>(), None);
//! ```

pub mod bigint;

// Re-exports for convenience
pub use bigint::{BigIntError, BigIntResult, BigInteger, FromBigInteger, Sign};

pub mod prelude {
    pub use crate::bigint::{BigIntError, BigIntResult, BigInteger, FromBigInteger, Sign};
}
