//! Big Int \
//! This crate provides [`BigInt`]: immutable arbitrary-precision signed
//! integers stored as a sign flag and a base 2^32 magnitude.
//!
//! - construction from decimal text ([`std::str::FromStr`]) and machine integers ([`From`])
//! - `+ - * / %` with truncating division, `& |` on magnitudes, `<< >>`
//! - total ordering, decimal [`std::fmt::Display`]
//!
//! Division by zero is reported as [`BigIntError::DivisionByZero`] by
//! [`BigInt::div_rem`], [`BigInt::checked_div`] and [`BigInt::checked_rem`];
//! the `/` and `%` operators panic with it.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod decimal;
mod error;
mod magnitude;
mod ops;

pub use big_int::BigInt;
pub use error::{BigIntError, ParseBigIntError};
