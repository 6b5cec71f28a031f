//! # BigInt
//! Immutable arbitrary-precision integers in sign-magnitude form.
//! The magnitude is a little-endian vector of 32-bit words.
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::big_int_cache::cached;
use crate::big_int_constants::WORD_BITS;
use crate::magnitude;

#[derive(Debug, Clone)]
pub struct BigInt {
    negative: bool,
    mag: Vec<u32>,
}

// Construction and normalization
impl BigInt {
    /// Builds a value from raw little-endian words and normalizes it.
    pub fn from_words(negative: bool, mag: Vec<u32>) -> BigInt {
        let mut val = BigInt { negative, mag };
        val.trim();
        val
    }

    pub fn zero() -> BigInt {
        BigInt { negative: false, mag: vec![0] }
    }

    pub fn one() -> BigInt {
        BigInt { negative: false, mag: vec![1] }
    }

    /// Strips high zero words and clears the sign of zero.
    fn trim(&mut self) {
        magnitude::trim(&mut self.mag);
        if self.is_zero() {
            self.negative = false;
        }
    }

    fn value_of(val: u128, negative: bool) -> BigInt {
        if let Some(small) = cached(val, negative) {
            return small;
        }
        let mag = (0..4)
            .map(|i| (val >> (i * WORD_BITS)) as u32)
            .collect();
        BigInt::from_words(negative, mag)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}

impl_unsigned_to_big_int!(u8, u16, u32, u64, usize, u128);
impl_signed_to_big_int!(i8, i16, i32, i64, isize, i128);

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// Accessors
impl BigInt {
    pub fn is_zero(&self) -> bool {
        magnitude::is_zero(&self.mag)
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// The normalized magnitude words, least significant first.
    pub fn words(&self) -> &[u32] {
        &self.mag
    }

    /// Bits needed to represent the magnitude; 0 for zero.
    pub fn bit_length(&self) -> u64 {
        magnitude::bit_length(&self.mag)
    }

    pub fn abs(&self) -> BigInt {
        BigInt { negative: false, mag: self.mag.clone() }
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        self.low_u64()
    }

    pub fn to_i64(&self) -> Option<i64> {
        let low = self.low_u64()?;
        if self.negative {
            if low <= i64::MIN.unsigned_abs() {
                Some((low as i64).wrapping_neg())
            } else {
                None
            }
        } else {
            i64::try_from(low).ok()
        }
    }

    fn low_u64(&self) -> Option<u64> {
        match magnitude::significant(&self.mag) {
            [] => Some(0),
            [lo] => Some(*lo as u64),
            [lo, hi] => Some(((*hi as u64) << WORD_BITS) | *lo as u64),
            _ => None,
        }
    }
}

// Negation
impl BigInt {
    pub(crate) fn negate(&self) -> BigInt {
        self.clone().into_negated()
    }

    /// Flips the sign unless the value is zero.
    pub(crate) fn into_negated(mut self) -> BigInt {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

// Equality and ordering look only at significant words, so `[]` and `[0]`
// compare equal.
impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative
            && magnitude::significant(&self.mag) == magnitude::significant(&other.mag)
    }
}

impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        magnitude::significant(&self.mag).hash(state);
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => magnitude::cmp(&self.mag, &other.mag),
            (true, true) => magnitude::cmp(&self.mag, &other.mag).reverse(),
        }
    }
}
