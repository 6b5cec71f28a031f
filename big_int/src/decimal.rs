use std::fmt::{self, Write};
use std::str::FromStr;

use crate::big_int_cache::{POS_CACHE, TEN};
use crate::big_int_constants::{DECIMAL_GROUP_DIGITS, DECIMAL_GROUP_RADIX};
use crate::error::ParseBigIntError;
use crate::magnitude;
use crate::BigInt;

// Parsing
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Accepts an optional leading `-` followed by ASCII decimal digits.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        let (negative, digits) = match src.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, src),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::SignWithoutDigits);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit(bad));
        }

        let value = digits
            .trim_start_matches('0')
            .bytes()
            .fold(BigInt::zero(), |acc, b| {
                &(&acc * &*TEN) + &POS_CACHE[(b - b'0') as usize]
            });

        Ok(if negative { -value } else { value })
    }
}

// Printing
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &to_decimal_digits(self.words()))
    }
}

/// Decimal digits of a magnitude, peeled off nine at a time by single-word
/// division.
fn to_decimal_digits(mag: &[u32]) -> String {
    let mut groups = Vec::new();
    let mut rest = mag.to_vec();
    while !magnitude::is_zero(&rest) {
        let (quot, group) = magnitude::div_rem_word(&rest, DECIMAL_GROUP_RADIX);
        groups.push(group);
        rest = quot;
    }

    let mut groups = groups.iter().rev();
    let mut digits = match groups.next() {
        Some(top) => top.to_string(),
        None => return String::from("0"),
    };
    for group in groups {
        // writing into a String cannot fail
        let _ = write!(digits, "{:0width$}", group, width = DECIMAL_GROUP_DIGITS);
    }
    digits
}
