//! Operator surface. Every operator is implemented once on `&BigInt`; the
//! owned and compound-assignment forms forward to it.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg,
};

use crate::error::BigIntError;
use crate::magnitude;
use crate::BigInt;

macro_rules! forward_binop {
    ($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $imp::$method(self, &rhs)
            }
        }

        impl $imp_assign<BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: BigInt) {
                *self = $imp::$method(&*self, &rhs);
            }
        }

        impl $imp_assign<&BigInt> for BigInt {
            fn $method_assign(&mut self, rhs: &BigInt) {
                *self = $imp::$method(&*self, rhs);
            }
        }
    };
}

macro_rules! forward_shift {
    ($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp<u32> for BigInt {
            type Output = BigInt;

            fn $method(self, n: u32) -> BigInt {
                $imp::$method(&self, n)
            }
        }

        impl $imp_assign<u32> for BigInt {
            fn $method_assign(&mut self, n: u32) {
                *self = $imp::$method(&*self, n);
            }
        }
    };
}

/// `|a| - |b|`, signed so that a larger `a` keeps `negative`.
fn signed_difference(negative: bool, a: &[u32], b: &[u32]) -> BigInt {
    match magnitude::cmp(a, b) {
        Ordering::Less => BigInt::from_words(!negative, magnitude::sub(b, a)),
        _ => BigInt::from_words(negative, magnitude::sub(a, b)),
    }
}

// Addition
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.is_negative() == rhs.is_negative() {
            BigInt::from_words(self.is_negative(), magnitude::add(self.words(), rhs.words()))
        } else {
            signed_difference(self.is_negative(), self.words(), rhs.words())
        }
    }
}

forward_binop!(Add, add, AddAssign, add_assign);

// Subtraction
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        if self.is_negative() == rhs.is_negative() {
            signed_difference(self.is_negative(), self.words(), rhs.words())
        } else {
            BigInt::from_words(self.is_negative(), magnitude::add(self.words(), rhs.words()))
        }
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign);

// Negation
impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.into_negated()
    }
}

// Multiplication
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let negative = self.is_negative() != rhs.is_negative();
        BigInt::from_words(negative, magnitude::mul(self.words(), rhs.words()))
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign);

// Division and remainder
impl BigInt {
    /// Truncating division: the quotient rounds toward zero and the remainder
    /// takes the sign of `self`.
    ///
    /// ```
    /// use big_int::{BigInt, BigIntError};
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!(q, BigInt::from(-3));
    /// assert_eq!(r, BigInt::from(-1));
    /// assert_eq!(BigInt::from(5).div_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }
        if magnitude::cmp(self.words(), divisor.words()) == Ordering::Less {
            return Ok((BigInt::zero(), self.clone()));
        }

        let (quot, rem) = magnitude::div_rem(self.words(), divisor.words());
        let quot = BigInt::from_words(self.is_negative() != divisor.is_negative(), quot);
        let rem = BigInt::from_words(self.is_negative(), rem);
        Ok((quot, rem))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(divisor).map(|(quot, _)| quot)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(divisor).map(|(_, rem)| rem)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics when `rhs` is zero; use [`BigInt::checked_div`] to handle it.
    fn div(self, rhs: &BigInt) -> BigInt {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{}", err))
    }
}

forward_binop!(Div, div, DivAssign, div_assign);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics when `rhs` is zero; use [`BigInt::checked_rem`] to handle it.
    fn rem(self, rhs: &BigInt) -> BigInt {
        self.checked_rem(rhs).unwrap_or_else(|err| panic!("{}", err))
    }
}

forward_binop!(Rem, rem, RemAssign, rem_assign);

// Bitwise AND / OR act on magnitudes only; results are never negative.
impl BitAnd<&BigInt> for &BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: &BigInt) -> BigInt {
        BigInt::from_words(false, magnitude::and(self.words(), rhs.words()))
    }
}

forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);

impl BitOr<&BigInt> for &BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: &BigInt) -> BigInt {
        BigInt::from_words(false, magnitude::or(self.words(), rhs.words()))
    }
}

forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);

// Shifts move the magnitude and keep the sign.
impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> BigInt {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        BigInt::from_words(self.is_negative(), magnitude::shl(self.words(), n))
    }
}

forward_shift!(Shl, shl, ShlAssign, shl_assign);

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> BigInt {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        BigInt::from_words(self.is_negative(), magnitude::shr(self.words(), n))
    }
}

forward_shift!(Shr, shr, ShrAssign, shr_assign);

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_add() {
        assert_eq!(
            big("123456789123456789") + big("987654321987654321"),
            big("1111111111111111110")
        );
        assert_eq!(big("-5") + big("3"), big("-2"));
        assert_eq!(big("5") + big("-8"), big("-3"));
        assert_eq!(big("-5") + big("-8"), big("-13"));
        assert_eq!(big("0") + big("-8"), big("-8"));
        assert!(!(big("-8") + big("8")).is_negative());
    }

    #[test]
    fn test_sub() {
        assert_eq!(big("1000000000000000000") - big("1"), big("999999999999999999"));
        assert_eq!(big("3") - big("5"), big("-2"));
        assert_eq!(big("-3") - big("-5"), big("2"));
        assert_eq!(big("-3") - big("5"), big("-8"));
        assert_eq!(big("3") - big("-5"), big("8"));
        let zero = big("-77") - big("-77");
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_mixed_with_zero() {
        let zero = BigInt::zero();
        let x = big("-8");
        assert_eq!(&x + &zero, x);
        assert_eq!(&zero + &x, x);
        assert_eq!(&x - &zero, x);
        assert_eq!(&zero - &x, big("8"));
        assert_eq!(&zero - &big("8"), x);
        assert!((&x * &zero).is_zero());
        assert!(!(&x * &zero).is_negative());
        assert_eq!(&x & &zero, zero);
        assert_eq!(&x | &zero, big("8"));

        let wide = big("-123456789012345678901234567890");
        assert_eq!(&wide + &BigInt::from_words(false, vec![]), wide);
        assert_eq!(&wide - &BigInt::from_words(true, vec![0, 0]), wide);

        // negative exact quotient, zero remainder
        let (q, r) = big("-21").div_rem(&big("7")).unwrap();
        assert!(r.is_zero());
        assert_eq!(&(&q * &big("7")) + &r, big("-21"));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-big("4"), big("-4"));
        assert_eq!(-&big("-4"), big("4"));
        assert!(!(-BigInt::zero()).is_negative());
    }

    #[test]
    fn test_mul() {
        assert_eq!(
            big("99999999999999999999") * big("99999999999999999999"),
            big("9999999999999999999800000000000000000001")
        );
        assert_eq!(big("-3") * big("4"), big("-12"));
        assert_eq!(big("-3") * big("-4"), big("12"));
        let zero = big("-3") * big("0");
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_div() {
        assert_eq!(big("100") / big("7"), big("14"));
        assert_eq!(big("120") / big("13"), big("9"));
        assert_eq!(big("-7") / big("2"), big("-3"));
        assert_eq!(big("7") / big("-2"), big("-3"));
        assert_eq!(big("-7") / big("-2"), big("3"));
        let a = big("10000000000000000000000000000000000");
        assert_eq!(a / big("1000"), big("10000000000000000000000000000000"));
        // Knuth path
        let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
        let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
        let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
        assert_eq!(&a / &b, c);
    }

    #[test]
    fn test_rem() {
        assert_eq!(big("100") % big("7"), big("2"));
        assert_eq!(big("-7") % big("2"), big("-1"));
        assert_eq!(big("7") % big("-2"), big("1"));
        assert_eq!(big("12") % big("8"), big("4"));
        assert_eq!(big("10000000000000000") % big("10"), BigInt::zero());
        let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
        let b = big("526738495607659438721653478560954837265378495607");
        let r = big("393707270751296419349581795408095683999332705291");
        assert_eq!(a % b, r);
    }

    #[test]
    fn test_small_dividend_keeps_sign() {
        let (q, r) = big("-3").div_rem(&big("10")).unwrap();
        assert!(q.is_zero());
        assert!(!q.is_negative());
        assert_eq!(r, big("-3"));
    }

    #[test]
    fn test_division_by_zero() {
        for a in ["5", "-5", "0", "123456789012345678901234567890"] {
            assert_eq!(big(a).checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
            assert_eq!(big(a).checked_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
        }
        let empty = BigInt::from_words(false, vec![]);
        assert!(big("9").div_rem(&empty).is_err());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = big("5") / big("0");
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_rem_operator_panics_on_zero() {
        let _ = big("-5") % big("0");
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(big("12") & big("10"), big("8"));
        assert_eq!(big("12") | big("10"), big("14"));
        // magnitudes only, sign dropped
        assert_eq!(big("-12") & big("10"), big("8"));
        assert_eq!(big("-12") | big("-10"), big("14"));
        assert_eq!(big("4294967296") & big("1"), big("0"));
        assert_eq!(big("4294967296") | big("1"), big("4294967297"));
    }

    #[test]
    fn test_shifts() {
        assert_eq!(big("1") << 100, big("1267650600228229401496703205376"));
        assert_eq!(big("1267650600228229401496703205376") >> 100, big("1"));
        assert_eq!(big("-5") << 3, big("-40"));
        assert_eq!(big("-5") >> 1, big("-2"));
        assert_eq!(big("5") >> 3, big("0"));
        assert_eq!(big("5") >> 300, big("0"));
        assert!(!(big("-5") >> 300).is_negative());
        assert_eq!(big("5") << 0, big("5"));
        assert_eq!(big("0") << 77, big("0"));
    }

    #[test]
    fn test_assign_ops() {
        let mut a = big("10");
        a += big("5");
        a -= &big("3");
        a *= big("4");
        assert_eq!(a, big("48"));
        a /= big("5");
        assert_eq!(a, big("9"));
        a %= big("4");
        assert_eq!(a, big("1"));
        a <<= 40;
        a >>= 8;
        assert_eq!(a, BigInt::from(1u64 << 32));
        a |= big("3");
        a &= big("2");
        assert_eq!(a, big("2"));
    }

    #[test]
    fn test_operands_not_mutated() {
        let a = big("-123456789012345678901234567890");
        let b = big("987654321");
        let before = (a.clone(), b.clone());
        let _ = &a + &b;
        let _ = &a - &b;
        let _ = &a * &b;
        let _ = a.div_rem(&b);
        let _ = &a << 7;
        assert_eq!((a, b), before);
    }
}
