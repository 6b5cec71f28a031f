use lazy_static::*;

use crate::BigInt;
use crate::big_int_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = {
        let mut idx = 0u32;
        [(); MAX_CONSTANT + 1].map(|_| {
            let val = BigInt::from_words(false, vec![idx]);
            idx += 1;
            val
        })
    };
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = {
        let mut idx = 0u32;
        [(); MAX_CONSTANT + 1].map(|_| {
            let val = BigInt::from_words(true, vec![idx]);
            idx += 1;
            val
        })
    };
    /// Radix used by the decimal parser's `acc * 10 + digit` fold.
    pub static ref TEN: BigInt = POS_CACHE[DECIMAL_RADIX as usize].clone();
}

/// Returns the cached value for `val` with the given sign, if it is small
/// enough to be cached.
pub fn cached(val: u128, negative: bool) -> Option<BigInt> {
    if val > MAX_CONSTANT as u128 {
        return None;
    }
    let cache = if negative { &*NEG_CACHE } else { &*POS_CACHE };
    Some(cache[val as usize].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_is_normalized() {
        assert!(POS_CACHE[0].is_zero());
        // negative zero collapses when trimmed
        assert!(!NEG_CACHE[0].is_negative());
        assert_eq!(NEG_CACHE[0], POS_CACHE[0]);
        for i in 1..=MAX_CONSTANT {
            assert_eq!(POS_CACHE[i].words(), &[i as u32]);
            assert!(NEG_CACHE[i].is_negative());
            assert_eq!(-&NEG_CACHE[i], POS_CACHE[i]);
        }
    }

    #[test]
    fn cached_lookup() {
        assert_eq!(cached(7, true), Some(BigInt::from(-7)));
        assert_eq!(cached(17, false), None);
        assert_eq!(TEN.to_u64(), Some(10));
    }
}
