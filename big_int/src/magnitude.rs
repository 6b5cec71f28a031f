//! Word-level kernels over little-endian `u32` magnitudes.
//!
//! Inputs may carry high zero words. Outputs are trimmed: no high zero words,
//! and zero is a single `0` word.

use std::cmp::Ordering;

use log::trace;

use crate::big_int_constants::{WORD_BITS, WORD_MASK};

/// The magnitude without its high zero words. Zero becomes the empty slice.
pub(crate) fn significant(mag: &[u32]) -> &[u32] {
    let len = mag.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
    &mag[..len]
}

/// Drops high zero words down to a single word.
pub(crate) fn trim(mag: &mut Vec<u32>) {
    let len = significant(mag).len().max(1);
    mag.truncate(len);
    if mag.is_empty() {
        mag.push(0);
    }
}

pub(crate) fn is_zero(mag: &[u32]) -> bool {
    significant(mag).is_empty()
}

pub(crate) fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    let (a, b) = (significant(a), significant(b));
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Number of significant bits.
pub(crate) fn bit_length(mag: &[u32]) -> u64 {
    match significant(mag).split_last() {
        None => 0,
        Some((top, rest)) => {
            rest.len() as u64 * WORD_BITS as u64 + (WORD_BITS - top.leading_zeros()) as u64
        }
    }
}

pub(crate) fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (i, &x) in long.iter().enumerate() {
        let acc = x as u64 + short.get(i).copied().unwrap_or(0) as u64 + carry;
        sum.push(acc as u32);
        carry = acc >> WORD_BITS;
    }
    if carry != 0 {
        sum.push(carry as u32);
    }
    trim(&mut sum);
    sum
}

/// `big - little`, where `big >= little`.
pub(crate) fn sub(big: &[u32], little: &[u32]) -> Vec<u32> {
    let (big, little) = (significant(big), significant(little));
    debug_assert!(cmp(big, little) != Ordering::Less, "magnitude subtraction underflow");

    let mut diff = Vec::with_capacity(big.len());
    let mut borrow = 0i64;
    for (i, &x) in big.iter().enumerate() {
        let mut d = x as i64 - little.get(i).copied().unwrap_or(0) as i64 - borrow;
        if d < 0 {
            d += 1 << WORD_BITS;
            borrow = 1;
        } else {
            borrow = 0;
        }
        diff.push(d as u32);
    }
    trim(&mut diff);
    diff
}

/// Schoolbook product. Each step `x * y + partial + carry` stays below 2^64.
pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (a, b) = (significant(a), significant(b));
    let mut prod = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let acc = x as u64 * y as u64 + prod[i + j] as u64 + carry;
            prod[i + j] = acc as u32;
            carry = acc >> WORD_BITS;
        }
        prod[i + b.len()] = carry as u32;
    }
    trim(&mut prod);
    prod
}

pub(crate) fn mul_word(a: &[u32], w: u32) -> Vec<u32> {
    let mut prod = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &x in a {
        let acc = x as u64 * w as u64 + carry;
        prod.push(acc as u32);
        carry = acc >> WORD_BITS;
    }
    prod.push(carry as u32);
    trim(&mut prod);
    prod
}

/// Single pass division by one nonzero word, most significant word first.
pub(crate) fn div_rem_word(a: &[u32], d: u32) -> (Vec<u32>, u32) {
    debug_assert!(d != 0);
    let divisor = d as u64;
    let mut quot = vec![0u32; a.len()];
    let mut rem = 0u64;
    for (i, &w) in a.iter().enumerate().rev() {
        let cur = (rem << WORD_BITS) | w as u64;
        quot[i] = (cur / divisor) as u32;
        rem = cur % divisor;
    }
    trim(&mut quot);
    (quot, rem as u32)
}

/// `big - little * 2^(32 * offset)`.
fn sub_at(big: &[u32], little: &[u32], offset: usize) -> Vec<u32> {
    let mut shifted = vec![0u32; offset];
    shifted.extend_from_slice(little);
    sub(big, &shifted)
}

/// Long division of magnitudes. `divisor` must be nonzero.
///
/// Uses the normalized schoolbook method (Knuth vol. 2, 4.3.1): both operands
/// are shifted so the divisor's top bit is set, then each quotient word is
/// estimated from the top two remainder words and corrected downward until the
/// trial product fits under the remainder.
pub(crate) fn div_rem(dividend: &[u32], divisor: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let (dividend, divisor) = (significant(dividend), significant(divisor));
    debug_assert!(!divisor.is_empty(), "magnitude division by zero");

    if cmp(dividend, divisor) == Ordering::Less {
        let mut rem = dividend.to_vec();
        trim(&mut rem);
        return (vec![0], rem);
    }
    if divisor.len() == 1 {
        let (quot, rem) = div_rem_word(dividend, divisor[0]);
        return (quot, vec![rem]);
    }

    let norm = divisor[divisor.len() - 1].leading_zeros();
    let divisor = shl(divisor, norm);
    let mut rem = shl(dividend, norm);

    let n = rem.len();
    let m = divisor.len();
    let top = divisor[m - 1] as u64;
    trace!("long division: {} by {} words, normalization shift {}", n, m, norm);

    let mut quot = vec![0u32; n - m + 1];
    for i in (0..=n - m).rev() {
        let hi = rem.get(i + m).copied().unwrap_or(0) as u64;
        let lo = rem.get(i + m - 1).copied().unwrap_or(0) as u64;
        let mut qguess = (((hi << WORD_BITS) | lo) / top).min(WORD_MASK) as u32;

        // rem >= trial * 2^(32i) exactly when rem[i..] >= trial
        let mut trial = mul_word(&divisor, qguess);
        let mut corrections = 0u32;
        while cmp(rem.get(i..).unwrap_or(&[]), &trial) == Ordering::Less {
            qguess -= 1;
            trial = mul_word(&divisor, qguess);
            corrections += 1;
        }
        if corrections > 0 {
            trace!("quotient word {}: estimate lowered {} time(s)", i, corrections);
        }

        quot[i] = qguess;
        rem = sub_at(&rem, &trial, i);
    }

    trim(&mut quot);
    (quot, shr(&rem, norm))
}

pub(crate) fn shl(mag: &[u32], n: u32) -> Vec<u32> {
    let n_words = (n / WORD_BITS) as usize;
    let n_bits = n % WORD_BITS;

    let mut shifted = Vec::with_capacity(n_words + mag.len() + 1);
    shifted.resize(n_words, 0);
    if n_bits == 0 {
        shifted.extend_from_slice(mag);
    } else {
        let mut carry = 0u32;
        for &w in mag {
            shifted.push((w << n_bits) | carry);
            carry = w >> (WORD_BITS - n_bits);
        }
        if carry != 0 {
            shifted.push(carry);
        }
    }
    trim(&mut shifted);
    shifted
}

pub(crate) fn shr(mag: &[u32], n: u32) -> Vec<u32> {
    let n_words = (n / WORD_BITS) as usize;
    let n_bits = n % WORD_BITS;

    if n_words >= mag.len() {
        return vec![0];
    }

    let mut shifted = mag[n_words..].to_vec();
    if n_bits != 0 {
        let mut carry = 0u32;
        for w in shifted.iter_mut().rev() {
            let cur = *w;
            *w = (cur >> n_bits) | carry;
            carry = cur << (WORD_BITS - n_bits);
        }
    }
    trim(&mut shifted);
    shifted
}

pub(crate) fn and(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut conj: Vec<u32> = a.iter().zip(b).map(|(x, y)| x & y).collect();
    trim(&mut conj);
    conj
}

pub(crate) fn or(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut disj: Vec<u32> = long
        .iter()
        .enumerate()
        .map(|(i, &x)| x | short.get(i).copied().unwrap_or(0))
        .collect();
    trim(&mut disj);
    disj
}
