/// Width of one magnitude word.
pub const WORD_BITS: u32 = u32::BITS;

/// Low-word mask for a widened accumulator.
pub const WORD_MASK: u64 = u32::MAX as u64;

/// Largest power of ten that fits in a word, used to peel decimal digits
/// nine at a time.
pub const DECIMAL_GROUP_RADIX: u32 = 1_000_000_000;

pub const DECIMAL_GROUP_DIGITS: usize = 9;

pub const DECIMAL_RADIX: u32 = 10;

/// Values `-MAX_CONSTANT..=MAX_CONSTANT` are served from the cache.
pub const MAX_CONSTANT: usize = 16;
