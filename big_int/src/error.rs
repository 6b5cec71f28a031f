use thiserror::Error;

/// Arithmetic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BigIntError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Decimal parsing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("sign without digits")]
    SignWithoutDigits,

    #[error("invalid digit `{0}` in integer literal")]
    InvalidDigit(char),
}
