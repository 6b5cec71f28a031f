use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use big_int::BigInt;
use log::{debug, info};

/// Reads the first two whitespace-separated tokens, across as many lines as
/// needed. Anything after them is ignored.
pub fn read_operands<R: BufRead>(reader: R) -> Result<(BigInt, BigInt)> {
    let mut tokens: Vec<String> = Vec::with_capacity(2);
    for line in reader.lines() {
        let line = line.context("failed to read operands")?;
        tokens.extend(line.split_whitespace().map(str::to_owned));
        if tokens.len() >= 2 {
            break;
        }
    }
    if tokens.len() < 2 {
        bail!("expected two integers, found {}", tokens.len());
    }
    parse_operands(&tokens[0], &tokens[1])
}

pub fn parse_operands(a: &str, b: &str) -> Result<(BigInt, BigInt)> {
    let a: BigInt = a.parse().with_context(|| format!("invalid integer `{}`", a))?;
    let b: BigInt = b.parse().with_context(|| format!("invalid integer `{}`", b))?;
    info!("operands: {} and {} bits", a.bit_length(), b.bit_length());
    Ok((a, b))
}

/// Writes the operation table. Quotient and remainder lines are left out
/// when `b` is zero.
pub fn write_report<W: Write>(a: &BigInt, b: &BigInt, out: &mut W) -> io::Result<()> {
    writeln!(out, "a + b = {}", a + b)?;
    writeln!(out, "a - b = {}", a - b)?;
    writeln!(out, "a * b = {}", a * b)?;
    match a.div_rem(b) {
        Ok((quot, rem)) => {
            writeln!(out, "a / b = {}", quot)?;
            writeln!(out, "a % b = {}", rem)?;
        }
        Err(err) => debug!("skipping a / b and a % b: {}", err),
    }
    writeln!(out, "a & b = {}", a & b)?;
    writeln!(out, "a | b = {}", a | b)?;
    Ok(())
}
