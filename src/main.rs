use std::io::{self, BufWriter, Write};

use anyhow::{bail, Result};
use clap::{ArgAction, Parser};

use big_int_demo::{init_logger, parse_operands, read_operands, write_report};

#[derive(Parser)]
#[command(name = "bigint", version, about = "Arbitrary-precision integer calculator")]
struct Cli {
    /// The two operands `A B`; read from stdin when omitted
    #[arg(value_name = "INT", allow_negative_numbers = true)]
    operands: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let (a, b) = match cli.operands.as_slice() {
        [] => read_operands(io::stdin().lock())?,
        [a, b] => parse_operands(a, b)?,
        other => bail!("expected two operands, got {}", other.len()),
    };

    let mut out = BufWriter::new(io::stdout().lock());
    write_report(&a, &b, &mut out)?;
    out.flush()?;
    Ok(())
}
