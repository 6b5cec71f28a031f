//! Demonstration driver for [`big_int`]: reads two integers and prints the
//! result of every supported operation.

mod logger;
mod report;

pub use logger::init_logger;
pub use report::{parse_operands, read_operands, write_report};
