use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Installs the global logger. `verbosity` counts `-v` flags; `RUST_LOG`
/// overrides it.
pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .parse_default_env()
        .try_init();
}
