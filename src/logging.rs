//! Compact stderr logging for the command-line binary.

use std::io::{self, Write};

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Installs the logger: `LEVEL message` lines on stderr.
///
/// `quiet` drops everything below warnings; otherwise informational
/// progress is shown.
pub fn init(quiet: bool) -> io::Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        });

    builder.try_init().map_err(io::Error::other)
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
