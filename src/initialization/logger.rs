//! Logger initialization.

use std::io::Write;

use colored::Colorize;
use log::LevelFilter;

use crate::error_handling::InitializationError;

/// Initializes the logger with the specified minimum level.
///
/// Reads `RUST_LOG` first, then overrides with the CLI-provided level. Noisy
/// dependency modules are pinned to quieter levels; hickory's warnings about
/// malformed UDP responses are expected and suppressed.
pub fn init_logger(level: LevelFilter) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("domainscope", level);

    builder.format(|buf, record| {
        let level = match record.level() {
            log::Level::Error => "ERROR".red().bold(),
            log::Level::Warn => "WARN".yellow().bold(),
            log::Level::Info => "INFO".green(),
            log::Level::Debug => "DEBUG".blue(),
            log::Level::Trace => "TRACE".dimmed(),
        };
        writeln!(
            buf,
            "{} {} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            record.target(),
            record.args()
        )
    });

    builder.try_init()?;
    Ok(())
}
