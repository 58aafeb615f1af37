//! CLI option types.

use std::str::FromStr;

use log::LevelFilter;
use structopt::StructOpt;

/// Log verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!(
                "invalid log level '{other}' (expected error|warn|info|debug|trace)"
            )),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command-line options for the report API server.
#[derive(Debug, StructOpt)]
#[structopt(name = "domainscope", about = "Domain investigation report API")]
pub struct Opt {
    /// Port to serve the report API on
    #[structopt(long, default_value = "3000")]
    pub port: u16,

    /// Address to bind
    #[structopt(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Per-adapter timeout in seconds
    #[structopt(long = "adapter-timeout", default_value = "6")]
    pub adapter_timeout: u64,

    /// Minimum log level (error, warn, info, debug, trace)
    #[structopt(long = "log-level", default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn defaults() {
        let opt = Opt::from_iter(["domainscope"]);
        assert_eq!(opt.port, 3000);
        assert_eq!(opt.bind, "127.0.0.1");
        assert_eq!(opt.adapter_timeout, 6);
        assert_eq!(opt.log_level, LogLevel::Info);
    }
}
