#![deny(missing_docs)]

//! Defines the output format of traces, events, and spans produced
//! by `plugs` and the libraries it calls into.

mod formatter;

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Initializes a global tracing subscriber that formats
/// all logs produced by an application that calls init,
/// and all logs produced by libraries consumed by that application.
///
/// Logs always go to stderr so they never interleave with generated output
/// printed to stdout.
pub fn init(level: Option<Level>) {
    // by default, no logs are printed.
    if let Some(level) = level {
        match level {
            Level::TRACE => formatter::very_verbose(level),
            Level::DEBUG => formatter::verbose(level),
            _ => formatter::least_verbose(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_core::metadata::ParseLevelError;

    use super::{Level, LEVELS};
    use std::str::FromStr;

    #[test]
    fn it_parses_all_possible_levels() -> Result<(), ParseLevelError> {
        for level in &LEVELS {
            Level::from_str(level)?;
        }
        Ok(())
    }

    #[test]
    fn it_orders_levels_from_least_to_most_verbose() {
        let parsed: Vec<Level> = LEVELS
            .iter()
            .map(|level| Level::from_str(level).unwrap())
            .collect();
        assert!(parsed.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
