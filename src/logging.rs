//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays clean for NDJSON and embed output.
//! `RUST_LOG` takes precedence over the -v/-q flags.

use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "betternotes=warn";
    }
    match verbose {
        0 => "betternotes=info",
        1 => "betternotes=debug",
        _ => "betternotes=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0, false), "betternotes=info");
        assert_eq!(default_directive(1, false), "betternotes=debug");
        assert_eq!(default_directive(5, false), "betternotes=trace");
        assert_eq!(default_directive(0, true), "betternotes=warn");
    }
}
