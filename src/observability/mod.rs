//! Logging setup for the `aspe` binary.
//!
//! Library code only emits `tracing` events; the binary decides where they
//! go. `RUST_LOG` takes precedence over the `-v` count.
//!
//! ```ignore
//! use aspe::observability::init_logging;
//!
//! fn main() {
//!     init_logging(cli.verbose);
//!     // ... rest of application
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "aspe=warn",
        1 => "aspe=info",
        2 => "aspe=debug",
        _ => "aspe=trace",
    }
}

/// Install the global subscriber, writing to stderr so report output on
/// stdout stays clean. Calling it twice is harmless.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
