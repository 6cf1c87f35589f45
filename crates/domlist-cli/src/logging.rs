//! Logging initialization

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::Cli;

/// Initialize logging based on CLI arguments.
///
/// Records from the library crates arrive through the `log` bridge that
/// `tracing-subscriber` installs on `init`.
pub fn init(cli: &Cli) {
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();
}
