//! Logging setup. Events go to stderr; stdout is reserved for generated text.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `verbosity` is the number of `-v` flags: 0 = warn, 1 = info, 2 = debug,
/// 3+ = trace. `RUST_LOG` takes precedence when set. Fails if a subscriber
/// is already installed.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}
