use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used when the caller asks for verbose output.
pub const VERBOSE_FILTER: &str = "alu_core=debug,alu32=debug,info";

/// Builds the filter: verbose wins, then `RUST_LOG`, then [`DEFAULT_FILTER`].
#[must_use]
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a stderr `fmt` subscriber. Later calls are ignored.
pub fn init_logging(verbose: bool) {
    let _ = fmt()
        .with_env_filter(build_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
