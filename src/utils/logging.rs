use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "folio=info,tower_http=info";

/// Install the global subscriber, logging to stderr
///
/// `verbose` raises this crate to debug level. Calling it twice is harmless;
/// the second call is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "folio=debug,tower_http=debug".into()
        } else {
            DEFAULT_FILTER.into()
        }
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
