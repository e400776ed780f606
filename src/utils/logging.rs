use tracing_subscriber::layer::SubscriberExt;

use crate::error::Result;

/// Installs the global tracing subscriber. Verbosity raises the level of the
/// `ladders` target; `RUST_LOG` replaces the directives entirely.
pub fn configure_logging(verbosity: u8) -> Result<()> {
    let directives = match std::env::var("RUST_LOG") {
        Ok(overrides) => overrides,
        Err(_) => match verbosity {
            0 => "ladders=info",
            1 => "ladders=debug",
            _ => "ladders=trace",
        }
        .to_string(),
    };
    let env_filter = tracing_subscriber::filter::EnvFilter::new(directives);
    let registry = tracing_subscriber::Registry::default().with(env_filter);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(verbosity >= 2);

    tracing::subscriber::set_global_default(registry.with(fmt_layer))?;
    Ok(())
}
