// cafe-storefront/src/telemetry.rs

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info`
/// level. Calling it twice is harmless; the second call is ignored.
pub fn init_tracing(json: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE)
    .with_writer(std::io::stderr);

  let installed = if json {
    builder.json().try_init()
  } else {
    builder.try_init()
  };
  if installed.is_err() {
    tracing::debug!("Tracing subscriber already installed.");
  }
}
