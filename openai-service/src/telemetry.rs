use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-10-10T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        // Keep timestamps compact: no fractional seconds, Z-suffix
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Build a formatting layer that renders only events whose target starts with
/// one of `prefixes` (e.g. `["openai_service", "ticket_store"]`).
///
/// - RFC3339 UTC timestamps
/// - Compact single-line format with `file:line`
/// - Written to **stderr**, so stdout stays free for the run report
/// - ANSI colors only when stderr is a terminal
pub fn layer<S>(prefixes: &'static [&'static str]) -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = io::stderr().is_terminal();

    let only_ours = filter::filter_fn(move |meta| {
        prefixes
            .iter()
            .any(|prefix| meta.target().starts_with(prefix))
    });

    let format = fmt::format()
        .compact()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_source_location(true);

    fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(use_ansi)
        .event_format(format)
        .with_filter(only_ours)
}

/// Create an `EnvFilter` from `RUST_LOG` or fall back to `default`.
///
/// `default` is a full filter string such as `"warn,ticket_store=info"`.
pub fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
