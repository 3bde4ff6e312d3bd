use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Filter built from `RUST_LOG`-style directives. Script log lines are emitted
/// at INFO, so that level stays on unless the directives say otherwise.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}
