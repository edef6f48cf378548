//! Tracing initialization.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize console tracing. Honors `RUST_LOG`; defaults to debug for our
/// crates and the HTTP layer.
pub fn init_tracing() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "crashsight_api=debug,crashsight_vision=debug,tower_http=debug".into()
                }),
        )
        .with(console_fmt)
        .init();
}
