//! Tracing setup for the scoring server: JSON lines on stdout, one
//! object per event, so delivery logs can be shipped as-is. The filter
//! comes from `RUST_LOG`; trace ids travel in the `x-trace-id`
//! extension, not here.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Applied when `RUST_LOG` is unset: delivery recording and request
/// handling at info, sqlx/sea-orm query chatter down at warn.
const DEFAULT_DIRECTIVES: &str = "info,actix_web=info,sqlx=warn,sea_orm=warn";

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
