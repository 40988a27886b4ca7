//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` formatter for the whole process.
//!
//! ## Configuration
//!
//! - `RUST_LOG` selects levels through an `EnvFilter` (`info` when unset).
//! - [`LogFormat::Compact`] hides the module prefix (`with_target(false)`); actors identify
//!   themselves with the `entity_type` field instead.
//! - [`LogFormat::Json`] emits one JSON object per line for log shippers.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Entity Operations**: Create, Get, List, Update, Delete, Purge and Actions
//! - **Client Calls**: every client method opens a span with its arguments
//! - **Rejections**: `warn!` with the entity id and the typed error
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug LOG_FORMAT=json cargo run
//! ```
//!
//! With `RUST_LOG=info` a rejected loan reads:
//!
//! ```text
//! INFO Created entity_type="Order" id=order_1 size=1
//! WARN on_create failed entity_type="Order" error=No copies left of book_1: 1 outstanding, 1 owned
//! ```

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init(),
    }
}
