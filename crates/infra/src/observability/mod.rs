//! Observability infrastructure
//!
//! Structured logging through `tracing`: a stdout layer plus an optional
//! plain-text file layer, both filtered by `RUST_LOG` or the configured level,
//! and a scoped stderr subscriber for startup work.

pub mod logging;

pub use logging::{init_logging, startup_subscriber, with_startup_logging, LogGuard};
