//! remit-core
//!
//! Deterministic evaluation engine for recurring billing, budget
//! reconciliation, and deadline reminders. Depends on remit-domain.
//! No I/O, no persistence, no rendering; every pass is a pure function
//! over a snapshot of host records.

pub mod budget_service;
pub mod engine;
pub mod error;
pub mod intake;
pub mod recurrence_service;
pub mod reminder_service;
pub mod status_service;

pub use budget_service::*;
pub use engine::*;
pub use error::{CoreError, Fault};
pub use intake::*;
pub use recurrence_service::*;
pub use reminder_service::*;
pub use status_service::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs the global tracing subscriber with sensible defaults. Hosts
/// with their own subscriber can skip this entirely.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("remit_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Remit core tracing initialized.");
    });
}
