//! SleepGuard - Eye Blink Drowsiness Monitor
//!
//! Wires the collaborators into a monitoring session:
//! - Frame source -> face/eye detector -> eye state sampler -> blink monitor
//! - Monitor events -> render overlay + fire-and-forget alert queue
//!
//! The session is created on start and dropped on stop; no state survives it.

pub mod overlay;
pub mod render;
pub mod session;
pub mod settings;

pub use session::{MonitorSession, SessionConfig, SessionSummary};
pub use settings::Settings;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
