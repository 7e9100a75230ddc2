//! Blink Monitor Core
//!
//! The temporal heart of the drowsiness monitor:
//! - Per-frame eye open/closed sampling
//! - Debounced blink detection (closed-run length threshold)
//! - Rolling blink count with alert threshold
//! - Per-face counters, independent across tracked faces
//!
//! The core performs no I/O, holds no threads, and is driven synchronously
//! once per frame by the session loop.

pub mod config;
pub mod event;
pub mod monitor;
pub mod sampler;

pub use config::MonitorConfig;
pub use event::{FaceTrackId, MonitorEvent};
pub use monitor::BlinkMonitor;
pub use sampler::{EyeState, EyeStateSampler};

use thiserror::Error;

/// Monitor error types
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
