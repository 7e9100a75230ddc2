//! Alert Delivery
//!
//! Decouples alert playback from the frame loop: `AlertTriggered` events are
//! pushed onto a bounded queue and consumed by a background worker. Delivery
//! is fire-and-forget; a slow or failing sink never delays the next frame.

mod dispatch;
mod speech;

pub use dispatch::{AlertDispatcher, AlertHandle};
pub use speech::{LogSink, SpeechSink};

use blink_core::FaceTrackId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Alert delivery error types
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Speech playback failed: {0}")]
    Speech(String),
}

/// Alert configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Spoken alert message
    pub message: String,
    /// Bounded queue depth; alerts beyond this are dropped with a warning
    pub queue_depth: usize,
    /// Text-to-speech command to spawn
    pub speech_command: String,
    /// Speech rate in words per minute
    pub speech_rate: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            message: "Alert! You seem sleepy. Please stay focused.".to_string(),
            queue_depth: 8,
            speech_command: "espeak".to_string(),
            speech_rate: 160,
        }
    }
}

/// One drowsiness alert awaiting delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub face: FaceTrackId,
}

/// Destination for alerts pulled off the queue.
///
/// Implementations must not block the worker for long; spawn long-running
/// playback and return.
pub trait AlertSink: Send + Sync + 'static {
    fn deliver(&self, alert: &Alert) -> Result<(), AlertError>;
}

impl AlertSink for Box<dyn AlertSink> {
    fn deliver(&self, alert: &Alert) -> Result<(), AlertError> {
        (**self).deliver(alert)
    }
}
