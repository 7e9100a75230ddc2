//! Frame Acquisition Boundary
//!
//! Provides the video frame type and the capture source trait the monitoring
//! loop pulls from. Real camera capture (V4L2, webcam drivers) lives behind
//! [`FrameSource`]; the monitor core never talks to a device directly.

pub mod frame;
pub mod synthetic;

pub use frame::VideoFrame;
pub use synthetic::SyntheticSource;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capture error types
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to open capture device: {0}")]
    Open(String),

    #[error("Invalid format: {0}")]
    Format(String),

    #[error("Frame read failed: {0}")]
    Read(String),

    #[error("Capture timeout")]
    Timeout,

    #[error("Capture device not initialized")]
    NotInitialized,
}

/// Capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Device path (e.g., "/dev/video0")
    pub device: String,
    /// Capture width
    pub width: u32,
    /// Capture height
    pub height: u32,
    /// Target FPS
    pub fps: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 20,
        }
    }
}

/// Source of video frames, pulled once per loop iteration.
///
/// `Ok(None)` signals end-of-stream. An `Err` means acquisition failed;
/// the caller surfaces it to the user and halts the loop.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<VideoFrame>, CaptureError>;
}
