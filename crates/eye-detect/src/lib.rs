//! Face and Eye Region Detection Boundary
//!
//! Defines the rectangle types and the detector trait the monitoring loop
//! consumes. A real cascade classifier (or a learned model) plugs in behind
//! [`FaceEyeDetector`]; this crate ships a stand-in detector for development
//! and a scripted detector for tests.

pub mod config;
pub mod detector;

pub use config::DetectorConfig;
pub use detector::{FaceEyeDetector, ScriptedDetector, StandInDetector};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Detection error types
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Classifier loading failed: {0}")]
    ClassifierLoad(String),

    #[error("Detection failed: {0}")]
    Detection(String),

    #[error("Frame region out of bounds")]
    RegionOutOfBounds,
}

/// Axis-aligned rectangle in frame coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rectangle lies entirely within a width x height frame
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x.checked_add(self.width).is_some_and(|right| right <= width)
            && self.y.checked_add(self.height).is_some_and(|bottom| bottom <= height)
    }
}
