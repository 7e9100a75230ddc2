//! Detector configuration

use serde::{Deserialize, Serialize};

/// Detector configuration
///
/// These are cascade-classifier tuning parameters. They are fixed for a
/// monitoring session and never exposed by the monitor core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Image pyramid scale factor between detection passes
    pub scale_factor: f32,

    /// Minimum neighboring detections to accept a region
    pub min_neighbors: u32,

    /// Minimum detected region side length (pixels)
    pub min_region_size: u32,

    /// Classifier file path; the stand-in detector is used when absent
    pub classifier_path: Option<String>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.3,
            min_neighbors: 5,
            min_region_size: 24,
            classifier_path: None,
        }
    }
}
