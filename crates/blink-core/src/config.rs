//! Monitor configuration

use crate::MonitorError;
use serde::{Deserialize, Serialize};

/// Monitor configuration, immutable for a session.
///
/// Both thresholds are measured in frames, assuming a roughly constant
/// sampling rate driven by the capture loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Minimum consecutive closed frames for a closed-run to count as a blink
    pub eye_closed_threshold: u32,

    /// Counted blinks that trigger an alert
    pub blink_alert_threshold: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            eye_closed_threshold: 3,
            blink_alert_threshold: 3,
        }
    }
}

impl MonitorConfig {
    /// Create strict config (lower thresholds, alerts sooner)
    pub fn strict() -> Self {
        Self {
            eye_closed_threshold: 2,
            blink_alert_threshold: 2,
        }
    }

    /// Create lenient config (higher thresholds, fewer alerts)
    pub fn lenient() -> Self {
        Self {
            eye_closed_threshold: 5,
            blink_alert_threshold: 6,
        }
    }

    /// Validate thresholds. A zero debounce or zero alert threshold would
    /// make the corresponding check vacuously true on every frame.
    pub fn validate(&self) -> Result<(), MonitorError> {
        if self.eye_closed_threshold == 0 {
            return Err(MonitorError::InvalidConfiguration(
                "eye_closed_threshold must be greater than zero".to_string(),
            ));
        }
        if self.blink_alert_threshold == 0 {
            return Err(MonitorError::InvalidConfiguration(
                "blink_alert_threshold must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
