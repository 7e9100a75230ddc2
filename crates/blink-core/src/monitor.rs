//! Blink monitor state machine

use crate::{EyeState, FaceTrackId, MonitorConfig, MonitorError, MonitorEvent};
use std::collections::HashMap;
use tracing::{debug, info};

/// Per-face counter state, owned exclusively by the monitor
#[derive(Debug, Clone, Copy, Default)]
struct FaceCounters {
    /// Consecutive frames observed closed since the last open observation
    consecutive_closed_frames: u32,
    /// Completed blinks since the last alert reset
    blink_count: u32,
}

/// Converts a stream of per-frame [`EyeState`] observations into blink and
/// alert events, one counter set per tracked face.
///
/// Call [`update`](Self::update) once per frame per face from a single
/// processing loop; the monitor is not internally synchronized.
pub struct BlinkMonitor {
    config: MonitorConfig,
    faces: HashMap<FaceTrackId, FaceCounters>,
}

impl BlinkMonitor {
    /// Create a new monitor, rejecting zero-valued thresholds
    pub fn new(config: MonitorConfig) -> Result<Self, MonitorError> {
        config.validate()?;
        info!(
            eye_closed_threshold = config.eye_closed_threshold,
            blink_alert_threshold = config.blink_alert_threshold,
            "Creating blink monitor"
        );
        Ok(Self {
            config,
            faces: HashMap::new(),
        })
    }

    /// Process one frame's eye state for one face.
    ///
    /// A closed observation extends the current closed-run. An open
    /// observation ends it, counting a blink when the run reached the
    /// debounce threshold. The alert threshold is checked on every update,
    /// and reaching it resets the blink count in the same step.
    pub fn update(&mut self, face: FaceTrackId, state: EyeState) -> Vec<MonitorEvent> {
        let mut events = Vec::new();
        let counters = self.faces.entry(face).or_default();

        match state {
            EyeState::Closed => {
                counters.consecutive_closed_frames += 1;
            }
            EyeState::Open => {
                if counters.consecutive_closed_frames >= self.config.eye_closed_threshold {
                    counters.blink_count += 1;
                    debug!(%face, total = counters.blink_count, "Blink detected");
                    events.push(MonitorEvent::BlinkDetected {
                        face,
                        total_blinks: counters.blink_count,
                    });
                }
                counters.consecutive_closed_frames = 0;
            }
        }

        if counters.blink_count >= self.config.blink_alert_threshold {
            counters.blink_count = 0;
            info!(%face, "Blink rate alert triggered");
            events.push(MonitorEvent::AlertTriggered { face });
        }

        events
    }

    /// Blinks counted for a face since its last alert reset
    pub fn blink_count(&self, face: FaceTrackId) -> u32 {
        self.faces.get(&face).map_or(0, |c| c.blink_count)
    }

    /// Length of the current closed-run for a face
    pub fn closed_run(&self, face: FaceTrackId) -> u32 {
        self.faces
            .get(&face)
            .map_or(0, |c| c.consecutive_closed_frames)
    }

    /// Number of faces with live counter state
    pub fn tracked_faces(&self) -> usize {
        self.faces.len()
    }

    /// Ids of all faces with live counter state
    pub fn face_ids(&self) -> Vec<FaceTrackId> {
        self.faces.keys().copied().collect()
    }

    /// Discard counter state for a face no longer being tracked
    pub fn remove_face(&mut self, face: FaceTrackId) {
        if self.faces.remove(&face).is_some() {
            debug!(%face, "Retired face counters");
        }
    }

    /// Drop all per-face state
    pub fn reset(&mut self) {
        self.faces.clear();
    }

    /// Configured thresholds
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}
