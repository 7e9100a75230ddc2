//! Monitor events and face identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier distinguishing one tracked face from another.
///
/// Stable only within one monitoring session; the session assigns ids and
/// retires them when a face stays absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceTrackId(pub u32);

impl fmt::Display for FaceTrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "face-{}", self.0)
    }
}

/// Events emitted by the blink monitor, transient and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorEvent {
    /// A completed blink was counted for a face
    BlinkDetected {
        face: FaceTrackId,
        /// Blinks counted for this face since the last alert reset
        total_blinks: u32,
    },

    /// The rolling blink count reached the alert threshold
    AlertTriggered { face: FaceTrackId },
}

impl MonitorEvent {
    /// Face this event belongs to
    pub fn face(&self) -> FaceTrackId {
        match self {
            MonitorEvent::BlinkDetected { face, .. } => *face,
            MonitorEvent::AlertTriggered { face } => *face,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_face_accessor() {
        let id = FaceTrackId(7);
        let blink = MonitorEvent::BlinkDetected {
            face: id,
            total_blinks: 2,
        };
        let alert = MonitorEvent::AlertTriggered { face: id };
        assert_eq!(blink.face(), id);
        assert_eq!(alert.face(), id);
    }

    #[test]
    fn test_event_serializes() {
        let event = MonitorEvent::BlinkDetected {
            face: FaceTrackId(0),
            total_blinks: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("BlinkDetected"));
    }
}
