//! Per-frame eye state sampling

use eye_detect::Rect;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Eye state for one face in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EyeState {
    Open,
    Closed,
}

/// Converts one frame's detector output into an [`EyeState`] per face.
///
/// Pure and memoryless: `Closed` iff the detector returned zero eye regions
/// for the face. Temporal smoothing is the monitor's job, not the sampler's.
#[derive(Debug, Clone, Copy, Default)]
pub struct EyeStateSampler;

impl EyeStateSampler {
    pub fn sample(&self, face: &Rect, eyes: &[Rect]) -> EyeState {
        let state = if eyes.is_empty() {
            EyeState::Closed
        } else {
            EyeState::Open
        };
        trace!(
            face_x = face.x,
            face_y = face.y,
            eye_regions = eyes.len(),
            ?state,
            "sampled eye state"
        );
        state
    }
}
