//! Detector trait and built-in implementations

use crate::{DetectError, DetectorConfig, Rect};
use frame_source::VideoFrame;
use tracing::{debug, warn};

/// Per-frame face and eye region detection.
///
/// Both operations are stateless with respect to prior frames; any temporal
/// reasoning belongs to the monitor core, not the detector.
pub trait FaceEyeDetector {
    /// Detect face regions in a frame
    fn detect_faces(&self, frame: &VideoFrame) -> Result<Vec<Rect>, DetectError>;

    /// Detect eye regions within one face region
    fn detect_eyes(&self, frame: &VideoFrame, face: &Rect) -> Result<Vec<Rect>, DetectError>;
}

/// Stand-in detector used when no classifier file is configured.
///
/// Reports one centered face and both eyes open on every frame, so the
/// surrounding pipeline can run end-to-end without a trained classifier.
pub struct StandInDetector {
    min_region_size: u32,
}

impl StandInDetector {
    pub fn new(config: &DetectorConfig) -> Result<Self, DetectError> {
        if let Some(path) = &config.classifier_path {
            return Err(DetectError::ClassifierLoad(format!(
                "external classifier '{}' requires a cascade backend; none is linked",
                path
            )));
        }
        warn!("No classifier configured. Using stand-in detection.");
        Ok(Self {
            min_region_size: config.min_region_size,
        })
    }
}

impl FaceEyeDetector for StandInDetector {
    fn detect_faces(&self, frame: &VideoFrame) -> Result<Vec<Rect>, DetectError> {
        let width = (frame.width as f32 * 0.4) as u32;
        let height = (frame.height as f32 * 0.5) as u32;
        if width < self.min_region_size || height < self.min_region_size {
            debug!("Frame too small for face region");
            return Ok(vec![]);
        }
        Ok(vec![Rect::new(
            (frame.width as f32 * 0.3) as u32,
            (frame.height as f32 * 0.2) as u32,
            width,
            height,
        )])
    }

    fn detect_eyes(&self, frame: &VideoFrame, face: &Rect) -> Result<Vec<Rect>, DetectError> {
        if !face.fits_within(frame.width, frame.height) {
            return Err(DetectError::RegionOutOfBounds);
        }
        let eye_w = (face.width / 4).max(1);
        let eye_h = (face.height / 6).max(1);
        let eye_y = face.y + face.height / 4;
        Ok(vec![
            Rect::new(face.x + face.width / 8, eye_y, eye_w, eye_h),
            Rect::new(face.x + face.width * 5 / 8, eye_y, eye_w, eye_h),
        ])
    }
}

/// Scripted detector for tests: replays a fixed eye count per frame
/// sequence number, with a constant face region.
pub struct ScriptedDetector {
    face: Rect,
    eye_counts: Vec<usize>,
}

impl ScriptedDetector {
    pub fn new(face: Rect, eye_counts: Vec<usize>) -> Self {
        Self { face, eye_counts }
    }
}

impl FaceEyeDetector for ScriptedDetector {
    fn detect_faces(&self, _frame: &VideoFrame) -> Result<Vec<Rect>, DetectError> {
        Ok(vec![self.face])
    }

    fn detect_eyes(&self, frame: &VideoFrame, face: &Rect) -> Result<Vec<Rect>, DetectError> {
        let count = self
            .eye_counts
            .get(frame.sequence as usize)
            .copied()
            .unwrap_or(2);
        let eye_w = (face.width / 4).max(1);
        let eye_h = (face.height / 6).max(1);
        Ok((0..count)
            .map(|i| {
                Rect::new(
                    face.x + i as u32 * face.width / 2,
                    face.y + face.height / 4,
                    eye_w,
                    eye_h,
                )
            })
            .collect())
    }
}
