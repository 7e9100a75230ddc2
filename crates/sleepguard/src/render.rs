//! Render sinks
//!
//! Rendering is advisory: the session hands each frame and its overlay to a
//! sink and never depends on what the sink does with it.

use crate::overlay::{annotate, OverlayInfo};
use frame_source::VideoFrame;
use std::path::PathBuf;
use tracing::{debug, warn};

pub trait RenderSink {
    fn present(&mut self, frame: &VideoFrame, overlay: &OverlayInfo);
}

impl RenderSink for Box<dyn RenderSink> {
    fn present(&mut self, frame: &VideoFrame, overlay: &OverlayInfo) {
        (**self).present(frame, overlay)
    }
}

/// Discards frames, for headless runs
#[derive(Debug, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn present(&mut self, _frame: &VideoFrame, _overlay: &OverlayInfo) {}
}

/// Writes an annotated PNG for every Nth frame
pub struct SnapshotRender {
    dir: PathBuf,
    every: u32,
}

impl SnapshotRender {
    pub fn new(dir: impl Into<PathBuf>, every: u32) -> Self {
        Self {
            dir: dir.into(),
            every: every.max(1),
        }
    }
}

impl RenderSink for SnapshotRender {
    fn present(&mut self, frame: &VideoFrame, overlay: &OverlayInfo) {
        if frame.sequence % self.every != 0 {
            return;
        }
        let path = self.dir.join(format!("frame-{:06}.png", frame.sequence));
        let img = annotate(frame, overlay);
        match img.save(&path) {
            Ok(()) => debug!(
                path = %path.display(),
                blinks = overlay.total_blinks(),
                "Snapshot written"
            ),
            Err(e) => warn!("Snapshot write failed: {}", e),
        }
    }
}
