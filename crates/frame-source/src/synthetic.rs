//! Synthetic frame source
//!
//! Generates a flat test-pattern stream for headless runs and tests, where
//! no real capture backend is linked.

use crate::{CaptureConfig, CaptureError, FrameSource, VideoFrame};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

pub struct SyntheticSource {
    width: u32,
    height: u32,
    sequence: u32,
    /// Stop after this many frames; `None` runs until externally stopped
    limit: Option<u32>,
}

impl SyntheticSource {
    pub fn new(config: &CaptureConfig, limit: Option<u32>) -> Self {
        info!(
            width = config.width,
            height = config.height,
            "Using synthetic frame source"
        );
        Self {
            width: config.width,
            height: config.height,
            sequence: 0,
            limit,
        }
    }
}

impl FrameSource for SyntheticSource {
    fn next_frame(&mut self) -> Result<Option<VideoFrame>, CaptureError> {
        if let Some(limit) = self.limit {
            if self.sequence >= limit {
                return Ok(None);
            }
        }
        let timestamp_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let frame = VideoFrame::new(
            vec![0x80; (self.width * self.height * 3) as usize],
            self.width,
            self.height,
            timestamp_ns,
            self.sequence,
        );
        self.sequence += 1;
        Ok(Some(frame))
    }
}
