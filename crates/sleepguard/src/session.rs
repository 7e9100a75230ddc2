//! Monitoring session lifecycle
//!
//! A session owns the frame loop and every piece of per-face state. It is
//! created on start, runs until the source ends or a stop signal arrives,
//! and leaves nothing behind when dropped.

use crate::overlay::OverlayInfo;
use crate::render::RenderSink;
use alerting::{Alert, AlertHandle};
use blink_core::{BlinkMonitor, EyeStateSampler, FaceTrackId, MonitorEvent};
use eye_detect::FaceEyeDetector;
use frame_source::{FrameSource, VideoFrame};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pacing delay between frame reads (milliseconds)
    pub frame_interval_ms: u64,
    /// Frames a face may stay undetected before its counters are discarded
    pub face_absent_retire_frames: u32,
    /// Speak alerts via TTS instead of only logging them
    pub speak_alerts: bool,
    /// Directory for annotated frame snapshots; disabled when absent
    pub snapshot_dir: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 50,
            face_absent_retire_frames: 30,
            speak_alerts: true,
            snapshot_dir: None,
        }
    }
}

/// Counts reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub frames: u64,
    pub blinks: u64,
    pub alerts: u64,
}

/// One monitoring session: frame loop plus exclusively-owned monitor state
pub struct MonitorSession<S, D, R> {
    source: S,
    detector: D,
    sampler: EyeStateSampler,
    monitor: BlinkMonitor,
    alerts: AlertHandle,
    render: R,
    config: SessionConfig,
    /// Consecutive frames each tracked face has been undetected
    absent: HashMap<FaceTrackId, u32>,
}

impl<S, D, R> MonitorSession<S, D, R>
where
    S: FrameSource,
    D: FaceEyeDetector,
    R: RenderSink,
{
    pub fn new(
        source: S,
        detector: D,
        monitor: BlinkMonitor,
        alerts: AlertHandle,
        render: R,
        config: SessionConfig,
    ) -> Self {
        Self {
            source,
            detector,
            sampler: EyeStateSampler,
            monitor,
            alerts,
            render,
            config,
            absent: HashMap::new(),
        }
    }

    /// Run the frame loop until end-of-stream, a capture failure, or a stop
    /// signal. Capture failures are surfaced as a warning and halt the loop;
    /// they never reach the monitor.
    pub async fn run(mut self, mut stop: watch::Receiver<bool>) -> SessionSummary {
        info!("Monitoring session started");
        let pacing = Duration::from_millis(self.config.frame_interval_ms);
        let mut summary = SessionSummary::default();

        loop {
            if *stop.borrow() {
                info!("Stop requested");
                break;
            }

            let frame = match self.source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    info!("Frame source ended");
                    break;
                }
                Err(e) => {
                    warn!("Could not access the camera: {}", e);
                    break;
                }
            };

            summary.frames += 1;
            self.process_frame(&frame, &mut summary);

            tokio::select! {
                _ = tokio::time::sleep(pacing) => {}
                _ = stop.changed() => {}
            }
        }

        info!(
            frames = summary.frames,
            blinks = summary.blinks,
            alerts = summary.alerts,
            "Monitoring session stopped"
        );
        summary
    }

    fn process_frame(&mut self, frame: &VideoFrame, summary: &mut SessionSummary) {
        let faces = match self.detector.detect_faces(frame) {
            Ok(faces) => faces,
            Err(e) => {
                debug!("Face detection failed, skipping frame: {}", e);
                return;
            }
        };

        let mut overlay = OverlayInfo::default();
        let mut seen = HashSet::new();

        for (index, face) in faces.iter().enumerate() {
            let id = FaceTrackId(index as u32);
            seen.insert(id);

            let eyes = match self.detector.detect_eyes(frame, face) {
                Ok(eyes) => eyes,
                Err(e) => {
                    debug!(%id, "Eye detection failed for face: {}", e);
                    continue;
                }
            };

            let state = self.sampler.sample(face, &eyes);
            for event in self.monitor.update(id, state) {
                match event {
                    MonitorEvent::BlinkDetected { face, total_blinks } => {
                        info!(%face, total_blinks, "Blink detected");
                        summary.blinks += 1;
                    }
                    MonitorEvent::AlertTriggered { face } => {
                        summary.alerts += 1;
                        self.alerts.notify(Alert { face });
                    }
                }
            }

            overlay.faces.push(*face);
            overlay.eyes.extend(eyes);
            overlay.blink_counts.push((id, self.monitor.blink_count(id)));
        }

        self.retire_absent(&seen);
        self.render.present(frame, &overlay);
    }

    /// Drop counters for faces undetected longer than the retire window
    fn retire_absent(&mut self, seen: &HashSet<FaceTrackId>) {
        for id in self.monitor.face_ids() {
            if seen.contains(&id) {
                self.absent.remove(&id);
                continue;
            }
            let missed = self.absent.entry(id).or_insert(0);
            *missed += 1;
            if *missed >= self.config.face_absent_retire_frames {
                self.monitor.remove_face(id);
                self.absent.remove(&id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alerting::{AlertDispatcher, LogSink};
    use blink_core::MonitorConfig;
    use eye_detect::{DetectError, Rect, ScriptedDetector};
    use frame_source::{CaptureConfig, CaptureError, SyntheticSource};

    fn test_session<D: FaceEyeDetector>(
        detector: D,
        frames: u32,
    ) -> (
        MonitorSession<SyntheticSource, D, crate::render::NullRender>,
        AlertDispatcher,
    ) {
        let capture = CaptureConfig {
            width: 64,
            height: 64,
            ..Default::default()
        };
        let source = SyntheticSource::new(&capture, Some(frames));
        let monitor = BlinkMonitor::new(MonitorConfig::default()).unwrap();
        let (dispatcher, handle) = AlertDispatcher::spawn(LogSink, 4);
        let config = SessionConfig {
            frame_interval_ms: 0,
            ..Default::default()
        };
        let session = MonitorSession::new(
            source,
            detector,
            monitor,
            handle,
            crate::render::NullRender,
            config,
        );
        (session, dispatcher)
    }

    fn stop_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
        watch::channel(false)
    }

    #[tokio::test]
    async fn test_blink_pattern_produces_alert() {
        // Thresholds (3, 3): three closed-runs of length 3, each ended by an
        // open frame, give three blinks and one alert.
        let script: Vec<usize> = [[0, 0, 0, 2]; 3].concat();
        let frames = script.len() as u32;
        let detector = ScriptedDetector::new(Rect::new(8, 8, 32, 32), script);
        let (session, dispatcher) = test_session(detector, frames);

        let (_stop, rx) = stop_channel();
        let summary = session.run(rx).await;
        dispatcher.join().await;

        assert_eq!(summary.frames, frames as u64);
        assert_eq!(summary.blinks, 3);
        assert_eq!(summary.alerts, 1);
    }

    #[tokio::test]
    async fn test_short_closed_runs_never_alert() {
        let script: Vec<usize> = [[0, 0, 2]; 5].concat();
        let frames = script.len() as u32;
        let detector = ScriptedDetector::new(Rect::new(8, 8, 32, 32), script);
        let (session, dispatcher) = test_session(detector, frames);

        let (_stop, rx) = stop_channel();
        let summary = session.run(rx).await;
        dispatcher.join().await;

        assert_eq!(summary.blinks, 0);
        assert_eq!(summary.alerts, 0);
    }

    /// Delivers a fixed number of frames, then fails like an unplugged camera
    struct FailingSource {
        frames_before_failure: u32,
        sequence: u32,
    }

    impl FrameSource for FailingSource {
        fn next_frame(&mut self) -> Result<Option<VideoFrame>, CaptureError> {
            if self.sequence >= self.frames_before_failure {
                return Err(CaptureError::Read("device disconnected".to_string()));
            }
            let frame = VideoFrame::new(vec![0; 64 * 64 * 3], 64, 64, 0, self.sequence);
            self.sequence += 1;
            Ok(Some(frame))
        }
    }

    #[tokio::test]
    async fn test_capture_failure_halts_the_session() {
        // Every delivered frame reads closed; the failure lands mid closed-run,
        // so the monitor never sees the failed frame and no blink completes.
        let source = FailingSource {
            frames_before_failure: 2,
            sequence: 0,
        };
        let detector = ScriptedDetector::new(Rect::new(8, 8, 32, 32), vec![0; 16]);
        let monitor = BlinkMonitor::new(MonitorConfig::default()).unwrap();
        let (dispatcher, handle) = AlertDispatcher::spawn(LogSink, 4);
        let config = SessionConfig {
            frame_interval_ms: 0,
            ..Default::default()
        };
        let session = MonitorSession::new(
            source,
            detector,
            monitor,
            handle,
            crate::render::NullRender,
            config,
        );

        let (_stop, rx) = stop_channel();
        let summary = session.run(rx).await;
        dispatcher.join().await;

        // Only the frames before the failure were processed.
        assert_eq!(summary.frames, 2);
        assert_eq!(summary.blinks, 0);
        assert_eq!(summary.alerts, 0);
    }

    struct NoFaceDetector;

    impl FaceEyeDetector for NoFaceDetector {
        fn detect_faces(&self, _frame: &VideoFrame) -> Result<Vec<Rect>, DetectError> {
            Ok(vec![])
        }

        fn detect_eyes(&self, _frame: &VideoFrame, _face: &Rect) -> Result<Vec<Rect>, DetectError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_frames_without_faces_leave_no_state() {
        let (session, dispatcher) = test_session(NoFaceDetector, 10);
        let (_stop, rx) = stop_channel();
        let summary = session.run(rx).await;
        dispatcher.join().await;

        assert_eq!(summary.frames, 10);
        assert_eq!(summary.blinks, 0);
        assert_eq!(summary.alerts, 0);
    }

    #[tokio::test]
    async fn test_absent_face_counters_are_retired() {
        let capture = CaptureConfig {
            width: 64,
            height: 64,
            ..Default::default()
        };
        let monitor = BlinkMonitor::new(MonitorConfig::default()).unwrap();
        let (dispatcher, handle) = AlertDispatcher::spawn(LogSink, 4);
        let config = SessionConfig {
            frame_interval_ms: 0,
            face_absent_retire_frames: 2,
            ..Default::default()
        };
        let mut session = MonitorSession::new(
            SyntheticSource::new(&capture, Some(0)),
            ScriptedDetector::new(Rect::new(8, 8, 32, 32), vec![0]),
            monitor,
            handle,
            crate::render::NullRender,
            config,
        );

        let frame = VideoFrame::new(vec![0; 64 * 64 * 3], 64, 64, 0, 0);
        let mut summary = SessionSummary::default();
        session.process_frame(&frame, &mut summary);
        assert_eq!(session.monitor.tracked_faces(), 1);

        // The face disappears; two absent frames retire its counters.
        let none = HashSet::new();
        session.retire_absent(&none);
        assert_eq!(session.monitor.tracked_faces(), 1);
        session.retire_absent(&none);
        assert_eq!(session.monitor.tracked_faces(), 0);

        drop(session);
        dispatcher.join().await;
    }

    #[tokio::test]
    async fn test_stop_signal_halts_the_loop() {
        let detector = ScriptedDetector::new(Rect::new(8, 8, 32, 32), vec![]);
        // Unlimited source; only the stop signal can end the loop.
        let capture = CaptureConfig {
            width: 64,
            height: 64,
            ..Default::default()
        };
        let source = SyntheticSource::new(&capture, None);
        let monitor = BlinkMonitor::new(MonitorConfig::default()).unwrap();
        let (dispatcher, handle) = AlertDispatcher::spawn(LogSink, 4);
        let config = SessionConfig {
            frame_interval_ms: 1,
            ..Default::default()
        };
        let session = MonitorSession::new(
            source,
            detector,
            monitor,
            handle,
            crate::render::NullRender,
            config,
        );

        let (tx, rx) = watch::channel(false);
        let run = tokio::spawn(session.run(rx));
        tokio::time::sleep(Duration::from_millis(20)).await;
        tx.send(true).unwrap();
        let summary = run.await.unwrap();
        assert!(summary.frames > 0);
        dispatcher.join().await;
    }
}
