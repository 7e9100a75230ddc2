//! Bounded alert queue and delivery worker

use crate::{Alert, AlertSink};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Sending side of the alert queue, held by the frame loop.
///
/// `notify` never blocks: a full queue drops the alert with a warning, since
/// a stale drowsiness alert is worthless once a newer one is queued.
#[derive(Clone)]
pub struct AlertHandle {
    tx: mpsc::Sender<Alert>,
}

impl AlertHandle {
    pub fn notify(&self, alert: Alert) {
        match self.tx.try_send(alert) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(alert)) => {
                warn!(face = %alert.face, "Alert queue full, dropping alert");
            }
            Err(mpsc::error::TrySendError::Closed(alert)) => {
                warn!(face = %alert.face, "Alert worker stopped, dropping alert");
            }
        }
    }
}

/// Background worker draining the alert queue into a sink
pub struct AlertDispatcher {
    worker: JoinHandle<()>,
}

impl AlertDispatcher {
    /// Spawn the delivery worker and return it with the queue handle.
    ///
    /// Sink failures are logged and swallowed; delivery is best-effort.
    pub fn spawn<S: AlertSink>(sink: S, queue_depth: usize) -> (Self, AlertHandle) {
        let (tx, mut rx) = mpsc::channel::<Alert>(queue_depth.max(1));
        let worker = tokio::spawn(async move {
            while let Some(alert) = rx.recv().await {
                if let Err(e) = sink.deliver(&alert) {
                    warn!("Alert delivery failed: {}", e);
                }
            }
            debug!("Alert worker stopped");
        });
        (Self { worker }, AlertHandle { tx })
    }

    /// Wait for the worker to drain and exit. Returns once every handle has
    /// been dropped and the queue is empty.
    pub async fn join(self) {
        let _ = self.worker.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlertError;
    use blink_core::FaceTrackId;
    use std::sync::{Arc, Mutex};

    struct RecordingSink {
        delivered: Arc<Mutex<Vec<Alert>>>,
    }

    impl AlertSink for RecordingSink {
        fn deliver(&self, alert: &Alert) -> Result<(), AlertError> {
            self.delivered.lock().unwrap().push(*alert);
            Ok(())
        }
    }

    struct FailingSink;

    impl AlertSink for FailingSink {
        fn deliver(&self, _alert: &Alert) -> Result<(), AlertError> {
            Err(AlertError::Speech("engine unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_alerts_reach_the_sink() {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingSink {
            delivered: delivered.clone(),
        };
        let (dispatcher, handle) = AlertDispatcher::spawn(sink, 4);

        handle.notify(Alert {
            face: FaceTrackId(0),
        });
        handle.notify(Alert {
            face: FaceTrackId(1),
        });
        drop(handle);
        dispatcher.join().await;

        let delivered = delivered.lock().unwrap();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].face, FaceTrackId(0));
        assert_eq!(delivered[1].face, FaceTrackId(1));
    }

    #[tokio::test]
    async fn test_full_queue_drops_without_blocking() {
        // No worker draining this channel; notify must still return.
        let (tx, _rx) = mpsc::channel(1);
        let handle = AlertHandle { tx };
        handle.notify(Alert {
            face: FaceTrackId(0),
        });
        handle.notify(Alert {
            face: FaceTrackId(0),
        });
    }

    #[tokio::test]
    async fn test_sink_failure_does_not_kill_worker() {
        let (dispatcher, handle) = AlertDispatcher::spawn(FailingSink, 4);
        handle.notify(Alert {
            face: FaceTrackId(0),
        });
        handle.notify(Alert {
            face: FaceTrackId(0),
        });
        drop(handle);
        // Worker exits cleanly even though every delivery failed.
        dispatcher.join().await;
    }
}
