//! SleepGuard - Main Entry Point

use alerting::{AlertDispatcher, AlertSink, LogSink, SpeechSink};
use blink_core::BlinkMonitor;
use eye_detect::StandInDetector;
use frame_source::SyntheticSource;
use sleepguard::render::{NullRender, RenderSink, SnapshotRender};
use sleepguard::{init_logging, MonitorSession, Settings};
use tokio::sync::watch;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== SleepGuard v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Monitor your eye blinks to detect drowsiness while working or driving.");

    let settings = Settings::load()?;

    let monitor = BlinkMonitor::new(settings.monitor.clone())?;
    let detector = StandInDetector::new(&settings.detector)?;
    let source = SyntheticSource::new(&settings.capture, None);

    let sink: Box<dyn AlertSink> = if settings.session.speak_alerts {
        Box::new(SpeechSink::new(&settings.alert))
    } else {
        Box::new(LogSink)
    };
    let (dispatcher, alerts) = AlertDispatcher::spawn(sink, settings.alert.queue_depth);

    let render: Box<dyn RenderSink> = match &settings.session.snapshot_dir {
        Some(dir) => Box::new(SnapshotRender::new(dir, 20)),
        None => Box::new(NullRender),
    };

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, stopping detection");
            let _ = stop_tx.send(true);
        }
    });

    let session = MonitorSession::new(
        source,
        detector,
        monitor,
        alerts,
        render,
        settings.session.clone(),
    );
    let summary = session.run(stop_rx).await;

    // Session dropped its queue handle; wait for pending alerts to drain.
    dispatcher.join().await;

    info!(
        frames = summary.frames,
        blinks = summary.blinks,
        alerts = summary.alerts,
        "Detection stopped"
    );
    Ok(())
}
