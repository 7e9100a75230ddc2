//! Alert sinks: spoken playback and a logging fallback

use crate::{Alert, AlertConfig, AlertError, AlertSink};
use tokio::process::Command;
use tracing::{debug, info};

/// Speaks the alert message by spawning an external TTS process.
///
/// The child is not awaited; playback runs to completion on its own while
/// the worker moves on to the next alert.
pub struct SpeechSink {
    command: String,
    rate: u32,
    message: String,
}

impl SpeechSink {
    pub fn new(config: &AlertConfig) -> Self {
        Self {
            command: config.speech_command.clone(),
            rate: config.speech_rate,
            message: config.message.clone(),
        }
    }
}

impl AlertSink for SpeechSink {
    fn deliver(&self, alert: &Alert) -> Result<(), AlertError> {
        debug!(face = %alert.face, "Speaking alert");
        Command::new(&self.command)
            .arg("-s")
            .arg(self.rate.to_string())
            .arg(&self.message)
            .kill_on_drop(false)
            .spawn()
            .map_err(|e| AlertError::Speech(e.to_string()))?;
        Ok(())
    }
}

/// Logs alerts instead of playing them, for headless runs and tests
#[derive(Debug, Default)]
pub struct LogSink;

impl AlertSink for LogSink {
    fn deliver(&self, alert: &Alert) -> Result<(), AlertError> {
        info!(face = %alert.face, "ALERT: sustained blink rate detected");
        Ok(())
    }
}
