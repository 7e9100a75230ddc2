//! Layered application settings
//!
//! Defaults, then an optional `sleepguard.toml`, then `SLEEPGUARD_*`
//! environment variables (e.g. `SLEEPGUARD_MONITOR__BLINK_ALERT_THRESHOLD=5`).

use crate::session::SessionConfig;
use alerting::AlertConfig;
use blink_core::MonitorConfig;
use config::{Config, ConfigError, Environment, File};
use eye_detect::DetectorConfig;
use frame_source::CaptureConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub capture: CaptureConfig,
    pub detector: DetectorConfig,
    pub monitor: MonitorConfig,
    pub alert: AlertConfig,
    pub session: SessionConfig,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Config::try_from(&Settings::default())?;
        Config::builder()
            .add_source(defaults)
            .add_source(File::with_name("sleepguard").required(false))
            .add_source(Environment::with_prefix("SLEEPGUARD").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_component_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.monitor.eye_closed_threshold, 3);
        assert_eq!(settings.monitor.blink_alert_threshold, 3);
        assert_eq!(settings.capture.width, 640);
        assert_eq!(settings.session.frame_interval_ms, 50);
    }

    #[test]
    fn test_defaults_round_trip_through_config() {
        let config = Config::try_from(&Settings::default()).unwrap();
        let settings: Settings = config.try_deserialize().unwrap();
        assert!(settings.monitor.validate().is_ok());
    }
}
