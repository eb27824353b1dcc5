use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{Result, RotatorError};

/// Settings a rotator runs with. Fixed once the rotator is initialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub slide_duration: Duration,
    pub padding: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slide_duration: DEFAULT_SLIDE_DURATION,
            padding: DEFAULT_PADDING,
        }
    }
}

/// Partial configuration object. Absent fields keep the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsOverride {
    #[serde(default, alias = "slide_duration")]
    pub slide_duration_ms: Option<u64>,
    #[serde(default)]
    pub padding: Option<f32>,
}

impl SettingsOverride {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Field-wise merge where `other` wins.
    pub fn layer(&self, other: &SettingsOverride) -> SettingsOverride {
        SettingsOverride {
            slide_duration_ms: other.slide_duration_ms.or(self.slide_duration_ms),
            padding: other.padding.or(self.padding),
        }
    }
}

impl Settings {
    pub fn merge(&self, overrides: &SettingsOverride) -> Result<Settings> {
        let mut merged = *self;

        if let Some(ms) = overrides.slide_duration_ms {
            if ms == 0 {
                return Err(RotatorError::InvalidSettings(
                    "slide duration must be greater than zero".to_string(),
                ));
            }
            merged.slide_duration = Duration::from_millis(ms);
        }

        if let Some(padding) = overrides.padding {
            if !padding.is_finite() || padding < 0.0 {
                return Err(RotatorError::InvalidSettings(format!(
                    "padding must be a non-negative number, got {}",
                    padding
                )));
            }
            merged.padding = padding;
        }

        Ok(merged)
    }
}
