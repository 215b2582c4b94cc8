use std::fs;
use std::path::Path;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::geometry::DEFAULT_HANDLE_WIDTH;
use crate::time::MediaTime;

/// Config files with a newer major version than this are rejected.
pub const CURRENT_CONFIG_VERSION: Version = Version::new(1, 0, 0);

fn current_version() -> Version {
    CURRENT_CONFIG_VERSION
}

/// Construction-time settings for a [`crate::controller::TrimmerController`].
///
/// Durations are plain seconds so the on-disk JSON stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimmerConfig {
    #[serde(default = "current_version")]
    pub version: Version,
    #[serde(default)]
    pub minimum_duration_secs: f64,
    #[serde(default)]
    pub maximum_duration_secs: Option<f64>,
    #[serde(default)]
    pub initial_duration_secs: f64,
    #[serde(default = "default_handle_width")]
    pub handle_width: f32,
    #[serde(default)]
    pub total_width: f32,
}

fn default_handle_width() -> f32 {
    DEFAULT_HANDLE_WIDTH
}

impl TrimmerConfig {
    pub fn new() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            minimum_duration_secs: 0.0,
            maximum_duration_secs: None,
            initial_duration_secs: 0.0,
            handle_width: DEFAULT_HANDLE_WIDTH,
            total_width: 0.0,
        }
    }

    pub fn with_minimum_duration(mut self, secs: f64) -> Self {
        self.minimum_duration_secs = secs;
        self
    }

    pub fn with_maximum_duration(mut self, secs: f64) -> Self {
        self.maximum_duration_secs = Some(secs);
        self
    }

    pub fn with_initial_duration(mut self, secs: f64) -> Self {
        self.initial_duration_secs = secs;
        self
    }

    pub fn with_handle_width(mut self, width: f32) -> Self {
        self.handle_width = width;
        self
    }

    pub fn with_total_width(mut self, width: f32) -> Self {
        self.total_width = width;
        self
    }

    /// Reject settings that can only come from a programming mistake.
    ///
    /// A zero or negative initial duration is not an error here: it is a
    /// degenerate empty asset and the model normalizes it.
    pub fn validate(&self) -> Result<()> {
        let min = self.minimum_duration_secs;
        if min.is_nan() || min < 0.0 {
            return Err(CoreError::NegativeMinimumDuration(min));
        }
        if min.is_infinite() {
            return Err(CoreError::InvalidDuration(min));
        }
        if let Some(max) = self.maximum_duration_secs {
            if !max.is_finite() || max < 0.0 {
                return Err(CoreError::InvalidDuration(max));
            }
            if max < min {
                return Err(CoreError::MaximumBelowMinimum {
                    minimum: self.minimum_duration(),
                    maximum: MediaTime::from_secs_f64(max),
                });
            }
        }
        if self.initial_duration_secs.is_nan() || self.initial_duration_secs.is_infinite() {
            return Err(CoreError::InvalidDuration(self.initial_duration_secs));
        }
        if !self.handle_width.is_finite() || self.handle_width < 0.0 {
            return Err(CoreError::InvalidHandleWidth(self.handle_width));
        }
        if !self.total_width.is_finite() || self.total_width < 0.0 {
            return Err(CoreError::InvalidWidth(self.total_width));
        }
        Ok(())
    }

    pub fn minimum_duration(&self) -> MediaTime {
        MediaTime::from_secs_f64(self.minimum_duration_secs)
    }

    pub fn maximum_duration(&self) -> Option<MediaTime> {
        self.maximum_duration_secs.map(MediaTime::from_secs_f64)
    }

    pub fn initial_duration(&self) -> MediaTime {
        MediaTime::from_secs_f64(self.initial_duration_secs)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        if config.version.major > CURRENT_CONFIG_VERSION.major {
            return Err(CoreError::UnsupportedConfigVersion {
                found: config.version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }
        config.validate()?;
        Ok(config)
    }
}

impl Default for TrimmerConfig {
    fn default() -> Self {
        Self::new()
    }
}
