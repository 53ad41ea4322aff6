//! Analysis configuration
//!
//! Every tunable has a production default and can be overridden from JSON
//! (camelCase keys, missing keys fall back to the default).

use serde::{Deserialize, Serialize};

use crate::bridge::Landmark;
use crate::error::{AnalysisError, Result};

/// Nominal capture rate of the frame extractor
pub const DEFAULT_FRAME_INTERVAL: f64 = 1.0 / 30.0;

/// One Euro filter parameters shared by all 34 coordinate filters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    /// Minimum cutoff frequency (Hz) - lower = smoother at rest
    pub min_cutoff: f64,
    /// Speed coefficient - higher = less lag during fast motion
    pub beta: f64,
    /// Derivative cutoff frequency (Hz)
    pub d_cutoff: f64,
}

impl FilterConfig {
    pub fn new(min_cutoff: f64, beta: f64, d_cutoff: f64) -> Self {
        Self {
            min_cutoff,
            beta,
            d_cutoff,
        }
    }

    /// Older parameterization with no speed adaptation (plain low-pass)
    pub fn legacy() -> Self {
        Self::new(1.0, 0.0, 1.0)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new(1.0, 0.05, 1.0)
    }
}

/// Arm that releases the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThrowingSide {
    #[default]
    Right,
    Left,
}

impl ThrowingSide {
    pub fn wrist(self) -> Landmark {
        match self {
            ThrowingSide::Right => Landmark::RightWrist,
            ThrowingSide::Left => Landmark::LeftWrist,
        }
    }

    pub fn elbow(self) -> Landmark {
        match self {
            ThrowingSide::Right => Landmark::RightElbow,
            ThrowingSide::Left => Landmark::LeftElbow,
        }
    }

    pub fn shoulder(self) -> Landmark {
        match self {
            ThrowingSide::Right => Landmark::RightShoulder,
            ThrowingSide::Left => Landmark::LeftShoulder,
        }
    }
}

/// Full set of recognized analysis options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    pub filter: FilterConfig,
    /// Scale calibration (no scene-geometry calibration is attempted)
    pub pixels_per_meter: f64,
    /// Compensates discrete sampling missing the instantaneous peak
    pub velocity_correction_factor: f64,
    /// Peak wrist speed (px/s) below which no throw is reported
    pub no_throw_speed_threshold: f64,
    pub frame_interval_seconds: f64,
    pub throwing_side: ThrowingSide,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            pixels_per_meter: 250.0,
            velocity_correction_factor: 1.5,
            no_throw_speed_threshold: 50.0,
            frame_interval_seconds: DEFAULT_FRAME_INTERVAL,
            throwing_side: ThrowingSide::Right,
        }
    }
}

impl AnalysisConfig {
    /// Parse overrides from JSON; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_throwing_side(mut self, side: ThrowingSide) -> Self {
        self.throwing_side = side;
        self
    }

    /// Reject parameter values the filter or analyzer math cannot use
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("minCutoff", self.filter.min_cutoff),
            ("beta", self.filter.beta),
            ("dCutoff", self.filter.d_cutoff),
            ("pixelsPerMeter", self.pixels_per_meter),
            ("velocityCorrectionFactor", self.velocity_correction_factor),
            ("noThrowSpeedThreshold", self.no_throw_speed_threshold),
            ("frameIntervalSeconds", self.frame_interval_seconds),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AnalysisError::config(format!("{name} must be finite")));
        }

        if self.filter.min_cutoff < 0.0 {
            return Err(AnalysisError::config("minCutoff must be >= 0"));
        }
        if self.filter.beta < 0.0 {
            return Err(AnalysisError::config("beta must be >= 0"));
        }
        if self.filter.d_cutoff <= 0.0 {
            return Err(AnalysisError::config("dCutoff must be > 0"));
        }
        if self.pixels_per_meter <= 0.0 {
            return Err(AnalysisError::config("pixelsPerMeter must be > 0"));
        }
        if self.velocity_correction_factor < 0.0 {
            return Err(AnalysisError::config("velocityCorrectionFactor must be >= 0"));
        }
        if self.no_throw_speed_threshold < 0.0 {
            return Err(AnalysisError::config("noThrowSpeedThreshold must be >= 0"));
        }
        if self.frame_interval_seconds <= 0.0 {
            return Err(AnalysisError::config("frameIntervalSeconds must be > 0"));
        }
        Ok(())
    }
}
