//! Release detection from wrist speed
//!
//! Peak hand speed is taken as the moment of ball release in an overhand
//! throw. Speed is the first difference between list-adjacent frames over a
//! fixed frame interval; dropped frames upstream are not compensated for.

use serde::Serialize;

use crate::bridge::{Frame, Landmark, Timeline};
use crate::config::{AnalysisConfig, ThrowingSide};
use crate::error::{AnalysisError, Result};

use super::angles::{angle_between, distance, line_angle, separation_angle};

/// m/s → mph
pub const MPH_PER_METER_PER_SECOND: f64 = 2.237;

/// Frame where the throwing wrist peaks
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReleaseEvent {
    pub frame_index: usize,
    pub timestamp: f64,
    pub peak_speed: f64,
}

/// Unrounded release-time measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub separation_degrees: f64,
    pub elbow_degrees: f64,
    pub estimated_velocity_mph: f64,
    pub release_time_seconds: f64,
}

/// Finds the release event and measures the body at that frame
#[derive(Debug, Clone)]
pub struct KinematicAnalyzer {
    /// Fixed spacing assumed between adjacent frames (s)
    frame_interval: f64,
    pixels_per_meter: f64,
    correction_factor: f64,
    /// Minimum peak speed (px/s) to count as a throw
    speed_threshold: f64,
    side: ThrowingSide,
}

impl KinematicAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            frame_interval: config.frame_interval_seconds,
            pixels_per_meter: config.pixels_per_meter,
            correction_factor: config.velocity_correction_factor,
            speed_threshold: config.no_throw_speed_threshold,
            side: config.throwing_side,
        }
    }

    /// Per-pair wrist speeds in px/s; entry `i - 1` is the speed into frame `i`
    pub fn wrist_speeds(&self, timeline: &Timeline) -> Vec<f64> {
        let wrist = self.side.wrist();
        timeline
            .frames()
            .windows(2)
            .map(|pair| {
                let prev = pair[0].keypoint(wrist).position();
                let curr = pair[1].keypoint(wrist).position();
                distance(curr, prev) / self.frame_interval
            })
            .collect()
    }

    /// Peak wrist speed across the whole timeline; ties keep the earliest frame
    pub fn detect_release(&self, timeline: &Timeline) -> Result<ReleaseEvent> {
        let mut peak_speed = 0.0;
        let mut frame_index = 0;

        for (i, speed) in self.wrist_speeds(timeline).into_iter().enumerate() {
            if speed > peak_speed {
                peak_speed = speed;
                frame_index = i + 1;
            }
        }

        if peak_speed < self.speed_threshold {
            log::warn!(
                "No throw: peak wrist speed {:.1} px/s below {:.1} px/s",
                peak_speed,
                self.speed_threshold
            );
            return Err(AnalysisError::NoThrowDetected {
                peak_speed,
                threshold: self.speed_threshold,
            });
        }

        let timestamp = timeline.frames()[frame_index].timestamp;
        log::debug!(
            "Release at frame {} (t={:.3}s), peak {:.1} px/s",
            frame_index,
            timestamp,
            peak_speed
        );
        Ok(ReleaseEvent {
            frame_index,
            timestamp,
            peak_speed,
        })
    }

    /// Pixel speed → mph, scaled by the sampling correction factor
    pub fn estimate_velocity_mph(&self, peak_speed: f64) -> f64 {
        (peak_speed / self.pixels_per_meter) * MPH_PER_METER_PER_SECOND * self.correction_factor
    }

    /// Body measurements at the release frame
    pub fn measure(&self, frame: &Frame, release: &ReleaseEvent) -> Metrics {
        let point = |lm: Landmark| frame.keypoint(lm).position();

        let shoulder_line = line_angle(
            point(Landmark::LeftShoulder),
            point(Landmark::RightShoulder),
        );
        let hip_line = line_angle(point(Landmark::LeftHip), point(Landmark::RightHip));

        let elbow_degrees = angle_between(
            point(self.side.shoulder()),
            point(self.side.elbow()),
            point(self.side.wrist()),
        );

        Metrics {
            separation_degrees: separation_angle(shoulder_line, hip_line),
            elbow_degrees,
            estimated_velocity_mph: self.estimate_velocity_mph(release.peak_speed),
            release_time_seconds: release.frame_index as f64 * self.frame_interval,
        }
    }

    /// Detect release and measure it
    pub fn analyze(&self, timeline: &Timeline) -> Result<(ReleaseEvent, Metrics)> {
        let release = self.detect_release(timeline)?;
        let metrics = self.measure(&timeline.frames()[release.frame_index], &release);
        Ok((release, metrics))
    }
}

impl Default for KinematicAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}
