//! Validated keypoint timeline
//!
//! A request owns its timeline exclusively. Construction rejects anything the
//! causal stages downstream cannot consume: empty input, non-finite or
//! out-of-range values, and timestamp regressions the filter cannot absorb.
//!
//! A single non-increasing timestamp (a duplicate, or a frame at most one
//! frame interval behind the latest one) is kept. The smoother freezes its
//! output for that frame and speed is still taken between list-adjacent
//! frames. Two regressions in a row, or one deeper than a frame interval, is
//! a malformed capture.

use serde::{Deserialize, Serialize};

use super::landmarks::{Frame, FLAT_FRAME_LEN};
use crate::config::DEFAULT_FRAME_INTERVAL;
use crate::error::{AnalysisError, Result};

/// Largest accepted coordinate magnitude (px). Keeps filter derivatives finite.
pub const MAX_COORDINATE: f64 = 1.0e6;

/// Smallest accepted forward step between timestamps (s)
pub const MIN_TIME_STEP: f64 = 1.0e-9;

/// Ordered frames; timestamps increase apart from isolated single-step regressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Frame>", into = "Vec<Frame>")]
pub struct Timeline {
    frames: Vec<Frame>,
}

impl Timeline {
    /// Validate against the nominal 1/30 s frame interval
    pub fn new(frames: Vec<Frame>) -> Result<Self> {
        Self::with_frame_interval(frames, DEFAULT_FRAME_INTERVAL)
    }

    /// Validate, allowing isolated regressions of up to one `frame_interval`
    pub fn with_frame_interval(frames: Vec<Frame>, frame_interval: f64) -> Result<Self> {
        if !(frame_interval.is_finite() && frame_interval > 0.0) {
            return Err(AnalysisError::config("frameIntervalSeconds must be > 0"));
        }
        if frames.is_empty() {
            return Err(AnalysisError::EmptyTimeline);
        }

        for (index, frame) in frames.iter().enumerate() {
            if !frame.timestamp.is_finite() {
                return Err(AnalysisError::NonFiniteTimestamp { index });
            }
            for kp in frame.keypoints() {
                if !kp.x.is_finite() || !kp.y.is_finite() {
                    return Err(AnalysisError::NonFiniteCoordinate {
                        frame: index,
                        landmark: kp.landmark.name(),
                    });
                }
                if kp.x.abs() > MAX_COORDINATE || kp.y.abs() > MAX_COORDINATE {
                    return Err(AnalysisError::CoordinateOutOfRange {
                        frame: index,
                        landmark: kp.landmark.name(),
                        limit: MAX_COORDINATE,
                    });
                }
            }
        }

        let mut latest = frames[0].timestamp;
        let mut previous_regressed = false;
        for (index, frame) in frames.iter().enumerate().skip(1) {
            let current = frame.timestamp;
            if current > latest {
                if current - latest < MIN_TIME_STEP {
                    return Err(AnalysisError::TimestampStepTooSmall {
                        index,
                        step: current - latest,
                    });
                }
                latest = current;
                previous_regressed = false;
                continue;
            }

            if previous_regressed || latest - current > frame_interval {
                return Err(AnalysisError::NonMonotonicTimestamps {
                    index,
                    previous: latest,
                    current,
                });
            }
            log::debug!(
                "Frame {} at {}s does not advance past {}s; smoother holds its output",
                index,
                current,
                latest
            );
            previous_regressed = true;
        }

        Ok(Self { frames })
    }

    /// Build from a flat buffer of `n × 51` values, frame `i` stamped at
    /// `i × frame_interval`
    pub fn from_flat(data: &[f64], frame_interval: f64) -> Result<Self> {
        if data.is_empty() {
            return Err(AnalysisError::EmptyTimeline);
        }
        if data.len() % FLAT_FRAME_LEN != 0 {
            return Err(AnalysisError::InvalidLandmarkCount {
                expected: FLAT_FRAME_LEN,
                actual: data.len() % FLAT_FRAME_LEN,
            });
        }

        let frames = data
            .chunks_exact(FLAT_FRAME_LEN)
            .enumerate()
            .map(|(i, chunk)| Frame::from_flat(i as f64 * frame_interval, chunk))
            .collect::<Result<Vec<_>>>()?;
        Self::with_frame_interval(frames, frame_interval)
    }

    pub fn from_json(json: &str, frame_interval: f64) -> Result<Self> {
        let frames: Vec<Frame> = serde_json::from_str(json)?;
        Self::with_frame_interval(frames, frame_interval)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Timeline already known to satisfy the invariants (e.g. a smoothed
    /// copy of a validated one)
    pub(crate) fn from_validated(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

impl TryFrom<Vec<Frame>> for Timeline {
    type Error = AnalysisError;

    fn try_from(frames: Vec<Frame>) -> Result<Self> {
        Timeline::new(frames)
    }
}

impl From<Timeline> for Vec<Frame> {
    fn from(timeline: Timeline) -> Self {
        timeline.frames
    }
}
