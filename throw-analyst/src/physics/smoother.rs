//! Temporal smoother - one filter pair per landmark
//!
//! The bank is built fresh for each request and dropped with it, so no
//! signal history crosses between analyses.

use crate::bridge::{Frame, Keypoint, Timeline, LANDMARK_COUNT};
use crate::config::FilterConfig;

use super::one_euro::OneEuroFilter;

/// Pair of One Euro Filters for 2D position
#[derive(Debug, Clone)]
pub struct OneEuroFilter2D {
    pub x: OneEuroFilter,
    pub y: OneEuroFilter,
}

impl OneEuroFilter2D {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            x: OneEuroFilter::new(config),
            y: OneEuroFilter::new(config),
        }
    }

    pub fn filter(&mut self, t: f64, pos: (f64, f64)) -> (f64, f64) {
        (self.x.filter(pos.0, t), self.y.filter(pos.1, t))
    }
}

/// 34 independent coordinate filters (17 landmarks × x/y)
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    filters: [OneEuroFilter2D; LANDMARK_COUNT],
}

impl TemporalSmoother {
    pub fn new(config: FilterConfig) -> Self {
        log::debug!(
            "Smoother bank: {} filters (min_cutoff={}, beta={}, d_cutoff={})",
            LANDMARK_COUNT * 2,
            config.min_cutoff,
            config.beta,
            config.d_cutoff
        );
        Self {
            filters: std::array::from_fn(|_| OneEuroFilter2D::new(config)),
        }
    }

    /// Smooth one frame; returns a new frame, the input is left as is
    pub fn smooth_frame(&mut self, frame: &Frame) -> Frame {
        let t = frame.timestamp;
        let raw = frame.keypoints();
        let keypoints: [Keypoint; LANDMARK_COUNT] = std::array::from_fn(|i| {
            let (x, y) = self.filters[i].filter(t, raw[i].position());
            raw[i].with_position(x, y)
        });
        frame.with_keypoints(keypoints)
    }

    /// Smooth a whole timeline in order with a fresh filter bank
    pub fn smooth_timeline(timeline: &Timeline, config: FilterConfig) -> Timeline {
        let mut smoother = Self::new(config);
        let frames = timeline
            .frames()
            .iter()
            .map(|frame| smoother.smooth_frame(frame))
            .collect();
        Timeline::from_validated(frames)
    }
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}
