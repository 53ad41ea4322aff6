//! One Euro Filter - adaptive low-pass filter for keypoint jitter
//!
//! Smooth when slow (reduces jitter), responsive when fast (tracks the arm
//! through release). Velocity is later taken as a first difference, which
//! amplifies any noise left in the coordinates.
//!
//! Inputs are expected in pixel range (`|x| <= 1e6`, as `Timeline` enforces)
//! with forward steps of at least a nanosecond. Within that domain every
//! intermediate stays finite; an infinite cutoff collapses to `alpha = 1`.

use std::f64::consts::PI;

use crate::config::FilterConfig;

/// Adaptive low-pass filter for one coordinate: smooth at rest, responsive during motion
#[derive(Debug, Clone)]
pub struct OneEuroFilter {
    /// Minimum cutoff frequency (Hz) - lower = smoother at rest
    min_cutoff: f64,
    /// Speed coefficient - higher = less lag during fast motion
    beta: f64,
    /// Derivative cutoff frequency (Hz)
    d_cutoff: f64,

    // State
    x_prev: f64,
    dx_prev: f64,
    t_prev: f64,
    initialized: bool,
}

impl OneEuroFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            min_cutoff: config.min_cutoff,
            beta: config.beta,
            d_cutoff: config.d_cutoff,
            x_prev: 0.0,
            dx_prev: 0.0,
            t_prev: 0.0,
            initialized: false,
        }
    }

    /// Calculate smoothing factor alpha
    fn smoothing_factor(t_e: f64, cutoff: f64) -> f64 {
        let r = 2.0 * PI * cutoff * t_e;
        if r.is_infinite() {
            return 1.0;
        }
        r / (r + 1.0)
    }

    /// Filter a single value
    ///
    /// - `x`: raw input value
    /// - `t`: timestamp in seconds
    ///
    /// Returns: filtered value. A duplicate or out-of-order timestamp returns
    /// the previous output and leaves state untouched.
    pub fn filter(&mut self, x: f64, t: f64) -> f64 {
        if !self.initialized {
            self.x_prev = x;
            self.dx_prev = 0.0;
            self.t_prev = t;
            self.initialized = true;
            return x;
        }

        let t_e = t - self.t_prev;
        if t_e <= 0.0 {
            return self.x_prev;
        }

        // 1. Estimate derivative (velocity)
        let a_d = Self::smoothing_factor(t_e, self.d_cutoff);
        let dx = (x - self.x_prev) / t_e;
        let dx_hat = a_d * dx + (1.0 - a_d) * self.dx_prev;

        // 2. Adaptive cutoff: more smoothing when slow, less when fast
        let cutoff = self.min_cutoff + self.beta * dx_hat.abs();
        let a = Self::smoothing_factor(t_e, cutoff);

        // 3. Apply filter
        let x_hat = a * x + (1.0 - a) * self.x_prev;

        // Update state
        self.x_prev = x_hat;
        self.dx_prev = dx_hat;
        self.t_prev = t;

        x_hat
    }

    /// Last smoothed output, if any input has been seen
    pub fn last_value(&self) -> Option<f64> {
        self.initialized.then_some(self.x_prev)
    }
}

impl Default for OneEuroFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}
