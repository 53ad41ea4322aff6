//! Physics module - keypoint smoothing and release kinematics
//!
//! Re-exports only. All logic in submodules.

mod one_euro;
mod smoother;
mod angles;
mod release;

pub use one_euro::OneEuroFilter;
pub use smoother::{OneEuroFilter2D, TemporalSmoother};
pub use angles::{angle_between, distance, line_angle, separation_angle};
pub use release::{KinematicAnalyzer, Metrics, ReleaseEvent, MPH_PER_METER_PER_SECOND};
