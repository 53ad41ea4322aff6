//! Bridge module - pose estimator ↔ analysis input boundary
//!
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod timeline;

pub use landmarks::{
    Frame,
    Keypoint,
    Landmark,
    // Constants
    LANDMARK_COUNT, VALUES_PER_LANDMARK, FLAT_FRAME_LEN,
};

pub use timeline::{Timeline, MAX_COORDINATE, MIN_TIME_STEP};
