//! Scoring module - rule-based injury-risk assessment
//!
//! Re-exports only. All logic in submodules.

mod engine;
mod feedback;
mod rules;

pub use engine::{Assessment, ScoringEngine, MAX_SCORE, MIN_SCORE};
pub use feedback::{
    FeedbackItem,
    ARM_CASTING, ELBOW_COLLAPSING, LOW_SEPARATION, LOW_VELOCITY, NONE_DETECTED,
};
pub use rules::{Finding, Rule, DEFAULT_RULES};
