//! Feedback catalogue
//!
//! Wording shown to the athlete for each detected issue.

use serde::Serialize;

/// One detected concern: what it is, why it matters, what to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackItem {
    pub issue: &'static str,
    pub risk: &'static str,
    pub fix: &'static str,
}

pub const LOW_SEPARATION: FeedbackItem = FeedbackItem {
    issue: "Low Hip-Shoulder Separation",
    risk: "Increased strain on the shoulder labrum due to lack of kinetic chain energy transfer.",
    fix: "Focus on keeping your hips open towards the target while keeping your shoulder closed / back longer. Think 'hips go, then shoulders'.",
};

pub const ELBOW_COLLAPSING: FeedbackItem = FeedbackItem {
    issue: "Elbow Collapsing / Too Tight",
    risk: "High valgus stress on the elbow (UCL injury risk).",
    fix: "Keep your elbow up and away from your head. Maintain a 'L' shape or wider angle at cocking phase.",
};

pub const ARM_CASTING: FeedbackItem = FeedbackItem {
    issue: "Arm Casting / Too Straight",
    risk: "Shoulder impingement and bicep tendonitis.",
    fix: "Don't lock your arm out. Keep a slight bend to allow for a whip-like action.",
};

pub const LOW_VELOCITY: FeedbackItem = FeedbackItem {
    issue: "Low Velocity / Poor Leg Drive",
    risk: "Over-reliance on arm strength can lead to overuse injuries.",
    fix: "Push harder off your back leg. Power comes from the ground up.",
};

/// Emitted alone when no rule fires
pub const NONE_DETECTED: FeedbackItem = FeedbackItem {
    issue: "None Detected",
    risk: "Low injury risk based on this analysis.",
    fix: "Great form! Focus on consistency and spot-target accuracy.",
};
