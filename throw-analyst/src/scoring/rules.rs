//! Biomechanical risk rules
//!
//! Each rule is an independent predicate over release metrics with a fixed
//! deduction and feedback item. Rules run in table order; the order decides
//! feedback order only, deductions are additive.

use crate::physics::Metrics;

use super::feedback::{FeedbackItem, ARM_CASTING, ELBOW_COLLAPSING, LOW_SEPARATION, LOW_VELOCITY};

/// Result of one rule firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub deduction: i32,
    pub item: FeedbackItem,
}

/// Rule variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Hip-shoulder separation below `min_degrees`
    Separation { min_degrees: f64, deduction: i32 },
    /// Elbow outside `[min_degrees, max_degrees]`; at most one side fires
    ElbowWindow {
        min_degrees: f64,
        max_degrees: f64,
        deduction: i32,
    },
    /// Estimated velocity below `min_mph`. Advisory only, never deducts.
    VelocityAdvisory { min_mph: f64 },
}

/// Production rule table
pub const DEFAULT_RULES: [Rule; 3] = [
    Rule::Separation {
        min_degrees: 20.0,
        deduction: 15,
    },
    Rule::ElbowWindow {
        min_degrees: 70.0,
        max_degrees: 140.0,
        deduction: 10,
    },
    Rule::VelocityAdvisory { min_mph: 35.0 },
];

impl Rule {
    pub fn evaluate(&self, metrics: &Metrics) -> Option<Finding> {
        match *self {
            Rule::Separation {
                min_degrees,
                deduction,
            } => (metrics.separation_degrees < min_degrees).then_some(Finding {
                deduction,
                item: LOW_SEPARATION,
            }),
            Rule::ElbowWindow {
                min_degrees,
                max_degrees,
                deduction,
            } => {
                if metrics.elbow_degrees < min_degrees {
                    Some(Finding {
                        deduction,
                        item: ELBOW_COLLAPSING,
                    })
                } else if metrics.elbow_degrees > max_degrees {
                    Some(Finding {
                        deduction,
                        item: ARM_CASTING,
                    })
                } else {
                    None
                }
            }
            Rule::VelocityAdvisory { min_mph } => {
                (metrics.estimated_velocity_mph < min_mph).then_some(Finding {
                    deduction: 0,
                    item: LOW_VELOCITY,
                })
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Separation { .. } => "separation",
            Rule::ElbowWindow { .. } => "elbow_window",
            Rule::VelocityAdvisory { .. } => "velocity_advisory",
        }
    }
}
