//! Rule engine - form score and ordered feedback

use crate::physics::Metrics;

use super::feedback::{FeedbackItem, NONE_DETECTED};
use super::rules::{Rule, DEFAULT_RULES};

pub const MAX_SCORE: i32 = 100;
pub const MIN_SCORE: i32 = 0;

/// Score plus feedback in rule order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub score: u8,
    pub feedback: Vec<FeedbackItem>,
}

/// Deterministic evaluator over a fixed rule table
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    rules: Vec<Rule>,
}

impl ScoringEngine {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn assess(&self, metrics: &Metrics) -> Assessment {
        let mut score = MAX_SCORE;
        let mut feedback = Vec::new();

        for rule in &self.rules {
            if let Some(finding) = rule.evaluate(metrics) {
                log::debug!(
                    "Rule {} fired: {} (-{})",
                    rule.name(),
                    finding.item.issue,
                    finding.deduction
                );
                score -= finding.deduction;
                feedback.push(finding.item);
            }
        }

        if feedback.is_empty() {
            feedback.push(NONE_DETECTED);
        }

        Assessment {
            score: score.clamp(MIN_SCORE, MAX_SCORE) as u8,
            feedback,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}
