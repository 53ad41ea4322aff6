//! Report assembly
//!
//! Rounds release metrics for display and packages them with the score and
//! feedback. Serializes with the keys the mobile client reads.

use serde::Serialize;

use crate::physics::Metrics;
use crate::scoring::{Assessment, FeedbackItem};

/// Release metrics as presented to the athlete
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportMetrics {
    /// One decimal place
    pub velocity_mph: f64,
    pub separation_degrees: i64,
    pub elbow_degrees: i64,
    /// Two decimal places
    pub release_time_seconds: f64,
}

/// Final analysis result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "WireReport")]
pub struct Report {
    pub form_score: u8,
    pub metrics: ReportMetrics,
    pub feedback_items: Vec<FeedbackItem>,
}

impl Report {
    /// `pred_vel_mph` as shown on the client, e.g. "41.2"
    pub fn velocity_display(&self) -> String {
        format!("{:.1}", self.metrics.velocity_mph)
    }

    /// `release_time` as shown on the client, e.g. "0.47"
    pub fn release_time_display(&self) -> String {
        format!("{:.2}", self.metrics.release_time_seconds)
    }

    pub fn issues(&self) -> Vec<&'static str> {
        self.feedback_items.iter().map(|item| item.issue).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Packages pipeline outputs into a `Report`
pub struct ReportAssembler;

impl ReportAssembler {
    pub fn assemble(metrics: &Metrics, assessment: Assessment) -> Report {
        Report {
            form_score: assessment.score,
            metrics: ReportMetrics {
                velocity_mph: round_to(metrics.estimated_velocity_mph, 1),
                separation_degrees: metrics.separation_degrees.round() as i64,
                elbow_degrees: metrics.elbow_degrees.round() as i64,
                release_time_seconds: round_to(metrics.release_time_seconds, 2),
            },
            feedback_items: assessment.feedback,
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[derive(Serialize)]
struct WireReport {
    form_score: u8,
    pred_vel_mph: String,
    sep_at_release: i64,
    elbow_at_release: i64,
    release_time: String,
    feedback_items: Vec<FeedbackItem>,
}

impl From<Report> for WireReport {
    fn from(report: Report) -> Self {
        Self {
            form_score: report.form_score,
            pred_vel_mph: report.velocity_display(),
            sep_at_release: report.metrics.separation_degrees,
            elbow_at_release: report.metrics.elbow_degrees,
            release_time: report.release_time_display(),
            feedback_items: report.feedback_items,
        }
    }
}
