//! Throw Analyst - throwing-motion biomechanics from pose keypoints
//!
//! Entry point for the analysis library. Only contains:
//! - Module declarations
//! - Pipeline entry points that delegate to submodules
//!
//! Timeline → smoother → release kinematics → rule scoring → report.

pub mod bridge;
pub mod config;
pub mod error;
pub mod physics;
pub mod report;
pub mod scoring;

#[cfg(feature = "wasm")]
mod wasm;

pub use bridge::{Frame, Keypoint, Landmark, Timeline};
pub use config::{AnalysisConfig, FilterConfig, ThrowingSide};
pub use error::{AnalysisError, ErrorBody, Result};
pub use physics::{KinematicAnalyzer, Metrics, ReleaseEvent, TemporalSmoother};
pub use report::{Report, ReportAssembler, ReportMetrics};
pub use scoring::{FeedbackItem, ScoringEngine};

// ============================================================================
// PIPELINE ENTRY POINTS
// ============================================================================

/// Holds a validated configuration; each call runs with fresh filter state
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    scoring: ScoringEngine,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scoring: ScoringEngine::default(),
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Smooth raw keypoints, then score the throw
    pub fn analyze(&self, timeline: &Timeline) -> Result<Report> {
        let smoothed = TemporalSmoother::smooth_timeline(timeline, self.config.filter);
        self.analyze_smoothed(&smoothed)
    }

    /// Score a timeline whose keypoints are already smoothed
    pub fn analyze_smoothed(&self, timeline: &Timeline) -> Result<Report> {
        let kinematics = KinematicAnalyzer::new(&self.config);
        let (release, metrics) = kinematics.analyze(timeline)?;

        let assessment = self.scoring.assess(&metrics);
        log::info!(
            "Throw scored {} at frame {} ({:.1} mph, {} feedback items)",
            assessment.score,
            release.frame_index,
            metrics.estimated_velocity_mph,
            assessment.feedback.len()
        );
        Ok(ReportAssembler::assemble(&metrics, assessment))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
            scoring: ScoringEngine::default(),
        }
    }
}

/// Analyze raw keypoints with the given configuration
pub fn analyze(timeline: &Timeline, config: &AnalysisConfig) -> Result<Report> {
    Analyzer::new(config.clone())?.analyze(timeline)
}

/// Analyze keypoints that were smoothed upstream
pub fn analyze_smoothed(timeline: &Timeline, config: &AnalysisConfig) -> Result<Report> {
    Analyzer::new(config.clone())?.analyze_smoothed(timeline)
}

/// JSON in, JSON out: the report on success, `{"error": "..."}` on any failure
pub fn analyze_json(timeline_json: &str, config: &AnalysisConfig) -> String {
    let outcome = Timeline::from_json(timeline_json, config.frame_interval_seconds)
        .and_then(|timeline| analyze(&timeline, config))
        .and_then(|report| report.to_json().map_err(AnalysisError::from));
    match outcome {
        Ok(json) => json,
        Err(err) => error_json(&err),
    }
}

pub(crate) fn error_json(err: &AnalysisError) -> String {
    if !err.is_no_throw() {
        log::warn!("Analysis rejected: {}", err);
    }
    let body = ErrorBody::from(err);
    serde_json::to_string(&body).unwrap_or_else(|_| format!("{{\"error\":{:?}}}", body.error))
}
