//! End-to-end pipeline scenarios

use pretty_assertions::assert_eq;
use throw_analyst::bridge::LANDMARK_COUNT;
use throw_analyst::physics::KinematicAnalyzer;
use throw_analyst::scoring::{Assessment, ScoringEngine};
use throw_analyst::{
    analyze, analyze_json, analyze_smoothed, AnalysisConfig, AnalysisError, Analyzer,
    FilterConfig, Frame, Landmark, Metrics, TemporalSmoother, Timeline,
};

const DT: f64 = 1.0 / 30.0;

/// Upright thrower: square shoulders over rotated hips, right elbow at 90°
fn pose(wrist: (f64, f64)) -> [(f64, f64, f64); LANDMARK_COUNT] {
    let mut points = [(128.0, 128.0, 0.9); LANDMARK_COUNT];
    points[Landmark::LeftShoulder.index()] = (100.0, 80.0, 0.9);
    points[Landmark::RightShoulder.index()] = (160.0, 80.0, 0.9);
    points[Landmark::LeftHip.index()] = (120.0, 140.0, 0.9);
    points[Landmark::RightHip.index()] = (140.0, 180.0, 0.9);
    points[Landmark::RightElbow.index()] = (160.0, 40.0, 0.9);
    points[Landmark::RightWrist.index()] = (wrist.0, wrist.1, 0.9);
    points
}

fn timeline(wrist_path: &[(f64, f64)]) -> Timeline {
    let frames = wrist_path
        .iter()
        .enumerate()
        .map(|(i, &w)| Frame::new(i as f64 * DT, pose(w)))
        .collect();
    Timeline::new(frames).unwrap()
}

fn stamped_timeline(stamps: &[f64], wrist_path: &[(f64, f64)]) -> Timeline {
    let frames = stamps
        .iter()
        .zip(wrist_path)
        .map(|(&t, &w)| Frame::new(t, pose(w)))
        .collect();
    Timeline::new(frames).unwrap()
}

fn metrics(separation: f64, elbow: f64, mph: f64) -> Metrics {
    Metrics {
        separation_degrees: separation,
        elbow_degrees: elbow,
        estimated_velocity_mph: mph,
        release_time_seconds: 0.3,
    }
}

#[test]
fn test_single_jump_release() {
    let path = [(0.0, 0.0), (300.0, 0.0), (300.0, 0.0), (300.0, 0.0), (300.0, 0.0)];
    let timeline = timeline(&path);

    let release = KinematicAnalyzer::default().detect_release(&timeline).unwrap();
    assert_eq!(release.frame_index, 1);
    assert!((release.peak_speed - 9000.0).abs() < 1e-6);

    let report = analyze_smoothed(&timeline, &AnalysisConfig::default()).unwrap();
    // 9000 px/s / 250 px/m * 2.237 * 1.5
    assert_eq!(report.velocity_display(), "120.8");
    assert_eq!(report.release_time_display(), "0.03");
}

#[test]
fn test_smoothing_keeps_release_frame() {
    let path = [(0.0, 0.0), (300.0, 0.0), (300.0, 0.0), (300.0, 0.0), (300.0, 0.0)];
    let report = analyze(&timeline(&path), &AnalysisConfig::default()).unwrap();
    assert_eq!(report.release_time_display(), "0.03");
    // smoothing lags the jump, so the estimate drops below the raw one
    assert!(report.metrics.velocity_mph < 120.8);
    assert!(report.metrics.velocity_mph > 50.0);
}

#[test]
fn test_still_wrist_is_no_throw() {
    let path = vec![(160.0, 0.0); 30];
    let err = analyze(&timeline(&path), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::NoThrowDetected { .. }));
}

#[test]
fn test_slow_drift_is_no_throw() {
    // 1.5 px per frame = 45 px/s, below the 50 px/s floor
    let path: Vec<_> = (0..30).map(|i| (i as f64 * 1.5, 0.0)).collect();
    let err = analyze_smoothed(&timeline(&path), &AnalysisConfig::default()).unwrap_err();
    assert!(err.is_no_throw());
}

#[test]
fn test_threshold_is_configurable() {
    let path: Vec<_> = (0..30).map(|i| (i as f64 * 1.5, 0.0)).collect();
    let mut config = AnalysisConfig::default();
    config.no_throw_speed_threshold = 40.0;
    assert!(analyze_smoothed(&timeline(&path), &config).is_ok());
}

fn issues(assessment: &Assessment) -> Vec<&'static str> {
    assessment.feedback.iter().map(|f| f.issue).collect()
}

#[test]
fn test_scoring_scenarios() {
    let engine = ScoringEngine::default();

    let a = engine.assess(&metrics(15.0, 90.0, 40.0));
    assert_eq!(a.score, 85);
    assert_eq!(issues(&a), vec!["Low Hip-Shoulder Separation"]);

    let a = engine.assess(&metrics(90.0, 180.0, 40.0));
    assert_eq!(a.score, 90);
    assert_eq!(issues(&a), vec!["Arm Casting / Too Straight"]);

    let a = engine.assess(&metrics(90.0, 90.0, 40.0));
    assert_eq!(a.score, 100);
    assert_eq!(issues(&a), vec!["None Detected"]);
}

#[test]
fn test_report_metrics_at_release() {
    let path = [(160.0, 0.0), (160.0, 0.0), (160.0, 0.0), (460.0, 0.0), (460.0, 0.0)];
    let report = analyze_smoothed(&timeline(&path), &AnalysisConfig::default()).unwrap();

    // wrist moved right of the elbow: shoulder (160,80), elbow (160,40), wrist (460,0)
    assert_eq!(report.metrics.elbow_degrees, 98);
    // shoulder line 0°, hip line atan2(40, 20) ≈ 63.4°
    assert_eq!(report.metrics.separation_degrees, 63);
    assert_eq!(report.release_time_display(), "0.10");
    assert_eq!(report.form_score, 100);
    assert_eq!(report.issues(), vec!["None Detected"]);
}

#[test]
fn test_left_handed_thrower() {
    let frames = (0..5)
        .map(|i| {
            let mut points = pose((160.0, 0.0));
            points[Landmark::LeftElbow.index()] = (100.0, 40.0, 0.9);
            let x = if i < 2 { 100.0 } else { -200.0 };
            points[Landmark::LeftWrist.index()] = (x, 40.0, 0.9);
            Frame::new(i as f64 * DT, points)
        })
        .collect();
    let timeline = Timeline::new(frames).unwrap();

    let config = AnalysisConfig::from_json(r#"{"throwingSide": "left"}"#).unwrap();
    let report = analyze_smoothed(&timeline, &config).unwrap();
    assert_eq!(report.release_time_display(), "0.07");
    assert_eq!(report.metrics.elbow_degrees, 90);
}

#[test]
fn test_analyzer_requests_are_independent() {
    let analyzer = Analyzer::default();
    let throw = timeline(&[(0.0, 0.0), (300.0, 0.0), (300.0, 0.0)]);
    let still = timeline(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);

    let first = analyzer.analyze(&throw).unwrap();
    assert!(analyzer.analyze(&still).is_err());
    let again = analyzer.analyze(&throw).unwrap();
    assert_eq!(first, again);
}

#[test]
fn test_json_failure_shape() {
    let still = serde_json::to_string(&timeline(&[(0.0, 0.0), (0.0, 0.0)])).unwrap();
    let out = analyze_json(&still, &AnalysisConfig::default());
    assert_eq!(out, r#"{"error":"No throw detected. Try throwing faster/closer."}"#);
}

#[test]
fn test_legacy_filter_lags_more() {
    let path = [(0.0, 0.0), (300.0, 0.0), (300.0, 0.0), (300.0, 0.0)];
    let adaptive = analyze(&timeline(&path), &AnalysisConfig::default()).unwrap();
    let legacy_config = AnalysisConfig::default().with_filter(FilterConfig::legacy());
    let legacy = analyze(&timeline(&path), &legacy_config).unwrap();
    assert!(legacy.metrics.velocity_mph < adaptive.metrics.velocity_mph);
}

#[test]
fn test_duplicate_frame_is_absorbed() {
    let stamps = [0.0, DT, DT, 2.0 * DT, 3.0 * DT];
    let path = [(0.0, 0.0), (300.0, 0.0), (300.0, 0.0), (300.0, 0.0), (300.0, 0.0)];
    let timeline = stamped_timeline(&stamps, &path);

    let report = analyze(&timeline, &AnalysisConfig::default()).unwrap();
    assert_eq!(report.release_time_display(), "0.03");
    assert!(report.metrics.velocity_mph > 100.0);

    let raw = analyze_smoothed(&timeline, &AnalysisConfig::default()).unwrap();
    assert_eq!(raw.velocity_display(), "120.8");
}

#[test]
fn test_duplicate_frame_holds_smoothed_pose() {
    let stamps = [0.0, DT, DT, 2.0 * DT];
    let path = [(0.0, 0.0), (300.0, 0.0), (40.0, 90.0), (300.0, 0.0)];
    let timeline = stamped_timeline(&stamps, &path);
    let smoothed = TemporalSmoother::smooth_timeline(&timeline, FilterConfig::default());

    let frames = smoothed.frames();
    for lm in Landmark::ALL {
        assert_eq!(frames[2].keypoint(lm).position(), frames[1].keypoint(lm).position());
    }

    let release = KinematicAnalyzer::default().detect_release(&smoothed).unwrap();
    assert_eq!(release.frame_index, 1);
}

#[test]
fn test_duplicate_frame_json_request() {
    let stamps = [0.0, DT, DT, 2.0 * DT, 3.0 * DT];
    let path = [(0.0, 0.0), (300.0, 0.0), (300.0, 0.0), (300.0, 0.0), (300.0, 0.0)];
    let json = serde_json::to_string(&stamped_timeline(&stamps, &path)).unwrap();

    let out = analyze_json(&json, &AnalysisConfig::default());
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["release_time"], "0.03");
}

#[test]
fn test_regression_run_is_rejected() {
    let stamps = [0.0, DT, DT, DT, 2.0 * DT];
    let frames: Vec<Frame> = stamps.iter().map(|&t| Frame::new(t, pose((0.0, 0.0)))).collect();
    assert!(matches!(
        Timeline::new(frames),
        Err(AnalysisError::NonMonotonicTimestamps { index: 3, .. })
    ));
}
