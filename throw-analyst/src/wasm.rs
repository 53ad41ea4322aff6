//! Browser entry points (feature `wasm`)
//!
//! JS hands over a flat Float32Array of `frame_count × 51` values
//! (17 landmarks × x, y, confidence) and gets the report JSON back.

use wasm_bindgen::prelude::*;

use crate::bridge::Timeline;
use crate::config::AnalysisConfig;
use crate::{analyze, error_json};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Analyze a captured throw with default settings, or with overrides passed
/// as a JSON string (camelCase keys, same as `AnalysisConfig`)
#[wasm_bindgen]
pub fn analyze_landmarks(data: &[f32], config_json: Option<String>) -> String {
    let config = match config_json.as_deref().map(AnalysisConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => return error_json(&err),
        None => AnalysisConfig::default(),
    };

    let flat: Vec<f64> = data.iter().map(|&v| f64::from(v)).collect();
    let outcome = Timeline::from_flat(&flat, config.frame_interval_seconds)
        .and_then(|timeline| analyze(&timeline, &config))
        .and_then(|report| report.to_json().map_err(Into::into));

    match outcome {
        Ok(json) => json,
        Err(err) => error_json(&err),
    }
}
