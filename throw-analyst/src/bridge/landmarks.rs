//! Landmark layout and per-frame keypoint storage
//!
//! Receives pose-estimator keypoints (MoveNet / COCO, 17 total) and stores
//! them in a fixed landmark order for the physics and scoring stages.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

// ============================================================================
// LANDMARK INDICES (COCO / MoveNet - 17 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 17;

/// Values per landmark in the flat layout: x, y, confidence
pub const VALUES_PER_LANDMARK: usize = 3;

/// Flat values per frame (17 landmarks × 3)
pub const FLAT_FRAME_LEN: usize = LANDMARK_COUNT * VALUES_PER_LANDMARK;

/// Anatomical landmarks in estimator output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Landmark {
    pub const ALL: [Landmark; LANDMARK_COUNT] = [
        Landmark::Nose,
        Landmark::LeftEye,
        Landmark::RightEye,
        Landmark::LeftEar,
        Landmark::RightEar,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
    ];

    /// Position in the frame's keypoint array
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Landmark::Nose => "nose",
            Landmark::LeftEye => "left_eye",
            Landmark::RightEye => "right_eye",
            Landmark::LeftEar => "left_ear",
            Landmark::RightEar => "right_ear",
            Landmark::LeftShoulder => "left_shoulder",
            Landmark::RightShoulder => "right_shoulder",
            Landmark::LeftElbow => "left_elbow",
            Landmark::RightElbow => "right_elbow",
            Landmark::LeftWrist => "left_wrist",
            Landmark::RightWrist => "right_wrist",
            Landmark::LeftHip => "left_hip",
            Landmark::RightHip => "right_hip",
            Landmark::LeftKnee => "left_knee",
            Landmark::RightKnee => "right_knee",
            Landmark::LeftAnkle => "left_ankle",
            Landmark::RightAnkle => "right_ankle",
        }
    }

    pub fn from_name(name: &str) -> Option<Landmark> {
        Landmark::ALL.into_iter().find(|lm| lm.name() == name)
    }
}

// ============================================================================
// KEYPOINT / FRAME
// ============================================================================

/// A single 2D keypoint in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    #[serde(rename = "name")]
    pub landmark: Landmark,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub confidence: f64,
}

impl Keypoint {
    pub fn new(landmark: Landmark, x: f64, y: f64, confidence: f64) -> Self {
        Self {
            landmark,
            x,
            y,
            confidence,
        }
    }

    /// Same landmark and confidence at a new position
    pub fn with_position(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// All 17 keypoints for one instant, indexed by `Landmark`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrame")]
pub struct Frame {
    pub timestamp: f64,
    keypoints: [Keypoint; LANDMARK_COUNT],
}

impl Frame {
    /// Build from `(x, y, confidence)` triples in landmark order
    pub fn new(timestamp: f64, points: [(f64, f64, f64); LANDMARK_COUNT]) -> Self {
        let keypoints = std::array::from_fn(|i| {
            let (x, y, c) = points[i];
            Keypoint::new(Landmark::ALL[i], x, y, c)
        });
        Self {
            timestamp,
            keypoints,
        }
    }

    /// Build from the flat array a JS bridge passes: 17 × (x, y, confidence)
    pub fn from_flat(timestamp: f64, data: &[f64]) -> Result<Self> {
        if data.len() != FLAT_FRAME_LEN {
            return Err(AnalysisError::InvalidLandmarkCount {
                expected: FLAT_FRAME_LEN,
                actual: data.len(),
            });
        }

        let keypoints = std::array::from_fn(|i| {
            let base = i * VALUES_PER_LANDMARK;
            Keypoint::new(Landmark::ALL[i], data[base], data[base + 1], data[base + 2])
        });
        Ok(Self {
            timestamp,
            keypoints,
        })
    }

    /// Build from estimator records `(name, x, y, confidence)` in any order.
    /// Every landmark must appear exactly once.
    pub fn from_named<'a, I>(timestamp: f64, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64, f64, f64)>,
    {
        let mut slots: [Option<Keypoint>; LANDMARK_COUNT] = [None; LANDMARK_COUNT];

        for (name, x, y, confidence) in records {
            let landmark = Landmark::from_name(name)
                .ok_or_else(|| AnalysisError::UnknownLandmark(name.to_string()))?;
            let slot = &mut slots[landmark.index()];
            if slot.is_some() {
                return Err(AnalysisError::DuplicateLandmark(landmark.name()));
            }
            *slot = Some(Keypoint::new(landmark, x, y, confidence));
        }

        let present = slots.iter().flatten().count();
        let mut keypoints = [Keypoint::new(Landmark::Nose, 0.0, 0.0, 0.0); LANDMARK_COUNT];
        for (dst, slot) in keypoints.iter_mut().zip(slots) {
            *dst = slot.ok_or(AnalysisError::InvalidLandmarkCount {
                expected: LANDMARK_COUNT,
                actual: present,
            })?;
        }
        Ok(Self {
            timestamp,
            keypoints,
        })
    }

    /// Frame with the same timestamp and a new keypoint array
    pub fn with_keypoints(&self, keypoints: [Keypoint; LANDMARK_COUNT]) -> Self {
        Self {
            timestamp: self.timestamp,
            keypoints,
        }
    }

    pub fn keypoint(&self, landmark: Landmark) -> &Keypoint {
        &self.keypoints[landmark.index()]
    }

    pub fn keypoints(&self) -> &[Keypoint; LANDMARK_COUNT] {
        &self.keypoints
    }
}

/// Wire shape of a frame: keypoints may arrive in any order
#[derive(Deserialize)]
struct RawFrame {
    timestamp: f64,
    keypoints: Vec<Keypoint>,
}

impl TryFrom<RawFrame> for Frame {
    type Error = AnalysisError;

    fn try_from(raw: RawFrame) -> Result<Self> {
        Frame::from_named(
            raw.timestamp,
            raw.keypoints
                .iter()
                .map(|k| (k.landmark.name(), k.x, k.y, k.confidence)),
        )
    }
}
