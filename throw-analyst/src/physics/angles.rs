//! Joint and segment angles using dot product / atan2
//!
//! Pure functions over pixel-space points. Used for the elbow angle at the
//! throwing arm and for hip-shoulder separation.

use std::f64::consts::PI;

use nalgebra::Vector2;

const RAD_TO_DEG: f64 = 180.0 / PI;

fn vector(from: (f64, f64), to: (f64, f64)) -> Vector2<f64> {
    Vector2::new(to.0 - from.0, to.1 - from.1)
}

/// Euclidean distance in pixels
pub fn distance(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    vector(p2, p1).norm()
}

/// Interior angle at `b` between rays b→a and b→c, in degrees [0, 180]
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns 0 when either ray has zero length (occluded or collapsed joint).
pub fn angle_between(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    let ba = vector(b, a);
    let bc = vector(b, c);

    let mag_ba = ba.norm();
    let mag_bc = bc.norm();
    if mag_ba == 0.0 || mag_bc == 0.0 {
        return 0.0;
    }

    let cos_angle = (ba.dot(&bc) / (mag_ba * mag_bc)).clamp(-1.0, 1.0);
    cos_angle.acos() * RAD_TO_DEG
}

/// Orientation of the line p1→p2 in radians (atan2, range (-π, π])
pub fn line_angle(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let v = vector(p1, p2);
    v.y.atan2(v.x)
}

/// Absolute difference between two line orientations, in degrees [0, 180]
pub fn separation_angle(shoulder_line: f64, hip_line: f64) -> f64 {
    let separation = ((shoulder_line - hip_line) * RAD_TO_DEG).abs();
    if separation > 180.0 {
        360.0 - separation
    } else {
        separation
    }
}
