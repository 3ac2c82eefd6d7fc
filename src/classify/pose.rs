//! Star-pose classifier: arms extended straight and raised to shoulder height.

use serde::{Deserialize, Serialize};

use crate::frame::{JointKind, SkeletonSnapshot, SkeletonTrackingState};
use crate::geometry;

/// Angle bounds for the star pose, in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoseThresholds {
    /// Elbow must be this straight for the arm to count as extended.
    pub min_elbow_angle: f32,
    pub max_elbow_angle: f32,
    /// Shoulder-hip-elbow angle that puts the arm at roughly shoulder height.
    pub min_shoulder_angle: f32,
    pub max_shoulder_angle: f32,
}

impl Default for PoseThresholds {
    fn default() -> Self {
        Self {
            min_elbow_angle: 160.0,
            max_elbow_angle: 190.0,
            min_shoulder_angle: 100.0,
            max_shoulder_angle: 135.0,
        }
    }
}

/// Whether the snapshot holds a star pose this frame.
///
/// All four angle checks must pass; the first failure short-circuits. A
/// snapshot that is not fully tracked, a joint below full tracking
/// confidence, or a degenerate angle all fail closed rather than scoring a
/// spurious angle from stale position data.
pub fn check_star_pose(snapshot: &SkeletonSnapshot, thresholds: &PoseThresholds) -> bool {
    if snapshot.tracking_state != SkeletonTrackingState::Tracked {
        return false;
    }

    let checks: [(JointKind, JointKind, JointKind, f32, f32); 4] = [
        (
            JointKind::ElbowLeft,
            JointKind::WristLeft,
            JointKind::ShoulderLeft,
            thresholds.min_elbow_angle,
            thresholds.max_elbow_angle,
        ),
        (
            JointKind::ElbowRight,
            JointKind::WristRight,
            JointKind::ShoulderRight,
            thresholds.min_elbow_angle,
            thresholds.max_elbow_angle,
        ),
        (
            JointKind::ShoulderLeft,
            JointKind::HipLeft,
            JointKind::ElbowLeft,
            thresholds.min_shoulder_angle,
            thresholds.max_shoulder_angle,
        ),
        (
            JointKind::ShoulderRight,
            JointKind::HipRight,
            JointKind::ElbowRight,
            thresholds.min_shoulder_angle,
            thresholds.max_shoulder_angle,
        ),
    ];

    for (center, arm_a, arm_b, min, max) in checks {
        if !snapshot.joints_tracked(&[center, arm_a, arm_b]) {
            return false;
        }
        match geometry::angle_at_joint(snapshot, center, arm_a, arm_b) {
            Ok(angle) if angle >= min && angle <= max => {}
            _ => return false,
        }
    }

    true
}
