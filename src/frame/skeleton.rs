//! Skeleton snapshot: named joint positions with per-joint confidence.

use std::collections::HashMap;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Stable handle assigned by the sensor to one tracked body across frames.
pub type SubjectId = u32;

/// Named skeleton joints reported by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointKind {
    Head,
    Neck,
    Spine,
    Waist,
    ShoulderLeft,
    ShoulderRight,
    ElbowLeft,
    ElbowRight,
    WristLeft,
    WristRight,
    HandLeft,
    HandRight,
    HipLeft,
    HipRight,
    KneeLeft,
    KneeRight,
    AnkleLeft,
    AnkleRight,
    FootLeft,
    FootRight,
}

/// Per-joint tracking confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointTrackingState {
    #[default]
    NotTracked,
    /// Position interpolated from neighboring joints, not directly observed.
    Inferred,
    Tracked,
}

/// One joint observation: position plus tracking confidence.
#[derive(Debug, Clone, Copy)]
pub struct Joint {
    pub position: Point3<f32>,
    pub state: JointTrackingState,
}

impl Joint {
    pub fn new(x: f32, y: f32, z: f32, state: JointTrackingState) -> Self {
        Self {
            position: Point3::new(x, y, z),
            state,
        }
    }

    /// A fully tracked joint at the given position.
    pub fn tracked(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, JointTrackingState::Tracked)
    }
}

/// Overall tracking state of one skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkeletonTrackingState {
    #[default]
    NotTracked,
    /// Only the body center position is known; joints are unreliable.
    PositionOnly,
    Tracked,
}

/// The complete joint data for one subject on one frame.
///
/// Produced once per sensor frame and consumed synchronously; not retained
/// across frames.
#[derive(Debug, Clone)]
pub struct SkeletonSnapshot {
    pub subject_id: SubjectId,
    pub tracking_state: SkeletonTrackingState,
    joints: HashMap<JointKind, Joint>,
}

impl SkeletonSnapshot {
    pub fn new(subject_id: SubjectId, tracking_state: SkeletonTrackingState) -> Self {
        Self {
            subject_id,
            tracking_state,
            joints: HashMap::new(),
        }
    }

    /// Add a joint observation, builder style.
    pub fn with_joint(mut self, kind: JointKind, joint: Joint) -> Self {
        self.joints.insert(kind, joint);
        self
    }

    pub fn joint(&self, kind: JointKind) -> Option<&Joint> {
        self.joints.get(&kind)
    }

    /// Whether every listed joint is present and fully tracked.
    pub fn joints_tracked(&self, kinds: &[JointKind]) -> bool {
        kinds.iter().all(|k| {
            self.joints
                .get(k)
                .is_some_and(|j| j.state == JointTrackingState::Tracked)
        })
    }

    /// Number of listed joints that are present and fully tracked.
    pub fn tracked_joint_count(&self, kinds: &[JointKind]) -> usize {
        kinds
            .iter()
            .filter(|k| {
                self.joints
                    .get(k)
                    .is_some_and(|j| j.state == JointTrackingState::Tracked)
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_lookup() {
        let snapshot = SkeletonSnapshot::new(1, SkeletonTrackingState::Tracked)
            .with_joint(JointKind::Head, Joint::tracked(0.0, 1.8, 2.0));

        assert!(snapshot.joint(JointKind::Head).is_some());
        assert!(snapshot.joint(JointKind::FootLeft).is_none());
    }

    #[test]
    fn test_joints_tracked() {
        let snapshot = SkeletonSnapshot::new(1, SkeletonTrackingState::Tracked)
            .with_joint(JointKind::Head, Joint::tracked(0.0, 1.8, 2.0))
            .with_joint(
                JointKind::Neck,
                Joint::new(0.0, 1.6, 2.0, JointTrackingState::Inferred),
            );

        assert!(snapshot.joints_tracked(&[JointKind::Head]));
        assert!(!snapshot.joints_tracked(&[JointKind::Head, JointKind::Neck]));
        assert_eq!(
            snapshot.tracked_joint_count(&[JointKind::Head, JointKind::Neck]),
            1
        );
    }
}
