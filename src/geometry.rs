//! Joint-geometry utilities: distances and inter-joint angles.
//!
//! Pure and stateless; safe to call concurrently from multiple frames.

use nalgebra::{Point3, Vector3};
use thiserror::Error;

use crate::frame::{JointKind, SkeletonSnapshot};

/// Difference in length between the head joint and the actual top of the
/// head, which the sensor cannot see.
const HEAD_DIVERGENCE: f32 = 0.1;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector has no direction")]
    DegenerateVector,
    #[error("joint {0:?} missing from snapshot")]
    MissingJoint(JointKind),
}

/// Angle between two vectors in degrees, rounded to two decimal places.
///
/// Normalization and the dot product run in f64 so that parallel inputs
/// land on 0 and 180 exactly after rounding; the dot product is clamped to
/// [-1, 1] so floating-point drift cannot push `acos` out of its domain.
pub fn angle_between(a: Vector3<f32>, b: Vector3<f32>) -> Result<f32, GeometryError> {
    let a = a
        .cast::<f64>()
        .try_normalize(0.0)
        .ok_or(GeometryError::DegenerateVector)?;
    let b = b
        .cast::<f64>()
        .try_normalize(0.0)
        .ok_or(GeometryError::DegenerateVector)?;

    let dot = a.dot(&b).clamp(-1.0, 1.0);
    let degrees = dot.acos().to_degrees();

    Ok(((degrees * 100.0).round() / 100.0) as f32)
}

/// Angle formed at `center` by the segments toward `arm_a` and `arm_b`.
pub fn angle_at_joint(
    snapshot: &SkeletonSnapshot,
    center: JointKind,
    arm_a: JointKind,
    arm_b: JointKind,
) -> Result<f32, GeometryError> {
    let center = joint_position(snapshot, center)?;
    let a = joint_position(snapshot, arm_a)?;
    let b = joint_position(snapshot, arm_b)?;

    angle_between(a - center, b - center)
}

/// Euclidean distance between two points.
pub fn distance(p1: Point3<f32>, p2: Point3<f32>) -> f32 {
    (p1 - p2).norm()
}

/// Distance between two joints of the same skeleton.
pub fn joint_distance(
    snapshot: &SkeletonSnapshot,
    a: JointKind,
    b: JointKind,
) -> Result<f32, GeometryError> {
    Ok(distance(
        joint_position(snapshot, a)?,
        joint_position(snapshot, b)?,
    ))
}

/// Distance of a joint from the sensor, which sits at the origin of the
/// skeleton coordinate space.
pub fn distance_from_sensor(
    snapshot: &SkeletonSnapshot,
    joint: JointKind,
) -> Result<f32, GeometryError> {
    Ok(joint_position(snapshot, joint)?.coords.norm())
}

/// Estimated standing height of the subject in meters.
///
/// Sums the head-to-waist chain and the leg chain, picking whichever leg has
/// more fully tracked joints, since the sensor frequently loses one foot.
pub fn body_height(snapshot: &SkeletonSnapshot) -> Result<f32, GeometryError> {
    const LEFT_LEG: [JointKind; 4] = [
        JointKind::HipLeft,
        JointKind::KneeLeft,
        JointKind::AnkleLeft,
        JointKind::FootLeft,
    ];
    const RIGHT_LEG: [JointKind; 4] = [
        JointKind::HipRight,
        JointKind::KneeRight,
        JointKind::AnkleRight,
        JointKind::FootRight,
    ];

    let torso = chain_length(
        snapshot,
        &[
            JointKind::Head,
            JointKind::Neck,
            JointKind::Spine,
            JointKind::Waist,
        ],
    )?;

    let leg = if snapshot.tracked_joint_count(&LEFT_LEG)
        >= snapshot.tracked_joint_count(&RIGHT_LEG)
    {
        chain_length(snapshot, &LEFT_LEG)?
    } else {
        chain_length(snapshot, &RIGHT_LEG)?
    };

    Ok(torso + leg + HEAD_DIVERGENCE)
}

fn chain_length(snapshot: &SkeletonSnapshot, kinds: &[JointKind]) -> Result<f32, GeometryError> {
    let mut length = 0.0;
    for pair in kinds.windows(2) {
        length += joint_distance(snapshot, pair[0], pair[1])?;
    }
    Ok(length)
}

fn joint_position(
    snapshot: &SkeletonSnapshot,
    kind: JointKind,
) -> Result<Point3<f32>, GeometryError> {
    snapshot
        .joint(kind)
        .map(|j| j.position)
        .ok_or(GeometryError::MissingJoint(kind))
}
