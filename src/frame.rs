//! Per-frame snapshot data model delivered by the sensor collaborator.

mod body_frame;
mod face;
mod skeleton;

pub use body_frame::BodyFrame;
pub use face::FaceSnapshot;
pub use skeleton::{
    Joint, JointKind, JointTrackingState, SkeletonSnapshot, SkeletonTrackingState, SubjectId,
};
