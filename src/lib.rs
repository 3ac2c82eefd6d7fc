//! Real-time classification core for body-tracking activities.
//!
//! Decides, frame by frame, whether a subject is performing a target pose,
//! facial expression, or drawn gesture, and debounces the noisy per-frame
//! classifications into stable transitions. Sensor I/O, rendering, and
//! speech belong to external collaborators behind the trait seams.

pub mod activity;
pub mod classify;
pub mod frame;
pub mod geometry;
pub mod registry;

pub use activity::{
    CombinedGestureDetector, GestureActivity, GestureDetector, GestureEvent, GestureProgress,
    StarActivity,
};
pub use classify::{
    CycleError, CycleTransition, Debounce, Expression, ExpressionRules, PoseThresholds,
    TargetCycle, check_star_pose, classify_expression,
};
pub use frame::{
    BodyFrame, FaceSnapshot, Joint, JointKind, JointTrackingState, SkeletonSnapshot,
    SkeletonTrackingState, SubjectId,
};
pub use geometry::GeometryError;
pub use registry::{
    FaceRegistry, FaceTrackerHandle, FaceTrackerSource, RegistryConfig, SubjectTransition,
};
