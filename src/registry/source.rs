//! Trait seam to the external face-tracking collaborator.

use crate::frame::{FaceSnapshot, SkeletonSnapshot, SubjectId};

/// Factory for per-subject face trackers.
///
/// Implement this to connect a face-tracking backend to the registry. One
/// tracker handle is created per tracked subject; creation may fail (for
/// example while the underlying sensor is shutting down), in which case the
/// registry keeps the subject's entry inert and retries on a later frame.
///
/// # Example
///
/// ```ignore
/// use kinesics_rs::{FaceSnapshot, FaceTrackerHandle, FaceTrackerSource};
///
/// struct SensorFaceSource { /* sensor connection */ }
/// struct SensorFaceTracker { /* native tracker handle */ }
///
/// impl FaceTrackerSource for SensorFaceSource {
///     type Tracker = SensorFaceTracker;
///     type Error = std::io::Error;
///
///     fn create(&mut self, subject: u32) -> Result<Self::Tracker, Self::Error> {
///         // Allocate the native per-subject tracker
///         Ok(SensorFaceTracker { /* ... */ })
///     }
/// }
///
/// impl FaceTrackerHandle for SensorFaceTracker {
///     fn track(&mut self, skeleton: &kinesics_rs::SkeletonSnapshot) -> Option<FaceSnapshot> {
///         // Run face tracking against this frame's sensor data
///         None
///     }
/// }
/// ```
pub trait FaceTrackerSource {
    /// Per-subject tracker handle. Dropping it releases whatever resource
    /// the backend holds for that subject.
    type Tracker: FaceTrackerHandle;

    /// Error type for tracker creation failures.
    type Error: std::fmt::Display;

    /// Create a tracker for one subject.
    fn create(&mut self, subject: SubjectId) -> Result<Self::Tracker, Self::Error>;
}

/// One subject's face tracker.
pub trait FaceTrackerHandle {
    /// Produce this frame's face snapshot for the subject, or `None` when
    /// no face data is available this tick.
    fn track(&mut self, skeleton: &SkeletonSnapshot) -> Option<FaceSnapshot>;
}
