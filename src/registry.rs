//! Per-subject tracker lifecycle: creation on first sighting, per-frame
//! classification updates, staleness eviction.

mod face_registry;
mod source;

pub use face_registry::{FaceRegistry, RegistryConfig, SubjectTransition};
pub use source::{FaceTrackerHandle, FaceTrackerSource};
