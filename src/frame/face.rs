//! Face snapshot: action-unit coefficients from the face-tracking collaborator.

/// Per-frame action-unit coefficients for one subject's face.
///
/// Each coefficient describes the deformation of one facial feature as
/// reported by face tracking. `tracking_succeeded` is false when the face
/// tracker did not converge this frame; the coefficients are then stale and
/// must not be classified.
#[derive(Debug, Clone, Copy)]
pub struct FaceSnapshot {
    pub tracking_succeeded: bool,
    pub jaw_lower: f32,
    pub brow_lower: f32,
    pub brow_raiser: f32,
    pub lip_corner_depressor: f32,
    pub lip_raiser: f32,
    pub lip_stretcher: f32,
}

impl Default for FaceSnapshot {
    /// A neutral, successfully tracked face.
    fn default() -> Self {
        Self {
            tracking_succeeded: true,
            jaw_lower: 0.0,
            brow_lower: 0.0,
            brow_raiser: 0.0,
            lip_corner_depressor: 0.0,
            lip_raiser: 0.0,
            lip_stretcher: 0.0,
        }
    }
}

impl FaceSnapshot {
    /// A snapshot for a frame where face tracking did not converge.
    pub fn failed() -> Self {
        Self {
            tracking_succeeded: false,
            ..Self::default()
        }
    }
}
