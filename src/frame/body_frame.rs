//! One immutable sensor tick: frame number plus observed skeletons.

use crate::frame::skeleton::SkeletonSnapshot;

/// Everything the sensor delivered for one tick.
///
/// The frame number increases monotonically and is the clock used for
/// staleness comparisons; wall-clock time plays no role in classification.
#[derive(Debug, Clone)]
pub struct BodyFrame {
    pub frame_number: u32,
    pub skeletons: Vec<SkeletonSnapshot>,
}

impl BodyFrame {
    pub fn new(frame_number: u32) -> Self {
        Self {
            frame_number,
            skeletons: Vec::new(),
        }
    }

    pub fn with_skeleton(mut self, skeleton: SkeletonSnapshot) -> Self {
        self.skeletons.push(skeleton);
        self
    }
}
