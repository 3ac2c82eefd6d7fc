//! Star-pose activity: hold the pose for a run of consecutive frames.

use log::debug;

use crate::classify::{Debounce, PoseThresholds, check_star_pose};
use crate::frame::SkeletonSnapshot;

const CONFIRM_FRAMES: u32 = 20;

/// Tracks one subject's attempt at the star pose.
///
/// Every frame's pose check feeds an owned debounce counter; the activity
/// completes once the pose has been held for the required consecutive run,
/// and the completion event fires exactly once until `reset`.
#[derive(Debug)]
pub struct StarActivity {
    thresholds: PoseThresholds,
    debounce: Debounce,
    completed: bool,
}

impl Default for StarActivity {
    fn default() -> Self {
        Self::new(PoseThresholds::default())
    }
}

impl StarActivity {
    pub fn new(thresholds: PoseThresholds) -> Self {
        Self {
            thresholds,
            debounce: Debounce::new(CONFIRM_FRAMES),
            completed: false,
        }
    }

    /// Feed one frame's skeleton. Returns `true` exactly once, on the frame
    /// the pose is confirmed.
    pub fn on_frame(&mut self, skeleton: &SkeletonSnapshot) -> bool {
        if self.completed {
            return false;
        }

        let passed = check_star_pose(skeleton, &self.thresholds);
        if self.debounce.update(passed) {
            debug!("star pose confirmed for subject {}", skeleton.subject_id);
            self.completed = true;
            return true;
        }
        false
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Re-arm the activity for another attempt.
    pub fn reset(&mut self) {
        self.completed = false;
        self.debounce.reset();
    }
}
