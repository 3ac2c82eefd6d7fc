//! Registry mapping subject identifiers to per-subject expression state.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::classify::{
    CycleError, Expression, ExpressionRules, TargetCycle, classify_expression,
};
use crate::frame::{BodyFrame, SkeletonSnapshot, SkeletonTrackingState, SubjectId};
use crate::registry::source::{FaceTrackerHandle, FaceTrackerSource};

/// Configuration for the face registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Ordered, cyclic list of target expressions.
    pub targets: Vec<Expression>,
    /// Consecutive matched frames required to confirm a target.
    pub confirm_threshold: u32,
    /// A subject unseen for more than this many frames is evicted.
    pub max_missed_frames: u32,
    pub rules: ExpressionRules,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            targets: vec![Expression::Smiling, Expression::Sad, Expression::Angry],
            confirm_threshold: 1,
            max_missed_frames: 100,
            rules: ExpressionRules::default(),
        }
    }
}

/// A confirmed expression transition for one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectTransition {
    pub subject: SubjectId,
    /// The expression the subject just completed.
    pub completed: Expression,
    /// The expression the subject is now being asked to perform.
    pub target: Expression,
}

struct TrackerEntry<T> {
    /// `None` until the source manages to create the subject's tracker;
    /// creation is retried on later frames.
    tracker: Option<T>,
    cycle: TargetCycle<Expression>,
    last_seen_frame: u32,
}

/// Maps each sighted subject to its face tracker and expression cycle.
///
/// Entries are created on first sighting, updated every frame the subject
/// is re-observed, and evicted once the subject has been missing for longer
/// than the configured frame budget. All mutation happens on the frame
/// delivery thread; the registry holds no locks.
pub struct FaceRegistry<S: FaceTrackerSource> {
    source: S,
    config: RegistryConfig,
    template_cycle: TargetCycle<Expression>,
    entries: HashMap<SubjectId, TrackerEntry<S::Tracker>>,
}

impl<S: FaceTrackerSource> FaceRegistry<S> {
    /// Fails once at construction if the configured target list is empty;
    /// a constructed registry can always build per-subject cycles.
    pub fn new(source: S, config: RegistryConfig) -> Result<Self, CycleError> {
        let template_cycle =
            TargetCycle::new(config.targets.clone(), config.confirm_threshold)?;
        Ok(Self {
            source,
            config,
            template_cycle,
            entries: HashMap::new(),
        })
    }

    pub fn with_default_config(source: S) -> Result<Self, CycleError> {
        Self::new(source, RegistryConfig::default())
    }

    /// Process one subject's skeleton observation for this frame.
    ///
    /// Creates the entry on first sighting and always refreshes its
    /// last-seen frame. A skeleton below full tracking, a missing face
    /// frame, an unconverged face track, and an uncreatable tracker all
    /// degrade to a non-match for this frame; nothing propagates as an
    /// error.
    pub fn on_frame(
        &mut self,
        skeleton: &SkeletonSnapshot,
        frame_number: u32,
    ) -> Option<SubjectTransition> {
        let Self {
            source,
            config,
            template_cycle,
            entries,
        } = self;

        let subject = skeleton.subject_id;
        let entry = entries.entry(subject).or_insert_with(|| {
            debug!("subject {subject}: first sighting, creating tracker entry");
            TrackerEntry {
                tracker: None,
                cycle: template_cycle.clone(),
                last_seen_frame: frame_number,
            }
        });
        entry.last_seen_frame = frame_number;

        let classified = if skeleton.tracking_state == SkeletonTrackingState::Tracked {
            if entry.tracker.is_none() {
                match source.create(subject) {
                    Ok(tracker) => entry.tracker = Some(tracker),
                    Err(err) => {
                        warn!("subject {subject}: face tracker creation failed, will retry: {err}");
                    }
                }
            }
            entry
                .tracker
                .as_mut()
                .and_then(|tracker| tracker.track(skeleton))
                .and_then(|face| classify_expression(&face, &config.rules))
        } else {
            None
        };

        let transition = entry.cycle.observe(classified.as_ref())?;
        debug!(
            "subject {subject}: completed {}, now targeting {}",
            transition.completed, transition.target
        );
        Some(SubjectTransition {
            subject,
            completed: transition.completed,
            target: transition.target,
        })
    }

    /// Remove every subject that has been missing for more than the
    /// configured frame budget, releasing its tracker.
    ///
    /// Runs every frame regardless of how many subjects are visible, so a
    /// subject that silently disappears is cleaned up within the budget.
    /// The subtraction wraps, matching the sensor's unsigned frame counter.
    pub fn evict_stale(&mut self, current_frame: u32) {
        let max_missed = self.config.max_missed_frames;
        self.entries.retain(|subject, entry| {
            let missed = current_frame.wrapping_sub(entry.last_seen_frame);
            if missed > max_missed {
                debug!("subject {subject}: evicted after {missed} missed frames");
                false
            } else {
                true
            }
        });
    }

    /// Drive one full sensor tick: update every usable skeleton, then run
    /// the eviction pass.
    pub fn process(&mut self, frame: &BodyFrame) -> Vec<SubjectTransition> {
        let mut transitions = Vec::new();
        for skeleton in &frame.skeletons {
            match skeleton.tracking_state {
                SkeletonTrackingState::Tracked | SkeletonTrackingState::PositionOnly => {
                    if let Some(transition) = self.on_frame(skeleton, frame.frame_number) {
                        transitions.push(transition);
                    }
                }
                SkeletonTrackingState::NotTracked => {}
            }
        }
        self.evict_stale(frame.frame_number);
        transitions
    }

    pub fn contains(&self, subject: SubjectId) -> bool {
        self.entries.contains_key(&subject)
    }

    /// The expression a subject is currently targeting, if tracked.
    pub fn target_of(&self, subject: SubjectId) -> Option<&Expression> {
        self.entries.get(&subject).map(|entry| entry.cycle.target())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FaceSnapshot;

    struct MockTracker {
        face: FaceSnapshot,
    }

    impl FaceTrackerHandle for MockTracker {
        fn track(&mut self, _skeleton: &SkeletonSnapshot) -> Option<FaceSnapshot> {
            Some(self.face)
        }
    }

    /// Source that serves a fixed face, optionally failing the first few
    /// tracker creations.
    struct MockSource {
        face: FaceSnapshot,
        failures_left: u32,
        creates: u32,
    }

    impl MockSource {
        fn serving(face: FaceSnapshot) -> Self {
            Self {
                face,
                failures_left: 0,
                creates: 0,
            }
        }
    }

    impl FaceTrackerSource for MockSource {
        type Tracker = MockTracker;
        type Error = String;

        fn create(&mut self, _subject: SubjectId) -> Result<MockTracker, String> {
            self.creates += 1;
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err("sensor shutting down".into());
            }
            Ok(MockTracker { face: self.face })
        }
    }

    fn smiling_face() -> FaceSnapshot {
        FaceSnapshot {
            lip_stretcher: 0.5,
            ..FaceSnapshot::default()
        }
    }

    fn tracked_skeleton(subject: SubjectId) -> SkeletonSnapshot {
        SkeletonSnapshot::new(subject, SkeletonTrackingState::Tracked)
    }

    #[test]
    fn test_entry_created_on_first_sighting() {
        let mut registry =
            FaceRegistry::with_default_config(MockSource::serving(FaceSnapshot::default()))
                .unwrap();
        assert!(registry.is_empty());

        registry.on_frame(&tracked_skeleton(7), 1);
        assert!(registry.contains(7));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_matched_expression_advances_cycle() {
        let mut registry =
            FaceRegistry::with_default_config(MockSource::serving(smiling_face())).unwrap();

        let transition = registry.on_frame(&tracked_skeleton(7), 1).unwrap();
        assert_eq!(transition.subject, 7);
        assert_eq!(transition.completed, Expression::Smiling);
        assert_eq!(transition.target, Expression::Sad);

        // Still smiling, but the target is now sad: no further transitions.
        assert!(registry.on_frame(&tracked_skeleton(7), 2).is_none());
        assert_eq!(registry.target_of(7), Some(&Expression::Sad));
    }

    #[test]
    fn test_position_only_skeleton_is_a_non_match() {
        let config = RegistryConfig {
            confirm_threshold: 2,
            ..RegistryConfig::default()
        };
        let mut registry =
            FaceRegistry::new(MockSource::serving(smiling_face()), config).unwrap();

        let position_only = SkeletonSnapshot::new(7, SkeletonTrackingState::PositionOnly);
        assert!(registry.on_frame(&tracked_skeleton(7), 1).is_none());
        // Breaks the run one frame short of confirmation.
        assert!(registry.on_frame(&position_only, 2).is_none());
        assert!(registry.on_frame(&tracked_skeleton(7), 3).is_none());
        let transition = registry.on_frame(&tracked_skeleton(7), 4).unwrap();
        assert_eq!(transition.completed, Expression::Smiling);
    }

    #[test]
    fn test_creation_failure_keeps_entry_inert_and_retries() {
        let source = MockSource {
            face: smiling_face(),
            failures_left: 2,
            creates: 0,
        };
        let mut registry = FaceRegistry::with_default_config(source).unwrap();

        // Two frames with a broken source: entry exists but never classifies.
        assert!(registry.on_frame(&tracked_skeleton(7), 1).is_none());
        assert!(registry.on_frame(&tracked_skeleton(7), 2).is_none());
        assert!(registry.contains(7));

        // Third frame: creation succeeds and classification resumes.
        let transition = registry.on_frame(&tracked_skeleton(7), 3);
        assert_eq!(
            transition.map(|t| t.completed),
            Some(Expression::Smiling)
        );
        assert_eq!(registry.source.creates, 3);
    }

    #[test]
    fn test_stale_subject_evicted() {
        let mut registry =
            FaceRegistry::with_default_config(MockSource::serving(smiling_face())).unwrap();

        registry.on_frame(&tracked_skeleton(7), 10);
        registry.evict_stale(10 + 101);
        assert!(!registry.contains(7));
    }

    #[test]
    fn test_recent_subject_retained_with_state() {
        let mut registry =
            FaceRegistry::with_default_config(MockSource::serving(smiling_face())).unwrap();

        registry.on_frame(&tracked_skeleton(7), 10).unwrap();
        registry.evict_stale(10 + 99);
        assert!(registry.contains(7));
        assert_eq!(registry.target_of(7), Some(&Expression::Sad));
    }

    #[test]
    fn test_eviction_survives_frame_counter_wrap() {
        let mut registry =
            FaceRegistry::with_default_config(MockSource::serving(smiling_face())).unwrap();

        registry.on_frame(&tracked_skeleton(7), u32::MAX - 1);
        // Five frames later the counter has wrapped; the subject is recent.
        registry.evict_stale(3);
        assert!(registry.contains(7));
    }

    #[test]
    fn test_process_drives_all_skeletons_and_eviction() {
        let mut registry =
            FaceRegistry::with_default_config(MockSource::serving(smiling_face())).unwrap();

        let frame = BodyFrame::new(1)
            .with_skeleton(tracked_skeleton(1))
            .with_skeleton(tracked_skeleton(2))
            .with_skeleton(SkeletonSnapshot::new(3, SkeletonTrackingState::NotTracked));

        let transitions = registry.process(&frame);
        assert_eq!(transitions.len(), 2);
        assert!(registry.contains(1));
        assert!(registry.contains(2));
        assert!(!registry.contains(3));
    }

    #[test]
    fn test_config_deserializes() {
        let json = r#"{
            "targets": ["smiling", "angry"],
            "confirm_threshold": 5,
            "max_missed_frames": 60,
            "rules": { "jaw_lower_band": 0.3, "lip_stretcher_min": 0.5 }
        }"#;
        let config: RegistryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.targets, vec![Expression::Smiling, Expression::Angry]);
        assert_eq!(config.max_missed_frames, 60);
    }
}
