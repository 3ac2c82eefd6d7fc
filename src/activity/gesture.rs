//! Gesture-detector capability interface and the gesture-drawing activity.
//!
//! The gesture comparison algorithms themselves (template matching, swipe
//! heuristics) live in external collaborators behind [`GestureDetector`];
//! this module owns only the fan-out and the level progression.

use log::debug;
use nalgebra::Point3;

/// A recognized gesture, by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureEvent {
    pub label: String,
}

impl GestureEvent {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// One gesture recognizer fed with per-frame hand positions.
pub trait GestureDetector {
    /// Feed one frame's hand position sample.
    fn feed(&mut self, hand: Point3<f32>);

    /// Take the next pending recognition, if any.
    fn try_consume_event(&mut self) -> Option<GestureEvent>;
}

/// Composite detector that fans each sample out to all children and drains
/// their events in child order.
#[derive(Default)]
pub struct CombinedGestureDetector {
    children: Vec<Box<dyn GestureDetector>>,
}

impl CombinedGestureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, detector: Box<dyn GestureDetector>) {
        self.children.push(detector);
    }
}

impl GestureDetector for CombinedGestureDetector {
    fn feed(&mut self, hand: Point3<f32>) {
        for child in &mut self.children {
            child.feed(hand);
        }
    }

    fn try_consume_event(&mut self) -> Option<GestureEvent> {
        self.children
            .iter_mut()
            .find_map(|child| child.try_consume_event())
    }
}

/// Progress report from feeding a gesture event to the activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureProgress {
    /// Event did not match the current level; nothing changed.
    Ignored,
    /// Level cleared; the contained label is the next level to draw.
    Advanced(String),
    /// Final level cleared; the activity is done.
    Completed,
}

/// Ordered sequence of gesture levels the user draws one by one.
///
/// An event only counts when its label matches the level currently being
/// asked for; clearing the final level completes the activity once.
pub struct GestureActivity {
    levels: Vec<String>,
    current: usize,
    completed: bool,
}

impl Default for GestureActivity {
    fn default() -> Self {
        Self::new(vec![
            "circle".to_string(),
            "triangle".to_string(),
            "square".to_string(),
        ])
    }
}

impl GestureActivity {
    pub fn new(levels: Vec<String>) -> Self {
        Self {
            levels,
            current: 0,
            completed: false,
        }
    }

    /// The gesture the user is currently being asked to draw, or `None`
    /// once the activity has completed.
    pub fn current_level(&self) -> Option<&str> {
        if self.completed {
            None
        } else {
            self.levels.get(self.current).map(String::as_str)
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn on_event(&mut self, event: &GestureEvent) -> GestureProgress {
        let Some(level) = self.current_level() else {
            return GestureProgress::Ignored;
        };
        if event.label != level {
            return GestureProgress::Ignored;
        }

        self.current += 1;
        if self.current >= self.levels.len() {
            debug!("gesture activity completed at {}", event.label);
            self.completed = true;
            return GestureProgress::Completed;
        }

        let next = self.levels[self.current].clone();
        debug!("gesture level {} cleared, next is {next}", event.label);
        GestureProgress::Advanced(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Detector that recognizes a fixed label after a set number of samples.
    struct MockDetector {
        label: &'static str,
        samples_needed: u32,
        samples_seen: u32,
        pending: Option<GestureEvent>,
    }

    impl MockDetector {
        fn new(label: &'static str, samples_needed: u32) -> Self {
            Self {
                label,
                samples_needed,
                samples_seen: 0,
                pending: None,
            }
        }
    }

    impl GestureDetector for MockDetector {
        fn feed(&mut self, _hand: Point3<f32>) {
            self.samples_seen += 1;
            if self.samples_seen == self.samples_needed {
                self.pending = Some(GestureEvent::new(self.label));
            }
        }

        fn try_consume_event(&mut self) -> Option<GestureEvent> {
            self.pending.take()
        }
    }

    #[test]
    fn test_combined_detector_fans_out() {
        let mut combined = CombinedGestureDetector::new();
        combined.add(Box::new(MockDetector::new("circle", 3)));
        combined.add(Box::new(MockDetector::new("swipe", 2)));

        let hand = Point3::new(0.1, 0.2, 1.5);
        combined.feed(hand);
        assert!(combined.try_consume_event().is_none());

        combined.feed(hand);
        assert_eq!(combined.try_consume_event(), Some(GestureEvent::new("swipe")));

        combined.feed(hand);
        assert_eq!(
            combined.try_consume_event(),
            Some(GestureEvent::new("circle"))
        );
        assert!(combined.try_consume_event().is_none());
    }

    #[test]
    fn test_activity_advances_through_levels() {
        let mut activity = GestureActivity::default();
        assert_eq!(activity.current_level(), Some("circle"));

        assert_eq!(
            activity.on_event(&GestureEvent::new("circle")),
            GestureProgress::Advanced("triangle".to_string())
        );
        assert_eq!(
            activity.on_event(&GestureEvent::new("triangle")),
            GestureProgress::Advanced("square".to_string())
        );
        assert_eq!(
            activity.on_event(&GestureEvent::new("square")),
            GestureProgress::Completed
        );
        assert!(activity.is_completed());
        assert_eq!(activity.current_level(), None);
    }

    #[test]
    fn test_wrong_gesture_ignored() {
        let mut activity = GestureActivity::default();
        assert_eq!(
            activity.on_event(&GestureEvent::new("square")),
            GestureProgress::Ignored
        );
        assert_eq!(activity.current_level(), Some("circle"));
    }

    #[test]
    fn test_completes_once() {
        let mut activity = GestureActivity::new(vec!["circle".to_string()]);
        assert_eq!(
            activity.on_event(&GestureEvent::new("circle")),
            GestureProgress::Completed
        );
        assert_eq!(
            activity.on_event(&GestureEvent::new("circle")),
            GestureProgress::Ignored
        );
    }
}
