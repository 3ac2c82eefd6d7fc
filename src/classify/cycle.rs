//! Cyclic target state machine driven by debounced classification.

use thiserror::Error;

use crate::classify::debounce::Debounce;

#[derive(Debug, Error, PartialEq)]
pub enum CycleError {
    #[error("target label list is empty")]
    EmptyTargets,
}

/// Emitted when a target is confirmed and the cycle advances.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleTransition<L> {
    /// The label the subject just completed.
    pub completed: L,
    /// The newly targeted label.
    pub target: L,
}

/// Cycles through an ordered list of target labels, advancing when the
/// debounced classifier confirms a match on the current target.
///
/// There is no terminal state; confirming the last label wraps back to the
/// first. Each tracked subject owns its own instance, so two subjects keep
/// independent cycle positions.
#[derive(Debug, Clone)]
pub struct TargetCycle<L> {
    targets: Vec<L>,
    current: usize,
    debounce: Debounce,
}

impl<L: Clone + PartialEq> TargetCycle<L> {
    /// An empty target list is a configuration error and is rejected here,
    /// once, rather than surfacing per frame.
    pub fn new(targets: Vec<L>, confirm_threshold: u32) -> Result<Self, CycleError> {
        if targets.is_empty() {
            return Err(CycleError::EmptyTargets);
        }
        Ok(Self {
            targets,
            current: 0,
            debounce: Debounce::new(confirm_threshold),
        })
    }

    /// The label the subject is currently being asked to perform.
    pub fn target(&self) -> &L {
        &self.targets[self.current]
    }

    /// Feed one frame's classified label. On confirmation the cycle
    /// advances, the debounce counter re-arms, and the transition is
    /// returned for the caller's presentation side effects.
    pub fn observe(&mut self, classified: Option<&L>) -> Option<CycleTransition<L>> {
        let matched = classified == Some(self.target());
        if !self.debounce.update(matched) {
            return None;
        }

        let completed = self.targets[self.current].clone();
        self.current = (self.current + 1) % self.targets.len();
        self.debounce.reset();

        Some(CycleTransition {
            completed,
            target: self.targets[self.current].clone(),
        })
    }
}
