//! Consecutive-success accumulator for noisy per-frame classifications.

/// Turns a noisy per-frame boolean into a single confirmed event after a
/// run of consecutive passes.
///
/// The confirmation is edge-triggered: it fires exactly when the count
/// reaches the threshold. Further passes keep counting without re-firing;
/// any single failure invalidates the entire run. Only frame-by-frame
/// consecutiveness matters, never wall-clock time.
#[derive(Debug, Clone)]
pub struct Debounce {
    count: u32,
    threshold: u32,
}

impl Debounce {
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold: threshold.max(1),
        }
    }

    /// Feed one frame's classification result. Returns `true` exactly once
    /// per uninterrupted run of `threshold` consecutive passes.
    pub fn update(&mut self, passed: bool) -> bool {
        if passed {
            self.count = self.count.saturating_add(1);
            self.count == self.threshold
        } else {
            self.count = 0;
            false
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
