//! Gradient accumulation policy
//!
//! With `k` accumulation steps, iteration `i` of an epoch:
//! - scales its loss by `1 / k`
//! - zeros gradients first when `i % k == 0`
//! - steps optimizer and scheduler after backward when `(i + 1) % k == 0`
//!
//! A trailing group of fewer than `k` iterations never steps; its gradients
//! are discarded by the zeroing at the start of the next epoch.

/// Decides when to zero gradients and when to step, per iteration index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accumulation {
    steps: usize,
}

impl Accumulation {
    /// `steps` of 0 is treated as 1.
    pub fn new(steps: usize) -> Self {
        Self {
            steps: steps.max(1),
        }
    }

    /// Number of batches per optimizer step
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Factor applied to each batch loss before backward
    pub fn loss_scale(&self) -> f32 {
        1.0 / self.steps as f32
    }

    /// Whether gradients are zeroed before iteration `i`
    pub fn zeros_before(&self, i: usize) -> bool {
        i.is_multiple_of(self.steps)
    }

    /// Whether optimizer and scheduler step after iteration `i`
    pub fn steps_after(&self, i: usize) -> bool {
        (i + 1).is_multiple_of(self.steps)
    }

    /// Optimizer steps taken over `iterations` iterations
    pub fn updates_in(&self, iterations: usize) -> usize {
        iterations / self.steps
    }
}

impl Default for Accumulation {
    fn default() -> Self {
        Self::new(1)
    }
}
