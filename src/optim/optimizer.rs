//! Optimizer trait

use crate::Result;

/// Trait for optimization algorithms
///
/// Implementations hold handles to the model parameters they update, the way
/// framework optimizers are built from a parameter store.
pub trait Optimizer {
    /// Clear accumulated gradients
    fn zero_grad(&mut self);

    /// Apply one update from the accumulated gradients
    fn step(&mut self) -> Result<()>;

    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);
}
