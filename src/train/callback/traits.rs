//! Core traits and types for the callback system
//!
//! - `CallbackAction` - what a callback asks the training loop to do next
//! - `Callback` - the trait all callbacks implement

use crate::train::{EpochLog, Predictor, Trainer};
use crate::Result;

/// Action to take after a callback
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallbackAction {
    /// Continue training normally
    #[default]
    Continue,
    /// Stop after the current epoch
    Stop,
}

/// Trait for training callbacks
///
/// Callbacks see the trainer read-only; `on_epoch_end` runs after the
/// training (and validation) pass of an epoch, before the epoch counter
/// advances, so `trainer.epoch()` is the epoch that just finished.
pub trait Callback<P: Predictor> {
    /// Called once before the first epoch of `fit`
    fn on_fit_begin(&mut self, _trainer: &Trainer<P>) -> Result<()> {
        Ok(())
    }

    /// Called after each epoch
    fn on_epoch_end(
        &mut self,
        train: &EpochLog,
        valid: Option<&EpochLog>,
        trainer: &Trainer<P>,
    ) -> Result<CallbackAction>;

    /// Callback name for logging
    fn name(&self) -> &str;
}

/// Validation loss when there was a validation pass, training loss otherwise
pub(crate) fn monitored_loss(train: &EpochLog, valid: Option<&EpochLog>) -> f32 {
    valid.map_or(train.loss, |v| v.loss)
}
