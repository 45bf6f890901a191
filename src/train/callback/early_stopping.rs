//! Early stopping callback to halt training when loss plateaus

use super::traits::{monitored_loss, Callback, CallbackAction};
use crate::train::{EpochLog, Predictor, Trainer};
use crate::Result;

/// Stops training after `patience` epochs without improvement.
///
/// Watches the validation loss, or the training loss when `fit` runs without
/// validation data. An epoch improves when its loss is lower than the best so
/// far by more than `min_delta`.
///
/// # Example
///
/// ```rust
/// use predictor::train::EarlyStopping;
///
/// // Stop if no improvement for 5 epochs, min improvement 0.001
/// let early_stop = EarlyStopping::new(5, 0.001);
/// assert_eq!(early_stop.best_loss(), f32::INFINITY);
/// ```
#[derive(Clone, Debug)]
pub struct EarlyStopping {
    patience: usize,
    min_delta: f32,
    best_loss: f32,
    pub(crate) epochs_without_improvement: usize,
}

impl EarlyStopping {
    pub fn new(patience: usize, min_delta: f32) -> Self {
        Self {
            patience,
            min_delta,
            best_loss: f32::INFINITY,
            epochs_without_improvement: 0,
        }
    }

    /// Best monitored loss seen so far
    pub fn best_loss(&self) -> f32 {
        self.best_loss
    }

    /// Reset internal state
    pub fn reset(&mut self) {
        self.best_loss = f32::INFINITY;
        self.epochs_without_improvement = 0;
    }

    /// Record `loss`, returning the action for this epoch
    fn observe(&mut self, loss: f32) -> CallbackAction {
        if loss < self.best_loss - self.min_delta {
            self.best_loss = loss;
            self.epochs_without_improvement = 0;
        } else {
            self.epochs_without_improvement += 1;
        }

        if self.epochs_without_improvement >= self.patience {
            CallbackAction::Stop
        } else {
            CallbackAction::Continue
        }
    }
}

impl<P: Predictor> Callback<P> for EarlyStopping {
    fn on_fit_begin(&mut self, _trainer: &Trainer<P>) -> Result<()> {
        self.reset();
        Ok(())
    }

    fn on_epoch_end(
        &mut self,
        train: &EpochLog,
        valid: Option<&EpochLog>,
        trainer: &Trainer<P>,
    ) -> Result<CallbackAction> {
        let action = self.observe(monitored_loss(train, valid));
        if action == CallbackAction::Stop {
            tracing::info!(
                epoch = trainer.epoch(),
                patience = self.patience,
                best_loss = self.best_loss,
                "early stopping: no improvement"
            );
        }
        Ok(action)
    }

    fn name(&self) -> &str {
        "EarlyStopping"
    }
}
