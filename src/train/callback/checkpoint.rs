//! Checkpoint callback for saving model state periodically

use std::path::PathBuf;

use super::traits::{monitored_loss, Callback, CallbackAction};
use crate::train::{EpochLog, Predictor, Trainer};
use crate::Result;

/// Saves trainer checkpoints every N epochs and/or on a new best loss.
///
/// Periodic checkpoints go to `checkpoint_epoch_{epoch}.json`, the best one to
/// `checkpoint_best.json`, both under the configured directory. The best loss
/// is the validation loss when available, otherwise the training loss.
#[derive(Clone, Debug)]
pub struct CheckpointCallback {
    checkpoint_dir: PathBuf,
    /// Save every N epochs (None = only save best)
    save_every: Option<usize>,
    save_best: bool,
    best_loss: f32,
    pub(crate) last_saved_epoch: Option<usize>,
}

impl CheckpointCallback {
    /// Create checkpoint callback saving the best model to `checkpoint_dir`
    pub fn new(checkpoint_dir: impl Into<PathBuf>) -> Self {
        Self {
            checkpoint_dir: checkpoint_dir.into(),
            save_every: None,
            save_best: true,
            best_loss: f32::INFINITY,
            last_saved_epoch: None,
        }
    }

    /// Also save every `epochs` epochs; 0 disables periodic saves
    pub fn save_every(mut self, epochs: usize) -> Self {
        self.save_every = (epochs > 0).then_some(epochs);
        self
    }

    pub fn save_best(mut self, save: bool) -> Self {
        self.save_best = save;
        self
    }

    pub fn checkpoint_path(&self, epoch: usize) -> PathBuf {
        self.checkpoint_dir
            .join(format!("checkpoint_epoch_{epoch}.json"))
    }

    pub fn best_checkpoint_path(&self) -> PathBuf {
        self.checkpoint_dir.join("checkpoint_best.json")
    }
}

impl<P: Predictor> Callback<P> for CheckpointCallback {
    fn on_epoch_end(
        &mut self,
        train: &EpochLog,
        valid: Option<&EpochLog>,
        trainer: &Trainer<P>,
    ) -> Result<CallbackAction> {
        let epoch = trainer.epoch();

        if let Some(interval) = self.save_every {
            if (epoch + 1).is_multiple_of(interval) {
                trainer.save(self.checkpoint_path(epoch))?;
                self.last_saved_epoch = Some(epoch);
            }
        }

        let loss = monitored_loss(train, valid);
        if self.save_best && loss < self.best_loss {
            self.best_loss = loss;
            trainer.save(self.best_checkpoint_path())?;
            self.last_saved_epoch = Some(epoch);
            tracing::debug!(epoch, loss, "new best checkpoint");
        }

        Ok(CallbackAction::Continue)
    }

    fn name(&self) -> &str {
        "CheckpointCallback"
    }
}
