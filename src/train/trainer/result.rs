//! Training result types

use super::EpochLog;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Logs of one completed epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochRecord {
    /// Epoch index (0-based)
    pub epoch: usize,
    pub train: EpochLog,
    /// Present when a validation dataset was given
    pub valid: Option<EpochLog>,
}

/// Result of a `fit` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    /// Epoch counter when fitting ended
    pub final_epoch: usize,
    /// Epochs run by this call, in order
    pub epochs: Vec<EpochRecord>,
    /// Whether a callback ended training before `max_epochs`
    pub stopped_early: bool,
    /// Wall-clock duration of the call in seconds
    pub elapsed_secs: f64,
}

impl FitResult {
    /// Logs of the last epoch run, if any
    pub fn last(&self) -> Option<&EpochRecord> {
        self.epochs.last()
    }

    /// Lowest validation loss, falling back to training loss without validation
    pub fn best_loss(&self) -> Option<f32> {
        self.epochs
            .iter()
            .map(|r| r.valid.as_ref().unwrap_or(&r.train).loss)
            .min_by(f32::total_cmp)
    }

    /// Write the result as pretty JSON
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialization {
                message: format!("fit history: {e}"),
            })?;
        std::fs::write(path, json)
            .map_err(|e| Error::io(format!("writing {}", path.display()), e))
    }
}
