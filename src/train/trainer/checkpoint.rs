//! Checkpoint save/load

use super::core::Trainer;
use crate::model::Model;
use crate::train::Predictor;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// On-disk record of a training run's resume point and model parameters.
///
/// Stored as one JSON document: `{"epoch": n, "model": <state>}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<S> {
    /// Epoch to resume from
    pub epoch: usize,
    /// Model parameter state
    pub model: S,
}

impl<S: DeserializeOwned> Checkpoint<S> {
    /// Read a checkpoint without a trainer
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::io(format!("opening checkpoint {}", path.display()), e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::Checkpoint {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl<S: Serialize> Checkpoint<S> {
    /// Write the checkpoint, creating parent directories as needed
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::io(format!("creating {}", parent.display()), e))?;
        }

        let file = File::create(path)
            .map_err(|e| Error::io(format!("creating checkpoint {}", path.display()), e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).map_err(|e| Error::Serialization {
            message: format!("checkpoint {}: {e}", path.display()),
        })?;
        writer
            .flush()
            .map_err(|e| Error::io(format!("flushing checkpoint {}", path.display()), e))
    }
}

impl<P: Predictor> Trainer<P> {
    /// Save `{epoch + 1, model state}` to `path`.
    ///
    /// The stored epoch is the one a resumed run starts at. It is only right
    /// while the current epoch is still in progress, i.e. from
    /// [`Callback::on_epoch_end`](crate::train::Callback::on_epoch_end) before
    /// the counter advances. After `fit` returns the counter already names the
    /// next epoch, and a checkpoint saved then resumes one epoch too late.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let checkpoint = Checkpoint {
            epoch: self.epoch + 1,
            model: self.predictor.model().state_dict(),
        };
        checkpoint.write(path)?;
        tracing::info!(path = %path.display(), epoch = checkpoint.epoch, "checkpoint saved");
        Ok(())
    }

    /// Restore model parameters from `path` and resume from its epoch.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let checkpoint: Checkpoint<<P::Model as Model>::State> = Checkpoint::read(path)?;
        self.predictor
            .model_mut()
            .load_state_dict(checkpoint.model)?;
        self.epoch = checkpoint.epoch;
        tracing::info!(path = %path.display(), epoch = self.epoch, "checkpoint loaded");
        Ok(())
    }
}
