//! Multi-epoch fitting

use std::time::Instant;

use super::core::Trainer;
use super::result::{EpochRecord, FitResult};
use crate::data::{DataLoader, Dataset, Shuffle};
use crate::train::{Callback, CallbackAction, Predictor};
use crate::Result;

impl<P: Predictor> Trainer<P> {
    /// Train until `epoch` reaches `config.max_epochs` or a callback stops.
    ///
    /// Every epoch draws a fresh shuffle of `train_data` from the global RNG
    /// (see [`crate::seed()`]); `valid_data`, when given, is evaluated in order
    /// after each training pass. Callbacks run after both passes, before the
    /// epoch counter advances.
    ///
    /// A trainer restored with [`Trainer::load`] continues from the loaded
    /// epoch.
    pub fn fit<D, FT, FV>(
        &mut self,
        train_data: &D,
        valid_data: Option<&D>,
        train_collate: FT,
        valid_collate: FV,
        callbacks: &mut [&mut dyn Callback<P>],
    ) -> Result<FitResult>
    where
        D: Dataset + ?Sized,
        FT: Fn(Vec<D::Item>) -> P::Batch,
        FV: Fn(Vec<D::Item>) -> P::Batch,
    {
        let start = Instant::now();
        let batch_size = self.config.batch_size;
        let train_loader =
            DataLoader::new(train_data, batch_size, train_collate).shuffle(Shuffle::Global);
        let valid_loader = valid_data.map(|data| DataLoader::new(data, batch_size, valid_collate));

        for callback in callbacks.iter_mut() {
            callback.on_fit_begin(self)?;
        }

        tracing::info!(
            start_epoch = self.epoch,
            max_epochs = self.config.max_epochs,
            train_samples = train_data.len(),
            valid_samples = valid_data.map(|d| d.len()),
            "fit started"
        );

        let mut epochs = Vec::new();
        let mut stopped_early = false;
        while self.epoch < self.config.max_epochs {
            let train = self.run_epoch(&train_loader, true)?;
            let valid = match &valid_loader {
                Some(loader) => Some(self.run_epoch(loader, false)?),
                None => None,
            };

            for callback in callbacks.iter_mut() {
                if callback.on_epoch_end(&train, valid.as_ref(), self)? == CallbackAction::Stop {
                    tracing::info!(epoch = self.epoch, callback = callback.name(), "stop requested");
                    stopped_early = true;
                }
            }

            epochs.push(EpochRecord {
                epoch: self.epoch,
                train,
                valid,
            });
            self.epoch += 1;

            if stopped_early {
                break;
            }
        }

        let result = FitResult {
            final_epoch: self.epoch,
            epochs,
            stopped_early,
            elapsed_secs: start.elapsed().as_secs_f64(),
        };
        tracing::info!(
            final_epoch = result.final_epoch,
            stopped_early,
            elapsed_secs = result.elapsed_secs,
            "fit finished"
        );
        Ok(result)
    }
}
