//! Batched inference

use super::core::Trainer;
use crate::data::{DataLoader, Dataset};
use crate::model::{Concat, Model};
use crate::train::Predictor;
use crate::Result;

impl<P: Predictor> Trainer<P> {
    /// Predict over `data` with `Predictor::predict_batch`, batched by
    /// `config.batch_size`.
    ///
    /// Returns one output per sample, in dataset order.
    pub fn predict<D, F>(&mut self, data: &D, collate: F) -> Result<P::Output>
    where
        D: Dataset + ?Sized,
        F: Fn(Vec<D::Item>) -> P::Batch,
    {
        self.predict_with(data, collate, None, P::predict_batch)
    }

    /// Predict over `data` with a custom prediction function.
    ///
    /// `batch_size` defaults to `config.batch_size`. The model is left in
    /// evaluation mode with gradient tracking re-enabled, even if a batch fails.
    pub fn predict_with<D, F, G>(
        &mut self,
        data: &D,
        collate: F,
        batch_size: Option<usize>,
        mut predict_fn: G,
    ) -> Result<P::Output>
    where
        D: Dataset + ?Sized,
        F: Fn(Vec<D::Item>) -> P::Batch,
        G: FnMut(&mut P, P::Batch) -> Result<P::Output>,
    {
        let batch_size = batch_size.unwrap_or(self.config.batch_size);
        let loader = DataLoader::new(data, batch_size, collate);

        let model = self.predictor.model_mut();
        model.set_train_mode(false);
        model.set_grad_enabled(false);

        let bar = self.progress_bar(loader.len(), "predicting");
        let mut outputs = Vec::with_capacity(loader.len());
        let mut failure = None;
        for batch in loader.iter() {
            match predict_fn(&mut self.predictor, batch) {
                Ok(output) => outputs.push(output),
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
            bar.inc(1);
        }
        bar.finish();

        self.predictor.model_mut().set_grad_enabled(true);
        if let Some(e) = failure {
            return Err(e);
        }

        tracing::debug!(batches = outputs.len(), batch_size, "prediction finished");
        <P::Output as Concat>::concat(outputs)
    }
}
