//! Per-model hooks driven by the trainer

use crate::model::{Concat, Loss, Model};
use crate::Result;

/// What one forward pass over a batch produced
#[derive(Clone, Debug)]
pub struct Iteration<O, L, S> {
    /// Model output for the batch
    pub output: O,
    /// Ground truth the metrics compare against
    pub label: L,
    /// Batch loss, attached to the autograd graph when training
    pub loss: S,
}

impl<O, L, S> Iteration<O, L, S> {
    pub fn new(output: O, label: L, loss: S) -> Self {
        Self {
            output,
            label,
            loss,
        }
    }
}

/// Implemented once per model: the forward pass and the prediction pass.
///
/// The trainer owns everything around these two hooks: batching, train/eval
/// mode, gradient tracking, backward, optimizer and scheduler steps, metrics.
///
/// # Example
///
/// ```
/// use predictor::model::{Loss, Model};
/// use predictor::train::{Iteration, Predictor};
/// use predictor::Result;
///
/// struct Mean(f32);
///
/// impl Model for Mean {
///     type State = f32;
///     fn set_train_mode(&mut self, _training: bool) {}
///     fn state_dict(&self) -> f32 { self.0 }
///     fn load_state_dict(&mut self, state: f32) -> Result<()> { self.0 = state; Ok(()) }
/// }
///
/// struct Detached(f32);
///
/// impl Loss for Detached {
///     fn item(&self) -> f32 { self.0 }
///     fn scale(self, factor: f32) -> Self { Detached(self.0 * factor) }
///     fn backward(self) -> Result<()> { Ok(()) }
/// }
///
/// struct MeanPredictor { model: Mean }
///
/// impl Predictor for MeanPredictor {
///     type Model = Mean;
///     type Batch = Vec<f32>;
///     type Output = Vec<f32>;
///     type Label = Vec<f32>;
///     type Loss = Detached;
///
///     fn model(&self) -> &Mean { &self.model }
///     fn model_mut(&mut self) -> &mut Mean { &mut self.model }
///
///     fn run_iteration(&mut self, batch: Vec<f32>, _training: bool)
///         -> Result<Iteration<Vec<f32>, Vec<f32>, Detached>>
///     {
///         let output = vec![self.model.0; batch.len()];
///         let loss = batch.iter().map(|y| (y - self.model.0).powi(2)).sum::<f32>();
///         Ok(Iteration::new(output, batch, Detached(loss)))
///     }
///
///     fn predict_batch(&mut self, batch: Vec<f32>) -> Result<Vec<f32>> {
///         Ok(vec![self.model.0; batch.len()])
///     }
/// }
/// ```
pub trait Predictor {
    /// Model whose parameters are trained and checkpointed
    type Model: Model;
    /// Collated batch
    type Batch;
    /// Model output for one batch; joined across batches by `predict`
    type Output: Concat;
    /// Ground truth for one batch
    type Label;
    /// Batch loss
    type Loss: Loss;

    fn model(&self) -> &Self::Model;

    fn model_mut(&mut self) -> &mut Self::Model;

    /// Forward pass over one batch, returning output, label and loss.
    ///
    /// `training` is false during evaluation, when gradient tracking is
    /// already disabled on the model.
    fn run_iteration(
        &mut self,
        batch: Self::Batch,
        training: bool,
    ) -> Result<Iteration<Self::Output, Self::Label, Self::Loss>>;

    /// Prediction for one batch
    fn predict_batch(&mut self, batch: Self::Batch) -> Result<Self::Output>;
}
