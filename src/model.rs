//! Framework seams for models, losses and prediction outputs
//!
//! These traits are the only contact between the training loop and the
//! deep-learning framework that owns tensors and autograd.

use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A trainable model as seen by the training loop.
pub trait Model {
    /// Serializable parameter state written into checkpoints
    type State: Serialize + DeserializeOwned;

    /// Switch between training (`true`) and evaluation (`false`) behaviour,
    /// e.g. dropout and batch-norm statistics.
    fn set_train_mode(&mut self, training: bool);

    /// Enable or disable gradient tracking for subsequent forward passes.
    fn set_grad_enabled(&mut self, _enabled: bool) {}

    /// Snapshot the parameters.
    fn state_dict(&self) -> Self::State;

    /// Replace the parameters with a previously taken snapshot.
    fn load_state_dict(&mut self, state: Self::State) -> Result<()>;
}

/// Scalar loss of one batch, still attached to the autograd graph.
pub trait Loss: Sized {
    /// Plain value of the loss
    fn item(&self) -> f32;

    /// Multiply the loss (and therefore its gradients) by `factor`.
    fn scale(self, factor: f32) -> Self;

    /// Backpropagate, accumulating gradients into the parameters.
    fn backward(self) -> Result<()>;
}

/// Joins per-batch prediction outputs into one output, in order.
pub trait Concat: Sized {
    fn concat(parts: Vec<Self>) -> Result<Self>;
}

impl<T> Concat for Vec<T> {
    fn concat(parts: Vec<Self>) -> Result<Self> {
        Ok(parts.into_iter().flatten().collect())
    }
}
