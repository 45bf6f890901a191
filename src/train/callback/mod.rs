//! Callback system for training events
//!
//! Callbacks run at the start of `fit` and at the end of every epoch, and can
//! stop training early.
//!
//! # Example
//!
//! ```rust
//! use predictor::train::{Callback, CallbackAction, EpochLog, Predictor, Trainer};
//! use predictor::Result;
//!
//! struct StopBelow(f32);
//!
//! impl<P: Predictor> Callback<P> for StopBelow {
//!     fn on_epoch_end(
//!         &mut self,
//!         train: &EpochLog,
//!         _valid: Option<&EpochLog>,
//!         trainer: &Trainer<P>,
//!     ) -> Result<CallbackAction> {
//!         println!("epoch {} finished with loss {:.4}", trainer.epoch(), train.loss);
//!         Ok(if train.loss < self.0 { CallbackAction::Stop } else { CallbackAction::Continue })
//!     }
//!
//!     fn name(&self) -> &str {
//!         "StopBelow"
//!     }
//! }
//! ```

mod checkpoint;
mod early_stopping;
mod traits;

pub use checkpoint::CheckpointCallback;
pub use early_stopping::EarlyStopping;
pub use traits::{Callback, CallbackAction};
