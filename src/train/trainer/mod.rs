//! Trainer orchestrating the training loop
//!
//! This module provides a `Trainer` that drives a [`Predictor`](super::Predictor):
//! - Multi-epoch fitting with optional validation and callbacks
//! - Gradient accumulation
//! - Batched prediction
//! - Checkpoint save/load
//!
//! # Example
//!
//! ```no_run
//! use predictor::optim::ConstantLR;
//! use predictor::train::{EarlyStopping, F1Tracker, Predictor, TrainConfig, Trainer};
//! # fn run<P, S: Clone>(predictor: P, optimizer: Box<dyn predictor::optim::Optimizer>,
//! #     train: Vec<S>, valid: Vec<S>, collate: fn(Vec<S>) -> P::Batch) -> predictor::Result<()>
//! # where P: Predictor<Output = Vec<usize>, Label = Vec<usize>> {
//!
//! let config = TrainConfig::new().with_max_epochs(10).with_grad_accumulate_steps(4);
//! let mut trainer = Trainer::new(predictor, optimizer, Box::new(ConstantLR::new(2e-5)), config)?
//!     .with_metric(F1Tracker::new("f1", ["neg", "pos"]));
//!
//! let mut stopper = EarlyStopping::new(3, 1e-4);
//! let result = trainer.fit(&train, Some(&valid), collate, collate, &mut [&mut stopper])?;
//! println!("trained {} epochs", result.final_epoch);
//! trainer.save("checkpoints/last.json")?;
//! # Ok(())
//! # }
//! ```

mod checkpoint;
mod core;
mod epoch;
mod log;
mod predict;
mod result;
mod train_loop;

pub use checkpoint::Checkpoint;
pub use self::core::Trainer;
pub use log::EpochLog;
pub use result::{EpochRecord, FitResult};
