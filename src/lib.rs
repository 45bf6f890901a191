//! Supervised-learning training loop scaffold.
//!
//! `predictor` drives the parts of training that do not depend on the model:
//! - Epoch iteration with an optional validation pass
//! - Shuffled, batched data streams over random-access datasets
//! - Gradient accumulation (when to zero gradients, when to step)
//! - Metric tracking and per-epoch logs
//! - Checkpoint save/load and batched prediction
//!
//! Tensor math, autograd and optimizer algorithms belong to whatever framework
//! implements the [`model`] and [`optim`] traits. The forward pass belongs to a
//! [`train::Predictor`] implementation.
//!
//! # Example
//!
//! ```no_run
//! use predictor::optim::ConstantLR;
//! use predictor::train::{TrainConfig, Trainer};
//! # use predictor::train::Predictor;
//! # fn build<P: Predictor>(predictor: P, optimizer: Box<dyn predictor::optim::Optimizer>) -> predictor::Result<()> {
//!
//! predictor::seed(0);
//!
//! let config = TrainConfig::new().with_batch_size(32).with_max_epochs(5);
//! let mut trainer = Trainer::new(predictor, optimizer, Box::new(ConstantLR::new(2e-5)), config)?;
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod model;
pub mod optim;
pub mod seed;
pub mod train;

pub use error::{Error, Result};
pub use seed::seed;
