//! High-level training loop
//!
//! This module provides the model-independent half of supervised training:
//! - Trainer abstraction driving a [`Predictor`]
//! - Gradient accumulation
//! - Training configuration (YAML loadable)
//! - Metric trackers (F1, per-category F1)
//! - Callbacks (checkpointing, early stopping)
//! - Checkpoint support
//!
//! # Example
//!
//! ```no_run
//! use predictor::optim::{ConstantLR, Optimizer};
//! use predictor::train::{Predictor, TrainConfig, Trainer};
//! # fn run<P: Predictor>(predictor: P, optimizer: Box<dyn Optimizer>, data: Vec<u8>,
//! #     collate: fn(Vec<u8>) -> P::Batch) -> predictor::Result<()> {
//!
//! let config = TrainConfig::from_yaml_file("train.yaml")?;
//! let lr = config.learning_rate;
//! let mut trainer = Trainer::new(predictor, optimizer, Box::new(ConstantLR::new(lr)), config)?;
//!
//! predictor::seed(42);
//! let result = trainer.fit(&data, None, collate, collate, &mut [])?;
//! for record in &result.epochs {
//!     println!("epoch {}: loss={:.4}", record.epoch, record.train.loss);
//! }
//! let outputs = trainer.predict(&data, collate)?;
//! # let _ = outputs;
//! # Ok(())
//! # }
//! ```

mod accumulate;
mod callback;
mod config;
mod metrics;
mod predictor;
mod trainer;

#[cfg(test)]
mod testing;

pub use accumulate::Accumulation;
pub use callback::{Callback, CallbackAction, CheckpointCallback, EarlyStopping};
pub use config::{Device, TrainConfig};
pub use metrics::{Average, CategoryScore, F1Tracker, Metric};
pub use predictor::{Iteration, Predictor};
pub use trainer::{Checkpoint, EpochLog, EpochRecord, FitResult, Trainer};
