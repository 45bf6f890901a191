//! Optimizer and learning-rate scheduler seams
//!
//! Update rules live in the deep-learning framework; the training loop only
//! decides when to zero gradients and when to step.

mod optimizer;
mod scheduler;

pub use optimizer::Optimizer;
pub use scheduler::{ConstantLR, LRScheduler};
