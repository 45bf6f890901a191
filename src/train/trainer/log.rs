//! Per-epoch summary produced by the training and evaluation passes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Averages over one pass of a data stream
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EpochLog {
    /// Mean batch loss over the batches processed
    pub loss: f32,
    /// Batches processed (after the iteration cap)
    pub iterations: usize,
    /// Overall F1 per metric name
    pub scores: BTreeMap<String, f32>,
}

impl EpochLog {
    pub fn new(loss: f32, iterations: usize) -> Self {
        Self {
            loss,
            iterations,
            scores: BTreeMap::new(),
        }
    }

    /// Score recorded for metric `name`
    pub fn score(&self, name: &str) -> Option<f32> {
        self.scores.get(name).copied()
    }
}
