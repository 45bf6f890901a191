//! Core Metric trait definition

use std::fmt;

/// Trait for metric trackers
///
/// The trainer resets every tracker at the start of an epoch, feeds it each
/// batch's output and label, shows `print_score` on the progress bar and logs
/// `f1` and `category_f1` when the epoch ends.
pub trait Metric<O, L> {
    /// Name used as the key in epoch logs
    fn name(&self) -> &str;

    /// Clear accumulated state
    fn reset(&mut self);

    /// Accumulate one batch
    fn update(&mut self, output: &O, label: &L);

    /// Short running score for progress display
    fn print_score(&self) -> String;

    /// Overall F1 over everything accumulated since the last reset
    fn f1(&self) -> f32;

    /// F1 broken down by category
    fn category_f1(&self) -> Vec<CategoryScore>;
}

/// F1 of a single category
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryScore {
    pub category: String,
    pub f1: f32,
}

impl CategoryScore {
    pub fn new(category: impl Into<String>, f1: f32) -> Self {
        Self {
            category: category.into(),
            f1,
        }
    }
}

impl fmt::Display for CategoryScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.4}", self.category, self.f1)
    }
}
