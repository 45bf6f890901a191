//! Core Trainer struct and basic methods

use crate::optim::{LRScheduler, Optimizer};
use crate::train::{Accumulation, Device, Metric, Predictor, TrainConfig};
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Drives a [`Predictor`] through epochs, prediction and checkpoints.
///
/// The trainer owns the optimizer, the scheduler, the metric trackers and the
/// epoch counter; the predictor owns the model and the forward pass.
pub struct Trainer<P: Predictor> {
    /// Model hooks
    pub(crate) predictor: P,

    /// Optimizer
    pub(crate) optimizer: Box<dyn Optimizer>,

    /// Learning rate scheduler, stepped with the optimizer
    pub(crate) scheduler: Box<dyn LRScheduler>,

    /// Metric trackers, in registration order
    pub(crate) metrics: Vec<Box<dyn Metric<P::Output, P::Label>>>,

    /// Training configuration
    pub(crate) config: TrainConfig,

    /// Zero/step policy derived from `config.grad_accumulate_steps`
    pub(crate) accumulation: Accumulation,

    /// Completed training epochs
    pub(crate) epoch: usize,
}

impl<P: Predictor> Trainer<P> {
    /// Create a new trainer after validating `config`.
    pub fn new(
        predictor: P,
        optimizer: Box<dyn Optimizer>,
        scheduler: Box<dyn LRScheduler>,
        config: TrainConfig,
    ) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            batch_size = config.batch_size,
            max_epochs = config.max_epochs,
            grad_accumulate_steps = config.grad_accumulate_steps,
            device = %config.device,
            "trainer created"
        );
        Ok(Self {
            predictor,
            optimizer,
            scheduler,
            metrics: Vec::new(),
            accumulation: Accumulation::new(config.grad_accumulate_steps),
            config,
            epoch: 0,
        })
    }

    /// Register a metric tracker (builder form)
    pub fn with_metric<M>(mut self, metric: M) -> Self
    where
        M: Metric<P::Output, P::Label> + 'static,
    {
        self.add_metric(metric);
        self
    }

    /// Register a metric tracker
    pub fn add_metric<M>(&mut self, metric: M)
    where
        M: Metric<P::Output, P::Label> + 'static,
    {
        self.metrics.push(Box::new(metric));
    }

    /// Completed training epochs (the next epoch to run)
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Device the predictor is expected to run on
    pub fn device(&self) -> Device {
        self.config.device
    }

    /// Current optimizer learning rate
    pub fn lr(&self) -> f32 {
        self.optimizer.lr()
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub fn predictor_mut(&mut self) -> &mut P {
        &mut self.predictor
    }

    /// Registered metric trackers
    pub fn metrics(&self) -> &[Box<dyn Metric<P::Output, P::Label>>] {
        &self.metrics
    }

    /// Give back the predictor, dropping optimizer and scheduler
    pub fn into_predictor(self) -> P {
        self.predictor
    }

    pub(crate) fn progress_bar(&self, len: usize, description: &'static str) -> ProgressBar {
        if !self.config.progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:>10} [{bar:30.cyan/blue}] {pos}/{len} {elapsed_precise} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_prefix(description);
        bar
    }

    /// Running `name=score` pairs shown next to the progress bar
    pub(crate) fn running_summary(&self, avg_loss: f64) -> String {
        let mut summary = format!("loss={avg_loss:.4}");
        for metric in &self.metrics {
            summary.push_str(&format!(" {}={}", metric.name(), metric.print_score()));
        }
        summary
    }
}
