//! Epoch-level training and evaluation

use super::core::Trainer;
use super::log::EpochLog;
use crate::data::{DataLoader, Dataset};
use crate::model::{Loss, Model};
use crate::train::{Iteration, Predictor};
use crate::Result;

impl<P: Predictor> Trainer<P> {
    /// Run one pass over `loader`.
    ///
    /// Training passes stop after `config.iteration_cap(loader.len())` batches
    /// and update parameters; evaluation passes cover every batch with gradient
    /// tracking disabled. Gradient tracking is re-enabled even when a batch fails.
    pub(crate) fn run_epoch<D, F>(
        &mut self,
        loader: &DataLoader<'_, D, F>,
        training: bool,
    ) -> Result<EpochLog>
    where
        D: Dataset + ?Sized,
        F: Fn(Vec<D::Item>) -> P::Batch,
    {
        self.predictor.model_mut().set_train_mode(training);
        if training {
            return self.run_batches(loader, true);
        }

        self.predictor.model_mut().set_grad_enabled(false);
        let result = self.run_batches(loader, false);
        self.predictor.model_mut().set_grad_enabled(true);
        result
    }

    fn run_batches<D, F>(&mut self, loader: &DataLoader<'_, D, F>, training: bool) -> Result<EpochLog>
    where
        D: Dataset + ?Sized,
        F: Fn(Vec<D::Item>) -> P::Batch,
    {
        for metric in &mut self.metrics {
            metric.reset();
        }

        let phase = if training { "training" } else { "evaluating" };
        let iterations = if training {
            self.config.iteration_cap(loader.len())
        } else {
            loader.len()
        };
        tracing::info!(epoch = self.epoch, phase, iterations, "epoch started");

        let bar = self.progress_bar(iterations, phase);
        let mut total_loss = 0.0f64;
        let mut processed = 0usize;

        for (i, batch) in loader.iter().take(iterations).enumerate() {
            let Iteration {
                output,
                label,
                loss,
            } = self.predictor.run_iteration(batch, training)?;

            // Training passes report the loss as scaled for accumulation
            if training {
                let loss = loss.scale(self.accumulation.loss_scale());
                total_loss += f64::from(loss.item());
                self.backward_step(i, loss)?;
            } else {
                total_loss += f64::from(loss.item());
            }

            for metric in &mut self.metrics {
                metric.update(&output, &label);
            }
            processed += 1;

            bar.set_message(self.running_summary(total_loss / processed as f64));
            bar.inc(1);
        }
        bar.finish();

        let loss = if processed == 0 {
            tracing::warn!(epoch = self.epoch, phase, "no batches in epoch, reporting loss 0");
            0.0
        } else {
            (total_loss / processed as f64) as f32
        };

        let mut log = EpochLog::new(loss, processed);
        for metric in &self.metrics {
            let f1 = metric.f1();
            tracing::info!(epoch = self.epoch, phase, metric = metric.name(), f1, "score");
            for score in metric.category_f1() {
                tracing::info!(
                    metric = metric.name(),
                    category = %score.category,
                    f1 = score.f1,
                    "category f1"
                );
            }
            log.scores.insert(metric.name().to_string(), f1);
        }
        tracing::info!(epoch = self.epoch, phase, loss, iterations = processed, "epoch finished");

        Ok(log)
    }

    /// Backpropagate one already-scaled batch loss under the accumulation policy.
    fn backward_step(&mut self, i: usize, loss: P::Loss) -> Result<()> {
        if self.accumulation.zeros_before(i) {
            self.optimizer.zero_grad();
        }
        loss.backward()?;

        if self.accumulation.steps_after(i) {
            self.optimizer.step()?;
            self.scheduler.step();
            self.optimizer.set_lr(self.scheduler.get_lr());
        }
        Ok(())
    }
}
