//! Recording stand-ins for the framework seams, shared by unit tests

use crate::model::{Loss, Model};
use crate::optim::{LRScheduler, Optimizer};
use crate::train::{Iteration, Predictor, TrainConfig, Trainer};
use crate::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Framework call observed by the stubs
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Event {
    Forward { training: bool },
    Predict,
    ZeroGrad,
    Backward { scaled: f32 },
    Step,
    SchedulerStep,
    TrainMode(bool),
    GradEnabled(bool),
}

pub(crate) type EventLog = Rc<RefCell<Vec<Event>>>;

pub(crate) fn events() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub(crate) fn count(log: &EventLog, pred: impl Fn(&Event) -> bool) -> usize {
    log.borrow().iter().filter(|e| pred(e)).count()
}

/// `(feature, label)`; the stub classifies a sample as its feature
pub(crate) type Sample = (usize, usize);

pub(crate) fn collate(items: Vec<Sample>) -> Vec<Sample> {
    items
}

pub(crate) struct StubModel {
    pub weights: Vec<f32>,
    log: EventLog,
}

impl Model for StubModel {
    type State = Vec<f32>;

    fn set_train_mode(&mut self, training: bool) {
        self.log.borrow_mut().push(Event::TrainMode(training));
    }

    fn set_grad_enabled(&mut self, enabled: bool) {
        self.log.borrow_mut().push(Event::GradEnabled(enabled));
    }

    fn state_dict(&self) -> Vec<f32> {
        self.weights.clone()
    }

    fn load_state_dict(&mut self, state: Vec<f32>) -> Result<()> {
        if state.len() != self.weights.len() {
            return Err(Error::framework(format!(
                "expected {} weights, got {}",
                self.weights.len(),
                state.len()
            )));
        }
        self.weights = state;
        Ok(())
    }
}

pub(crate) struct StubLoss {
    value: f32,
    log: EventLog,
}

impl Loss for StubLoss {
    fn item(&self) -> f32 {
        self.value
    }

    fn scale(self, factor: f32) -> Self {
        Self {
            value: self.value * factor,
            log: self.log,
        }
    }

    fn backward(self) -> Result<()> {
        self.log
            .borrow_mut()
            .push(Event::Backward { scaled: self.value });
        Ok(())
    }
}

/// Loss of a batch is the sum of its features
pub(crate) struct StubPredictor {
    pub model: StubModel,
    /// Forward call (0-based) that fails
    pub fail_at: Option<usize>,
    forwards: usize,
    log: EventLog,
}

impl Predictor for StubPredictor {
    type Model = StubModel;
    type Batch = Vec<Sample>;
    type Output = Vec<usize>;
    type Label = Vec<usize>;
    type Loss = StubLoss;

    fn model(&self) -> &StubModel {
        &self.model
    }

    fn model_mut(&mut self) -> &mut StubModel {
        &mut self.model
    }

    fn run_iteration(
        &mut self,
        batch: Vec<Sample>,
        training: bool,
    ) -> Result<Iteration<Vec<usize>, Vec<usize>, StubLoss>> {
        self.log.borrow_mut().push(Event::Forward { training });
        let call = self.forwards;
        self.forwards += 1;
        if self.fail_at == Some(call) {
            return Err(Error::framework("shape mismatch"));
        }

        let (output, label): (Vec<usize>, Vec<usize>) = batch.into_iter().unzip();
        let loss = StubLoss {
            value: output.iter().sum::<usize>() as f32,
            log: Rc::clone(&self.log),
        };
        Ok(Iteration::new(output, label, loss))
    }

    fn predict_batch(&mut self, batch: Vec<Sample>) -> Result<Vec<usize>> {
        self.log.borrow_mut().push(Event::Predict);
        Ok(batch.into_iter().map(|(feature, _)| feature).collect())
    }
}

pub(crate) struct StubOptimizer {
    lr: f32,
    log: EventLog,
}

impl Optimizer for StubOptimizer {
    fn zero_grad(&mut self) {
        self.log.borrow_mut().push(Event::ZeroGrad);
    }

    fn step(&mut self) -> Result<()> {
        self.log.borrow_mut().push(Event::Step);
        Ok(())
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}

/// Halves the learning rate on every step
pub(crate) struct StubScheduler {
    lr: f32,
    log: EventLog,
}

impl LRScheduler for StubScheduler {
    fn get_lr(&self) -> f32 {
        self.lr
    }

    fn step(&mut self) {
        self.lr *= 0.5;
        self.log.borrow_mut().push(Event::SchedulerStep);
    }
}

pub(crate) fn try_trainer(config: TrainConfig, log: &EventLog) -> Result<Trainer<StubPredictor>> {
    let predictor = StubPredictor {
        model: StubModel {
            weights: vec![0.25, -1.5, 3.0],
            log: Rc::clone(log),
        },
        fail_at: None,
        forwards: 0,
        log: Rc::clone(log),
    };
    let optimizer = StubOptimizer {
        lr: 0.1,
        log: Rc::clone(log),
    };
    let scheduler = StubScheduler {
        lr: 0.1,
        log: Rc::clone(log),
    };
    Trainer::new(predictor, Box::new(optimizer), Box::new(scheduler), config)
}

/// Trainer over the stubs with the progress bar hidden
pub(crate) fn stub_trainer(config: TrainConfig) -> (Trainer<StubPredictor>, EventLog) {
    let log = events();
    let trainer = try_trainer(config.with_progress(false), &log).expect("valid config");
    (trainer, log)
}

/// Samples `(i % classes, i % classes)` for `i in 0..n`
pub(crate) fn samples(n: usize, classes: usize) -> Vec<Sample> {
    (0..n).map(|i| (i % classes, i % classes)).collect()
}
