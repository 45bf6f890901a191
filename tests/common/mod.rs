//! Two-feature logistic regression with hand-written gradients, used to
//! drive the trainer end to end.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use predictor::model::{Loss, Model};
use predictor::optim::Optimizer;
use predictor::train::{Iteration, Predictor};
use predictor::{Error, Result};
use serde::{Deserialize, Serialize};

pub type Sample = ([f32; 2], usize);
pub type Batch = Vec<Sample>;

pub fn collate(items: Vec<Sample>) -> Batch {
    items
}

/// Grid points in `[-0.8, 0.8]^2`, labelled by the side of `x0 + x1 = 0`.
///
/// Points on the boundary are left out, leaving 72 samples.
pub fn grid() -> Vec<Sample> {
    let mut data = Vec::new();
    for i in -4i32..=4 {
        for j in -4i32..=4 {
            if i + j == 0 {
                continue;
            }
            let x = [i as f32 / 5.0, j as f32 / 5.0];
            data.push((x, usize::from(i + j > 0)));
        }
    }
    data
}

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub w: [f32; 2],
    pub b: f32,
    pub grad_w: [f32; 2],
    pub grad_b: f32,
    pub training: bool,
    pub grad_enabled: bool,
}

pub type Shared = Rc<RefCell<Params>>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearState {
    pub w: [f32; 2],
    pub b: f32,
}

pub struct Linear(pub Shared);

impl Linear {
    fn logit(&self, x: &[f32; 2]) -> f32 {
        let p = self.0.borrow();
        p.w[0] * x[0] + p.w[1] * x[1] + p.b
    }
}

impl Model for Linear {
    type State = LinearState;

    fn set_train_mode(&mut self, training: bool) {
        self.0.borrow_mut().training = training;
    }

    fn set_grad_enabled(&mut self, enabled: bool) {
        self.0.borrow_mut().grad_enabled = enabled;
    }

    fn state_dict(&self) -> LinearState {
        let p = self.0.borrow();
        LinearState { w: p.w, b: p.b }
    }

    fn load_state_dict(&mut self, state: LinearState) -> Result<()> {
        let mut p = self.0.borrow_mut();
        p.w = state.w;
        p.b = state.b;
        Ok(())
    }
}

/// Binary cross-entropy with its gradient precomputed at forward time
pub struct Bce {
    value: f32,
    grad_w: [f32; 2],
    grad_b: f32,
    factor: f32,
    params: Shared,
}

impl Loss for Bce {
    fn item(&self) -> f32 {
        self.value
    }

    fn scale(mut self, factor: f32) -> Self {
        self.factor *= factor;
        self
    }

    fn backward(self) -> Result<()> {
        let mut p = self.params.borrow_mut();
        if !p.grad_enabled {
            return Err(Error::framework("backward with gradient tracking disabled"));
        }
        p.grad_w[0] += self.factor * self.grad_w[0];
        p.grad_w[1] += self.factor * self.grad_w[1];
        p.grad_b += self.factor * self.grad_b;
        Ok(())
    }
}

pub struct Classifier {
    pub model: Linear,
}

impl Classifier {
    pub fn new(params: &Shared) -> Self {
        params.borrow_mut().grad_enabled = true;
        Self {
            model: Linear(Rc::clone(params)),
        }
    }
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

impl Predictor for Classifier {
    type Model = Linear;
    type Batch = Batch;
    type Output = Vec<usize>;
    type Label = Vec<usize>;
    type Loss = Bce;

    fn model(&self) -> &Linear {
        &self.model
    }

    fn model_mut(&mut self) -> &mut Linear {
        &mut self.model
    }

    fn run_iteration(
        &mut self,
        batch: Batch,
        _training: bool,
    ) -> Result<Iteration<Vec<usize>, Vec<usize>, Bce>> {
        let n = batch.len() as f32;
        let mut value = 0.0;
        let mut grad_w = [0.0; 2];
        let mut grad_b = 0.0;
        let mut output = Vec::with_capacity(batch.len());
        let mut label = Vec::with_capacity(batch.len());

        for (x, y) in &batch {
            let p = sigmoid(self.model.logit(x)).clamp(1e-7, 1.0 - 1e-7);
            let target = *y as f32;
            value -= (target * p.ln() + (1.0 - target) * (1.0 - p).ln()) / n;

            let dz = (p - target) / n;
            grad_w[0] += dz * x[0];
            grad_w[1] += dz * x[1];
            grad_b += dz;

            output.push(usize::from(p > 0.5));
            label.push(*y);
        }

        let loss = Bce {
            value,
            grad_w,
            grad_b,
            factor: 1.0,
            params: Rc::clone(&self.model.0),
        };
        Ok(Iteration::new(output, label, loss))
    }

    fn predict_batch(&mut self, batch: Batch) -> Result<Vec<usize>> {
        Ok(batch
            .iter()
            .map(|(x, _)| usize::from(self.model.logit(x) > 0.0))
            .collect())
    }
}

pub struct Sgd {
    params: Shared,
    lr: f32,
}

impl Sgd {
    pub fn new(params: &Shared, lr: f32) -> Self {
        Self {
            params: Rc::clone(params),
            lr,
        }
    }
}

impl Optimizer for Sgd {
    fn zero_grad(&mut self) {
        let mut p = self.params.borrow_mut();
        p.grad_w = [0.0; 2];
        p.grad_b = 0.0;
    }

    fn step(&mut self) -> Result<()> {
        let mut p = self.params.borrow_mut();
        let (gw, gb) = (p.grad_w, p.grad_b);
        p.w[0] -= self.lr * gw[0];
        p.w[1] -= self.lr * gw[1];
        p.b -= self.lr * gb;
        Ok(())
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}
