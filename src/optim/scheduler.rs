//! Learning rate scheduler trait

/// Learning rate scheduler trait
///
/// Stepped together with the optimizer at the end of every accumulation
/// window; the trainer then applies [`LRScheduler::get_lr`] to the optimizer.
pub trait LRScheduler {
    /// Get the current learning rate
    fn get_lr(&self) -> f32;

    /// Step the scheduler
    fn step(&mut self);
}

/// Keeps the learning rate fixed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantLR {
    lr: f32,
}

impl ConstantLR {
    pub fn new(lr: f32) -> Self {
        Self { lr }
    }
}

impl LRScheduler for ConstantLR {
    fn get_lr(&self) -> f32 {
        self.lr
    }

    fn step(&mut self) {}
}
