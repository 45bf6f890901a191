//! Training configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Compute device the predictor should place tensors on.
///
/// The trainer only carries the choice; placement is the framework's job.
/// Defaults to `Cpu`. CUDA is never detected automatically, so a GPU run
/// must ask for `cuda` or `cuda:N` explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Device {
    #[default]
    Cpu,
    /// CUDA device by ordinal
    Cuda(usize),
}

impl FromStr for Device {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "cpu" => Ok(Self::Cpu),
            "cuda" => Ok(Self::Cuda(0)),
            other => other
                .strip_prefix("cuda:")
                .and_then(|ordinal| ordinal.parse().ok())
                .map(Self::Cuda)
                .ok_or_else(|| {
                    Error::config_value(
                        "device",
                        format!("unknown device '{other}'"),
                        "Use 'cpu', 'cuda' or 'cuda:N'",
                    )
                }),
        }
    }
}

impl TryFrom<String> for Device {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Device> for String {
    fn from(device: Device) -> Self {
        device.to_string()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "cpu"),
            Self::Cuda(ordinal) => write!(f, "cuda:{ordinal}"),
        }
    }
}

/// Configuration for a [`Trainer`](super::Trainer)
///
/// # Example
///
/// ```
/// use predictor::train::{Device, TrainConfig};
///
/// let config = TrainConfig::new()
///     .with_batch_size(32)
///     .with_grad_accumulate_steps(4)
///     .with_device(Device::Cuda(0));
///
/// assert_eq!(config.batch_size, 32);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainConfig {
    /// Samples per batch
    pub batch_size: usize,
    /// Number of training epochs
    pub max_epochs: usize,
    /// Learning rate for the optimizer the predictor builds
    pub learning_rate: f32,
    /// Cap on training iterations per epoch (`None` = whole dataset)
    pub max_iters_in_epoch: Option<usize>,
    /// Batches whose gradients are summed before each optimizer step
    pub grad_accumulate_steps: usize,
    /// Target compute device
    pub device: Device,
    /// Show a progress bar while iterating
    pub progress: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            batch_size: 16,
            max_epochs: 3,
            learning_rate: 2e-5,
            max_iters_in_epoch: None,
            grad_accumulate_steps: 1,
            device: Device::Cpu,
            progress: true,
        }
    }
}

impl TrainConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    pub fn with_learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Cap training iterations per epoch
    pub fn with_max_iters_in_epoch(mut self, iters: usize) -> Self {
        self.max_iters_in_epoch = Some(iters);
        self
    }

    pub fn with_grad_accumulate_steps(mut self, steps: usize) -> Self {
        self.grad_accumulate_steps = steps;
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Number of training iterations to run for a loader of `num_batches`.
    pub fn iteration_cap(&self, num_batches: usize) -> usize {
        self.max_iters_in_epoch
            .map_or(num_batches, |cap| cap.min(num_batches))
    }

    /// Parse a YAML document; omitted fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParsing {
            path: "<string>".into(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("reading config {}", path.display()), e))?;
        let config: Self = serde_yaml::from_str(&yaml).map_err(|e| Error::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is usable by the training loop
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::config_value(
                "batch_size",
                "must be at least 1",
                "Use a value like 16",
            ));
        }
        if self.grad_accumulate_steps == 0 {
            return Err(Error::config_value(
                "grad_accumulate_steps",
                "must be at least 1",
                "Use 1 to step the optimizer after every batch",
            ));
        }
        if self.max_iters_in_epoch == Some(0) {
            return Err(Error::config_value(
                "max_iters_in_epoch",
                "must be at least 1 when set",
                "Remove the field to train on the whole dataset",
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::config_value(
                "learning_rate",
                format!("{} is not a positive finite number", self.learning_rate),
                "Use a value like 2e-5",
            ));
        }
        Ok(())
    }
}
