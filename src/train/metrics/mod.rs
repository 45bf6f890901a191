//! Metric trackers updated batch by batch during an epoch
//!
//! - `Metric` - the tracker interface the trainer drives
//! - `F1Tracker` - multi-class F1 over class-index predictions

mod classification;
mod trait_def;


pub use classification::{Average, F1Tracker};
pub use trait_def::{CategoryScore, Metric};
