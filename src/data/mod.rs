//! Datasets and batched data streams
//!
//! - `Dataset` - random-access sample source
//! - `DataLoader` - batches a dataset through a collation function, optionally
//!   shuffling the sample order each time it is iterated

mod dataset;
mod loader;

pub use dataset::Dataset;
pub use loader::{Batches, DataLoader, Shuffle};
