//! Batched iteration over a dataset

use super::Dataset;
use crate::seed;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Sample order used each time a loader is iterated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shuffle {
    /// Dataset order
    #[default]
    Off,
    /// Permutation drawn from the process-wide RNG (see [`crate::seed()`])
    Global,
    /// Permutation drawn from a dedicated RNG with this seed
    Seeded(u64),
}

/// Splits a dataset into batches and collates each one.
///
/// The final batch holds the remainder and may be smaller than `batch_size`.
///
/// # Example
///
/// ```
/// use predictor::data::{DataLoader, Shuffle};
///
/// let samples = vec![1.0f32, 2.0, 3.0, 4.0, 5.0];
/// let loader = DataLoader::new(&samples, 2, |items: Vec<f32>| items).shuffle(Shuffle::Off);
///
/// assert_eq!(loader.len(), 3);
/// let batches: Vec<Vec<f32>> = loader.iter().collect();
/// assert_eq!(batches[2], vec![5.0]);
/// ```
pub struct DataLoader<'a, D: ?Sized, F> {
    dataset: &'a D,
    batch_size: usize,
    shuffle: Shuffle,
    collate: F,
}

impl<'a, D, F, B> DataLoader<'a, D, F>
where
    D: Dataset + ?Sized,
    F: Fn(Vec<D::Item>) -> B,
{
    /// Create a loader; a `batch_size` of 0 is treated as 1.
    pub fn new(dataset: &'a D, batch_size: usize, collate: F) -> Self {
        Self {
            dataset,
            batch_size: batch_size.max(1),
            shuffle: Shuffle::Off,
            collate,
        }
    }

    /// Set the sample order
    pub fn shuffle(mut self, shuffle: Shuffle) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Number of batches per pass
    pub fn len(&self) -> usize {
        self.dataset.len().div_ceil(self.batch_size)
    }

    /// Whether a pass yields no batches
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Start a pass over the dataset.
    ///
    /// A shuffled loader draws a fresh permutation on every call.
    pub fn iter(&self) -> Batches<'_, D, F> {
        let mut order: Vec<usize> = (0..self.dataset.len()).collect();
        match self.shuffle {
            Shuffle::Off => {}
            Shuffle::Global => seed::with_rng(|rng| order.shuffle(rng)),
            Shuffle::Seeded(s) => order.shuffle(&mut StdRng::seed_from_u64(s)),
        }

        Batches {
            dataset: self.dataset,
            collate: &self.collate,
            batch_size: self.batch_size,
            order,
            cursor: 0,
        }
    }
}

/// One pass of a [`DataLoader`]
pub struct Batches<'l, D: ?Sized, F> {
    dataset: &'l D,
    collate: &'l F,
    batch_size: usize,
    order: Vec<usize>,
    cursor: usize,
}

impl<D: ?Sized, F> Batches<'_, D, F> {
    fn remaining(&self) -> usize {
        (self.order.len() - self.cursor).div_ceil(self.batch_size)
    }
}

impl<D, F, B> Iterator for Batches<'_, D, F>
where
    D: Dataset + ?Sized,
    F: Fn(Vec<D::Item>) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if self.cursor >= self.order.len() {
            return None;
        }

        let end = (self.cursor + self.batch_size).min(self.order.len());
        // Indices the dataset no longer serves are skipped
        let items: Vec<D::Item> = self.order[self.cursor..end]
            .iter()
            .filter_map(|&index| self.dataset.get(index))
            .collect();
        self.cursor = end;

        Some((self.collate)(items))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<D, F, B> ExactSizeIterator for Batches<'_, D, F>
where
    D: Dataset + ?Sized,
    F: Fn(Vec<D::Item>) -> B,
{
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every sample appears exactly once per pass, whatever the order
        #[test]
        fn pass_is_a_permutation(
            len in 0usize..200,
            batch_size in 1usize..17,
            seed in any::<u64>(),
        ) {
            let data: Vec<usize> = (0..len).collect();
            let loader = DataLoader::new(&data, batch_size, |items: Vec<usize>| items)
                .shuffle(Shuffle::Seeded(seed));

            let batches: Vec<Vec<usize>> = loader.iter().collect();
            prop_assert_eq!(batches.len(), loader.len());
            prop_assert!(batches.iter().all(|b| b.len() <= batch_size));

            let mut seen: Vec<usize> = batches.into_iter().flatten().collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, data);
        }
    }
}
