//! Random-access dataset trait

/// A random-access collection of samples.
pub trait Dataset {
    /// Sample type handed to the collation function
    type Item;

    /// Get the sample at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Number of samples
    fn len(&self) -> usize;

    /// Whether the dataset holds no samples
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Dataset for [T] {
    type Item = T;

    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Clone> Dataset for Vec<T> {
    type Item = T;

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }
}
