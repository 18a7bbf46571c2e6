/// The single record that distinguishes a neighbour from its dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change<T> {
    /// The record was removed from the dataset.
    Removed(T),

    /// The record was added to the dataset.
    Added(T),
}

impl<T: Copy> Change<T> {
    /// Returns the record that was removed or added.
    #[must_use]
    pub fn value(&self) -> T {
        match self {
            Self::Removed(value) | Self::Added(value) => *value,
        }
    }
}

/// A neighbouring dataset together with the change that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbour<T> {
    values: Vec<T>,
    change: Change<T>,
}

impl<T> Neighbour<T> {
    pub(super) fn new(values: Vec<T>, change: Change<T>) -> Self {
        Self { values, change }
    }

    /// Returns the neighbouring records.
    ///
    /// Records keep the shuffled order they were generated in.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the change that produced this neighbour.
    #[must_use]
    pub fn change(&self) -> &Change<T> {
        &self.change
    }

    /// Returns the number of records in the neighbour.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the neighbour has no records.
    ///
    /// This happens when a single-record dataset loses its record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the neighbour and returns its records.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}
