use dplab_core::Bounds;

/// Event emitted once per generated neighbour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<T> {
    /// A record was removed.
    Subtracting {
        /// The removed record.
        value: T,
    },

    /// A record was added.
    Adding {
        /// The added record.
        value: T,

        /// Bounds of the original dataset that the record was drawn from.
        bounds: Bounds<T>,
    },
}

impl<T: Copy> Event<T> {
    /// Returns the removed or added record.
    #[must_use]
    pub fn value(&self) -> T {
        match self {
            Self::Subtracting { value } | Self::Adding { value, .. } => *value,
        }
    }

    /// Returns the human-readable description of the branch taken.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Subtracting { .. } => "Subtracting value",
            Self::Adding { .. } => "Adding value",
        }
    }
}
