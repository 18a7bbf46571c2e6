use super::Point;

/// Event emitted by a sweep after each epsilon is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// One epsilon finished.
    Evaluated {
        /// Zero-based position of the epsilon in the range.
        index: usize,

        /// The summary for this epsilon.
        point: Point,
    },
}

impl Event {
    /// Returns the summary carried by the event.
    #[must_use]
    pub fn point(&self) -> Point {
        match self {
            Self::Evaluated { point, .. } => *point,
        }
    }

    /// Returns a one-line description of the event.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Evaluated { point, .. } => format!(
                "epsilon {:.4}: mean abs error {:.4}, mean release gap {:.4}",
                point.epsilon, point.mean_abs_error, point.mean_release_gap
            ),
        }
    }
}
