/// Actions an observer can take during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the sweep and return the points evaluated so far.
    StopEarly,
}
