/// Receives experiment events and decides how the experiment should proceed.
///
/// Observers let callers monitor or steer an experiment without changing its
/// API, enabling verbose output, logging, early stopping, or custom policies.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests an
/// experiment-specific action and `None` lets the experiment continue unchanged.
/// Experiments that accept no actions use [`Infallible`] as `A`.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
///
/// [`Infallible`]: std::convert::Infallible
pub trait Observer<E, A> {
    /// Observes an experiment event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
