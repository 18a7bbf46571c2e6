//! Console output for experiment events.

use std::io::{self, Stdout, Write};

use dplab_core::Observer;

use crate::traits::HasMessage;

/// An observer that writes one line per event to a writer.
///
/// This is the verbose mode of the notebook helpers: with
/// [`ConsoleObserver::stdout`], neighbour generation prints
/// `Subtracting value` or `Adding value`.
///
/// Write failures are reported through `tracing` and never interrupt the
/// experiment.
///
/// # Example
///
/// ```
/// use dplab_core::Observer;
/// use dplab_experiments::neighbour::Event;
/// use dplab_observers::ConsoleObserver;
///
/// let mut console = ConsoleObserver::new(Vec::<u8>::new());
/// let action: Option<std::convert::Infallible> =
///     console.observe(&Event::Subtracting { value: 3 });
/// assert!(action.is_none());
/// assert_eq!(console.into_inner(), b"Subtracting value\n");
/// ```
#[derive(Debug)]
pub struct ConsoleObserver<W> {
    writer: W,
}

impl ConsoleObserver<Stdout> {
    /// Creates an observer that writes to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    /// Creates an observer that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the observer and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<E, A, W> Observer<E, A> for ConsoleObserver<W>
where
    E: HasMessage,
    W: Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Err(err) = writeln!(self.writer, "{}", event.message()) {
            tracing::warn!(%err, "failed to write event to console");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use dplab_experiments::neighbour::{self, Branch};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn prints_the_branch_taken() {
        let dataset = [1, 2, 3];

        for (branch, expected) in [
            (Branch::Subtract, "Subtracting value\n"),
            (Branch::Add, "Adding value\n"),
        ] {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            let mut buffer: Vec<u8> = Vec::new();

            neighbour::generate_branch(
                &dataset,
                branch,
                &mut rng,
                ConsoleObserver::new(&mut buffer),
            )
            .unwrap();

            assert_eq!(String::from_utf8(buffer).unwrap(), expected);
        }
    }

    #[test]
    fn writes_one_line_per_event() {
        let mut console = ConsoleObserver::new(Vec::<u8>::new());

        for value in [1.0, 2.0] {
            let event = neighbour::Event::Subtracting { value };
            let _: Option<Infallible> = console.observe(&event);
        }

        assert_eq!(console.into_inner(), b"Subtracting value\nSubtracting value\n");
    }
}
