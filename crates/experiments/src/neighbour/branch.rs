use rand::Rng;

/// The mutation that turns a dataset into its neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Remove one record.
    Subtract,

    /// Add one record.
    Add,
}

impl Branch {
    /// Chooses a branch from one unbiased random bit.
    ///
    /// A set bit selects [`Branch::Subtract`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random::<bool>() {
            Self::Subtract
        } else {
            Self::Add
        }
    }
}
