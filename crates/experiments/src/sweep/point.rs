/// Summary of the releases made at one epsilon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The privacy budget.
    pub epsilon: f64,

    /// Laplace scale used at this epsilon.
    pub scale: f64,

    /// Mean of `|M(D) - q(D)|`: how far releases land from the true answer.
    pub mean_abs_error: f64,

    /// Mean of `|M(D) - M(D')|`: how far apart releases on a dataset and
    /// its neighbour land.
    pub mean_release_gap: f64,
}
