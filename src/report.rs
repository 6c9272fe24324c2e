/// Outcome of a single `train` call.
///
/// Reaching `max_epochs` above the target is a normal outcome, not an error;
/// use [`TrainReport::converged`] to tell the two apart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Completed epochs; always equals `error_history.len()`.
    pub epochs_trained: usize,
    /// Epoch MSE values in order.
    pub error_history: Vec<f64>,
    pub target_error: f64,
    /// True if an epoch callback stopped the run.
    pub cancelled: bool,
}

impl TrainReport {
    /// MSE of the last completed epoch.
    #[inline]
    pub fn final_error(&self) -> Option<f64> {
        self.error_history.last().copied()
    }

    /// Whether the last epoch reached the target error.
    pub fn converged(&self) -> bool {
        self.final_error().is_some_and(|e| e <= self.target_error)
    }

    /// Smallest epoch MSE seen during the run.
    pub fn best_error(&self) -> Option<f64> {
        self.error_history.iter().copied().reduce(f64::min)
    }
}
