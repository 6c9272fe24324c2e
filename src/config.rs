//! Training hyperparameters.

use crate::{Error, Result};

/// Hyperparameters for a training run.
///
/// The defaults match the classic classroom setup: a small learning rate, a
/// target MSE of `0.01`, and a generous epoch cap so that realizable mappings
/// always get the chance to converge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    /// Step size of the delta rule, expected in `(0, 1]`.
    pub learning_rate: f64,
    /// Training stops once an epoch's MSE is `<= target_error`. Expected in `(0, 1]`.
    pub target_error: f64,
    /// Hard cap on the number of epochs of a single `train` call.
    pub max_epochs: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            target_error: 0.01,
            max_epochs: 100_000,
        }
    }
}

impl TrainConfig {
    pub fn new(learning_rate: f64, target_error: f64) -> Self {
        Self {
            learning_rate,
            target_error,
            ..Self::default()
        }
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    /// Validate hyperparameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0 && self.learning_rate <= 1.0)
        {
            return Err(Error::InvalidHyperparameter(format!(
                "learning_rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if !(self.target_error.is_finite() && self.target_error > 0.0 && self.target_error <= 1.0) {
            return Err(Error::InvalidHyperparameter(format!(
                "target_error must be in (0, 1], got {}",
                self.target_error
            )));
        }
        if self.max_epochs == 0 {
            return Err(Error::InvalidHyperparameter(
                "max_epochs must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(TrainConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        for lr in [0.0, -0.1, 1.5, f64::NAN] {
            let err = TrainConfig::new(lr, 0.01).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidHyperparameter(_)), "lr={lr}");
        }
        for t in [0.0, 2.0, f64::INFINITY] {
            let err = TrainConfig::new(0.1, t).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidHyperparameter(_)), "target={t}");
        }
        let err = TrainConfig::new(0.1, 0.1)
            .with_max_epochs(0)
            .validate()
            .unwrap_err();
        assert!(format!("{err}").contains("max_epochs"));
    }

    #[test]
    fn upper_bounds_are_inclusive() {
        assert!(TrainConfig::new(1.0, 1.0).validate().is_ok());
    }
}
