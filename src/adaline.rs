use std::ops::ControlFlow;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use crate::{Dataset, Error, Inputs, Result, TrainConfig, TrainReport, Weights};

/// Scale applied to standard normal draws at initialization.
pub const INIT_SCALE: f64 = 0.1;

/// Epochs between progress log records.
const LOG_EVERY: usize = 1000;

/// A single linear adaptive unit trained with the Widrow-Hoff delta rule.
///
/// A new model has no weights. They are drawn at random on the first
/// [`Adaline::train`] call, or supplied up front through the preset path
/// ([`Adaline::with_weights`] / [`Adaline::set_weights`]). Once present,
/// weights are never re-drawn by training; later runs continue from them.
#[derive(Debug, Clone)]
pub struct Adaline {
    config: TrainConfig,
    weights: Option<Weights>,
    error_history: Vec<f64>,
    epochs_trained: usize,
}

impl Adaline {
    /// Create an untrained model.
    pub fn new(config: TrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            weights: None,
            error_history: Vec::new(),
            epochs_trained: 0,
        })
    }

    /// Create a model from known parameters (preset entry).
    ///
    /// No random draw happens; a following `train` starts from these values.
    pub fn with_weights(config: TrainConfig, weights: Vec<f64>, bias: f64) -> Result<Self> {
        let mut model = Self::new(config)?;
        model.set_weights(weights, bias)?;
        Ok(model)
    }

    /// Create a model from a flat `D + 1` weights file.
    pub fn load_weights<P: AsRef<Path>>(config: TrainConfig, path: P) -> Result<Self> {
        let mut model = Self::new(config)?;
        model.weights = Some(Weights::load(path)?);
        Ok(model)
    }

    /// Overwrite weights and bias (preset entry).
    pub fn set_weights(&mut self, weights: Vec<f64>, bias: f64) -> Result<()> {
        self.weights = Some(Weights::new(weights, bias)?);
        Ok(())
    }

    /// Overwrite the parameters with an already validated set.
    pub fn set_parameters(&mut self, weights: Weights) {
        self.weights = Some(weights);
    }

    /// Draw fresh weights from `N(0, 1) * 0.1` using the thread RNG.
    pub fn initialize(&mut self, input_size: usize) -> Result<()> {
        self.initialize_with_rng(input_size, &mut rand::thread_rng())
    }

    /// Same as [`Adaline::initialize`] with a deterministic seed.
    pub fn initialize_with_seed(&mut self, input_size: usize, seed: u64) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.initialize_with_rng(input_size, &mut rng)
    }

    /// Same as [`Adaline::initialize`] with the provided RNG.
    pub fn initialize_with_rng<R: Rng + ?Sized>(
        &mut self,
        input_size: usize,
        rng: &mut R,
    ) -> Result<()> {
        if input_size == 0 {
            return Err(Error::InvalidConfig("input_size must be > 0".to_owned()));
        }

        let values: Vec<f64> = (0..input_size).map(|_| draw(rng)).collect();
        let bias = draw(rng);

        self.weights = Some(Weights::new(values, bias)?);
        Ok(())
    }

    /// Train on `data` until an epoch's MSE reaches the target or `max_epochs` is hit.
    ///
    /// Samples are visited in storage order and every sample updates the weights
    /// immediately. The epoch MSE is the mean of the squared errors observed
    /// before each sample's own update.
    pub fn train(&mut self, data: &Dataset) -> Result<TrainReport> {
        self.train_with(data, |_, _| ControlFlow::Continue(()))
    }

    /// Convenience wrapper over [`Adaline::train`] for per-sample rows.
    pub fn train_rows(&mut self, inputs: &[Vec<f64>], desired: &[f64]) -> Result<TrainReport> {
        let data = Dataset::from_rows(inputs, desired)?;
        self.train(&data)
    }

    /// Train like [`Adaline::train`], calling `on_epoch(epoch, mse)` after each epoch.
    ///
    /// The callback also sees the epoch that ends the run. Returning
    /// `ControlFlow::Break(())` ends the run after the current epoch; the report
    /// is marked `cancelled` only if the run would otherwise have continued.
    pub fn train_with<F>(&mut self, data: &Dataset, mut on_epoch: F) -> Result<TrainReport>
    where
        F: FnMut(usize, f64) -> ControlFlow<()>,
    {
        if let Some(w) = &self.weights {
            if w.input_dim() != data.input_dim() {
                return Err(Error::DimensionMismatch(format!(
                    "dataset input_dim {} does not match model input_dim {}",
                    data.input_dim(),
                    w.input_dim()
                )));
            }
        } else {
            self.initialize(data.input_dim())?;
        }

        self.error_history.clear();
        self.epochs_trained = 0;

        let lr = self.config.learning_rate;
        let target = self.config.target_error;
        let max_epochs = self.config.max_epochs;
        let n = data.len() as f64;

        let weights = self.weights.as_mut().ok_or(Error::UninitializedModel)?;
        let mut cancelled = false;

        loop {
            let mut total_error = 0.0_f64;
            for (x, desired) in data.samples() {
                let output = weights.net(x);
                let error = desired - output;
                weights.nudge(x, lr * error);
                total_error += error * error;
            }

            let current_error = total_error / n;
            self.error_history.push(current_error);
            self.epochs_trained += 1;

            if self.epochs_trained.is_multiple_of(LOG_EVERY) {
                log::debug!("epoch={} mse={current_error}", self.epochs_trained);
            }

            let stop = on_epoch(self.epochs_trained, current_error);
            if current_error <= target || self.epochs_trained >= max_epochs {
                break;
            }
            if stop.is_break() {
                cancelled = true;
                break;
            }
        }

        let report = TrainReport {
            epochs_trained: self.epochs_trained,
            error_history: self.error_history.clone(),
            target_error: target,
            cancelled,
        };

        match report.final_error() {
            Some(e) if e <= target => {
                log::info!(
                    "converged after {} epochs: mse={e:.8} target={target}",
                    report.epochs_trained
                );
            }
            Some(e) if cancelled => {
                log::info!("cancelled after {} epochs: mse={e:.8}", report.epochs_trained);
            }
            Some(e) => {
                log::warn!(
                    "stopped after {} epochs above target: mse={e:.8} target={target}",
                    report.epochs_trained
                );
            }
            None => {}
        }

        Ok(report)
    }

    /// Predict one output per input row.
    pub fn predict(&self, inputs: &Inputs) -> Result<Vec<f64>> {
        let weights = self.parameters()?;
        if inputs.input_dim() != weights.input_dim() {
            return Err(Error::DimensionMismatch(format!(
                "inputs input_dim {} does not match model input_dim {}",
                inputs.input_dim(),
                weights.input_dim()
            )));
        }

        Ok(inputs.rows().map(|x| weights.net(x)).collect())
    }

    /// Predict one output per row; every row must have the model's input dimension.
    pub fn predict_rows(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        rows.iter().map(|x| self.predict_one(x)).collect()
    }

    /// Predict the output for a single input vector.
    pub fn predict_one(&self, x: &[f64]) -> Result<f64> {
        let weights = self.parameters()?;
        if x.len() != weights.input_dim() {
            return Err(Error::DimensionMismatch(format!(
                "input len {} does not match model input_dim {}",
                x.len(),
                weights.input_dim()
            )));
        }
        Ok(weights.net(x))
    }

    /// Write the current weights in the flat `D + 1` text format.
    pub fn save_weights<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.parameters()?.save(path)
    }

    /// Flat `D + 1` text rendering of the current weights.
    pub fn weights_to_string(&self) -> Result<String> {
        self.parameters()?.to_text()
    }

    /// Current parameters, or `UninitializedModel`.
    pub fn parameters(&self) -> Result<&Weights> {
        self.weights.as_ref().ok_or(Error::UninitializedModel)
    }

    #[inline]
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.weights.is_some()
    }

    #[inline]
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_ref().map(Weights::values)
    }

    #[inline]
    pub fn bias(&self) -> Option<f64> {
        self.weights.as_ref().map(Weights::bias)
    }

    #[inline]
    pub fn input_dim(&self) -> Option<usize> {
        self.weights.as_ref().map(Weights::input_dim)
    }

    #[inline]
    pub fn error_history(&self) -> &[f64] {
        &self.error_history
    }

    #[inline]
    pub fn epochs_trained(&self) -> usize {
        self.epochs_trained
    }

    #[inline]
    pub fn final_error(&self) -> Option<f64> {
        self.error_history.last().copied()
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    z * INIT_SCALE
}
