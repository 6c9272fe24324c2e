//! Model serialization/deserialization (feature: `serde`).
//!
//! This module defines a versioned JSON format for a trained `Adaline`.
//!
//! Design notes:
//! - `Adaline` itself is not serialized directly; the document mirrors the
//!   flat weights contract plus the hyperparameters needed to keep training.
//! - Deserialization validates the version, the weight count against
//!   `input_dim`, finiteness of every parameter, and hyperparameter ranges.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Adaline, Error, Result, TrainConfig, Weights};

pub const MODEL_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedAdaline {
    pub format_version: u32,
    pub input_dim: usize,
    pub weights: Vec<f64>,
    pub bias: f64,
    pub learning_rate: f64,
    pub target_error: f64,
    pub max_epochs: usize,
}

impl SerializedAdaline {
    pub fn validate(&self) -> Result<()> {
        if self.format_version != MODEL_FORMAT_VERSION {
            return Err(Error::InvalidData(format!(
                "unsupported model format_version {}; expected {}",
                self.format_version, MODEL_FORMAT_VERSION
            )));
        }
        if self.input_dim == 0 {
            return Err(Error::InvalidData("input_dim must be > 0".to_owned()));
        }
        if self.weights.len() != self.input_dim {
            return Err(Error::InvalidData(format!(
                "weights length {} does not match input_dim {}",
                self.weights.len(),
                self.input_dim
            )));
        }
        self.config().validate()?;
        Ok(())
    }

    fn config(&self) -> TrainConfig {
        TrainConfig {
            learning_rate: self.learning_rate,
            target_error: self.target_error,
            max_epochs: self.max_epochs,
        }
    }
}

impl TryFrom<&Adaline> for SerializedAdaline {
    type Error = Error;

    fn try_from(model: &Adaline) -> std::result::Result<Self, Self::Error> {
        let params = model.parameters()?;
        params.ensure_finite()?;
        let cfg = model.config();
        Ok(Self {
            format_version: MODEL_FORMAT_VERSION,
            input_dim: params.input_dim(),
            weights: params.values().to_vec(),
            bias: params.bias(),
            learning_rate: cfg.learning_rate,
            target_error: cfg.target_error,
            max_epochs: cfg.max_epochs,
        })
    }
}

impl TryFrom<SerializedAdaline> for Adaline {
    type Error = Error;

    fn try_from(value: SerializedAdaline) -> std::result::Result<Self, Self::Error> {
        value.validate()?;

        let cfg = value.config();
        // Weights::new performs the finiteness checks.
        let params = Weights::new(value.weights, value.bias)?;
        let mut model = Adaline::new(cfg)?;
        model.set_parameters(params);
        Ok(model)
    }
}

impl Adaline {
    /// Serialize the model to a pretty-printed JSON string.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        let ser = SerializedAdaline::try_from(self)?;
        serde_json::to_string_pretty(&ser)
            .map_err(|e| Error::InvalidData(format!("failed to serialize model: {e}")))
    }

    /// Serialize the model to a compact JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        let ser = SerializedAdaline::try_from(self)?;
        serde_json::to_string(&ser)
            .map_err(|e| Error::InvalidData(format!("failed to serialize model: {e}")))
    }

    /// Parse a model from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let ser: SerializedAdaline = serde_json::from_str(s)
            .map_err(|e| Error::InvalidData(format!("failed to parse model json: {e}")))?;
        ser.try_into()
    }

    /// Save the model to a JSON file (pretty-printed).
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let s = self.to_json_string_pretty()?;
        let p = path.as_ref();
        std::fs::write(p, s)
            .map_err(|e| Error::Io(format!("failed to write {}: {e}", p.display())))?;
        Ok(())
    }

    /// Load a model from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        let s = std::fs::read_to_string(p)
            .map_err(|e| Error::Io(format!("failed to read {}: {e}", p.display())))?;
        Self::from_json_str(&s)
    }
}
