//! A single linear adaptive unit (Adaline).
//!
//! `adaline` trains one linear neuron with the Widrow-Hoff delta rule: gradient
//! descent on squared error, applied sample by sample in a fixed order, with the
//! identity as activation. It fits linear mappings from (usually binary) input
//! vectors to real targets.
//!
//! # Training semantics
//!
//! - Weights are drawn once from `N(0, 1) * 0.1` on the first `train`, unless
//!   they were preset. Later `train` calls continue from the current weights.
//! - Every sample updates the weights immediately:
//!   `w += lr * err * x`, `b += lr * err`.
//! - The epoch error is the mean of the squared per-sample errors as they were
//!   observed during the pass, before each sample's own update.
//! - Training stops when an epoch error is `<= target_error` or after
//!   `max_epochs` epochs. Hitting the cap is reported, not raised.
//!
//! # Data layout
//!
//! - Scalars are `f64`.
//! - [`Dataset`] and [`Inputs`] store samples contiguously in row-major layout.
//! - The flat parameter layout is `[w_1, .., w_D, bias]`.
//!
//! # Quick start
//!
//! ```rust
//! use adaline::{Adaline, Dataset, TrainConfig};
//!
//! # fn main() -> adaline::Result<()> {
//! let xs = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![1.0, 0.0],
//!     vec![1.0, 1.0],
//! ];
//! let ys = vec![0.0, 1.0, 2.0, 3.0];
//! let train = Dataset::from_rows(&xs, &ys)?;
//!
//! let mut model = Adaline::new(TrainConfig::new(0.1, 0.001))?;
//! let report = model.train(&train)?;
//! assert!(report.converged());
//!
//! let y = model.predict_one(&[1.0, 1.0])?;
//! assert!((y - 3.0).abs() < 0.2);
//! # Ok(())
//! # }
//! ```
//!
//! # Preset weights
//!
//! Known parameters (hand-entered or loaded from disk) bypass the random draw:
//!
//! ```rust
//! use adaline::{Adaline, TrainConfig};
//!
//! # fn main() -> adaline::Result<()> {
//! let model = Adaline::with_weights(TrainConfig::default(), vec![1.0, 2.0], 0.5)?;
//! assert_eq!(model.predict_rows(&[vec![1.0, 1.0]])?, vec![3.5]);
//! # Ok(())
//! # }
//! ```

pub mod adaline;
pub mod cases;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod weights;

#[cfg(feature = "serde")]
pub mod serde_model;

pub use adaline::Adaline;
pub use cases::Case;
pub use config::TrainConfig;
pub use data::{Dataset, Inputs};
pub use error::{Error, Result};
pub use report::TrainReport;
pub use weights::Weights;

/// Train a fresh model on `data` and return it with its report.
///
/// Thin wrapper around [`Adaline::new`] + [`Adaline::train`].
pub fn fit(data: &Dataset, config: TrainConfig) -> Result<(Adaline, TrainReport)> {
    let mut model = Adaline::new(config)?;
    let report = model.train(data)?;
    Ok((model, report))
}
