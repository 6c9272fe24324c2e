//! Model parameters and their flat text format.
//!
//! On disk the parameters are `D + 1` reals, one per line: the `D` weights in
//! input order followed by the bias. Values are written in scientific notation
//! with 18 fractional digits (`1.500000000000000000e+00`) and read back from any
//! whitespace-separated list of reals.

use std::path::Path;

use crate::{Error, Result};

/// Weight vector and bias of a linear unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    values: Vec<f64>,
    bias: f64,
}

impl Weights {
    /// Build parameters from explicit values.
    ///
    /// `values` must be non-empty and every parameter must be finite.
    pub fn new(values: Vec<f64>, bias: f64) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidConfig(
                "weights must contain at least one value".to_owned(),
            ));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidData(
                "weights must contain only finite values".to_owned(),
            ));
        }
        if !bias.is_finite() {
            return Err(Error::InvalidData(format!("bias must be finite, got {bias}")));
        }
        Ok(Self { values, bias })
    }

    /// Split a flat `[w_1, .., w_D, bias]` sequence.
    pub fn from_flat(flat: &[f64]) -> Result<Self> {
        match flat.split_last() {
            Some((&bias, values)) if !values.is_empty() => Self::new(values.to_vec(), bias),
            _ => Err(Error::InvalidData(format!(
                "expected at least 2 values (weights then bias), got {}",
                flat.len()
            ))),
        }
    }

    /// Parse the flat text format.
    pub fn parse(text: &str) -> Result<Self> {
        let flat = text
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|e| Error::InvalidData(format!("cannot parse {tok:?} as a number: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_flat(&flat)
    }

    /// Read the flat text format from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        let text = std::fs::read_to_string(p)
            .map_err(|e| Error::Io(format!("failed to read {}: {e}", p.display())))?;
        let weights = Self::parse(&text)?;
        log::debug!("loaded {} weights from {}", weights.input_dim(), p.display());
        Ok(weights)
    }

    /// Write the flat text format to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let p = path.as_ref();
        let text = self.to_text()?;
        std::fs::write(p, text)
            .map_err(|e| Error::Io(format!("failed to write {}: {e}", p.display())))?;
        log::info!("weights and bias saved to {}", p.display());
        Ok(())
    }

    /// Render the flat text format.
    ///
    /// Fails with `InvalidData` if training drove any parameter to a non-finite
    /// value, since such text could not be parsed back.
    pub fn to_text(&self) -> Result<String> {
        self.ensure_finite()?;
        let mut out = String::new();
        for &v in self.values.iter().chain(std::iter::once(&self.bias)) {
            out.push_str(&format_sci(v));
            out.push('\n');
        }
        Ok(out)
    }

    /// `InvalidData` unless every weight and the bias are finite.
    pub fn ensure_finite(&self) -> Result<()> {
        if let Some(idx) = self.values.iter().position(|v| !v.is_finite()) {
            return Err(Error::InvalidData(format!(
                "weight {idx} is {}; diverged parameters cannot be stored",
                self.values[idx]
            )));
        }
        if !self.bias.is_finite() {
            return Err(Error::InvalidData(format!(
                "bias is {}; diverged parameters cannot be stored",
                self.bias
            )));
        }
        Ok(())
    }

    /// `[w_1, .., w_D, bias]`.
    pub fn to_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.values.len() + 1);
        flat.extend_from_slice(&self.values);
        flat.push(self.bias);
        flat
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    #[inline]
    pub fn input_dim(&self) -> usize {
        self.values.len()
    }

    /// Net input `dot(x, w) + b`.
    ///
    /// Shape contract: `x.len() == self.input_dim()`.
    #[inline]
    pub(crate) fn net(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.values.len());

        let dot: f64 = self.values.iter().zip(x).map(|(&w, &xi)| w * xi).sum();
        dot + self.bias
    }

    /// Delta rule step: `w += step * x`, `b += step`, with `step = lr * error`.
    #[inline]
    pub(crate) fn nudge(&mut self, x: &[f64], step: f64) {
        debug_assert_eq!(x.len(), self.values.len());

        for (w, &xi) in self.values.iter_mut().zip(x) {
            *w += step * xi;
        }
        self.bias += step;
    }
}

/// `{:.18e}` with a signed, two-digit exponent.
fn format_sci(v: f64) -> String {
    let s = format!("{v:.18e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            Err(_) => s,
        },
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_format_is_stable() {
        let w = Weights::new(vec![1.5, -0.25], 100.0).unwrap();
        let text = w.to_text().unwrap();
        assert_eq!(
            text,
            "1.500000000000000000e+00\n-2.500000000000000000e-01\n1.000000000000000000e+02\n"
        );
        assert_eq!(Weights::parse(&text).unwrap(), w);
    }

    #[test]
    fn non_finite_parameters_are_not_rendered() {
        let mut w = Weights::new(vec![1.0, 1.0], 0.0).unwrap();
        w.nudge(&[1.0, 0.0], f64::INFINITY);
        assert!(matches!(w.to_text(), Err(Error::InvalidData(_))));

        // inf - inf in the bias turns it into NaN.
        w.nudge(&[0.0, 0.0], f64::NEG_INFINITY);
        assert!(w.bias().is_nan());
        assert!(matches!(w.ensure_finite(), Err(Error::InvalidData(_))));

        let path = std::env::temp_dir().join(format!("adaline-nan-{}.txt", std::process::id()));
        assert!(matches!(w.save(&path), Err(Error::InvalidData(_))));
        assert!(!path.exists());
    }

    #[test]
    fn parse_accepts_loose_whitespace() {
        let w = Weights::parse("  2.0 1\n\n-0.5  ").unwrap();
        assert_eq!(w.values(), &[2.0, 1.0]);
        assert_eq!(w.bias(), -0.5);
    }

    #[test]
    fn parse_rejects_short_or_bad_input() {
        assert!(matches!(Weights::parse("1.0"), Err(Error::InvalidData(_))));
        assert!(matches!(Weights::parse(""), Err(Error::InvalidData(_))));
        assert!(matches!(Weights::parse("1.0 abc"), Err(Error::InvalidData(_))));
        assert!(matches!(Weights::parse("1.0 inf"), Err(Error::InvalidData(_))));
    }

    #[test]
    fn new_validates() {
        assert!(matches!(
            Weights::new(vec![], 0.0),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            Weights::new(vec![f64::NAN], 0.0),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn net_and_nudge() {
        let mut w = Weights::new(vec![1.0, 2.0], 0.5).unwrap();
        assert_eq!(w.net(&[1.0, 1.0]), 3.5);

        w.nudge(&[1.0, 0.0], 0.5);
        assert_eq!(w.values(), &[1.5, 2.0]);
        assert_eq!(w.bias(), 1.0);
        assert_eq!(w.to_flat(), vec![1.5, 2.0, 1.0]);
    }
}
