//! Contiguous dataset helpers.
//!
//! Training walks samples in their stored order, so `Inputs` and `Dataset` keep
//! rows in a single row-major buffer and hand out slices.
//!
//! `Dataset::parse_table` implements the text ingestion contract: one sample per
//! line, every column but the last is an input, the last column is the desired
//! output.

use std::path::Path;

use crate::{Error, Result};

/// A collection of input samples (X).
///
/// Stored as a contiguous buffer with row-major layout:
/// - `inputs.len() == len * input_dim`
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    inputs: Vec<f64>,
    len: usize,
    input_dim: usize,
}

impl Inputs {
    /// Build inputs from a flat buffer with shape `(len, input_dim)`.
    pub fn from_flat(inputs: Vec<f64>, input_dim: usize) -> Result<Self> {
        if input_dim == 0 {
            return Err(Error::InvalidConfig("input_dim must be > 0".to_owned()));
        }
        if !inputs.len().is_multiple_of(input_dim) {
            return Err(Error::DimensionMismatch(format!(
                "inputs length {} is not divisible by input_dim {}",
                inputs.len(),
                input_dim
            )));
        }

        let len = inputs.len() / input_dim;

        Ok(Self {
            inputs,
            len,
            input_dim,
        })
    }

    /// Build inputs from per-sample rows.
    ///
    /// This copies into contiguous storage.
    pub fn from_rows(inputs: &[Vec<f64>]) -> Result<Self> {
        if inputs.is_empty() {
            return Err(Error::InvalidConfig("inputs must not be empty".to_owned()));
        }

        let input_dim = inputs[0].len();
        if input_dim == 0 {
            return Err(Error::InvalidConfig("input_dim must be > 0".to_owned()));
        }

        for (i, row) in inputs.iter().enumerate() {
            if row.len() != input_dim {
                return Err(Error::DimensionMismatch(format!(
                    "input row {i} has len {}, expected {input_dim}",
                    row.len()
                )));
            }
        }

        let len = inputs.len();
        let mut inputs_flat = Vec::with_capacity(len * input_dim);
        for row in inputs {
            inputs_flat.extend_from_slice(row);
        }

        Ok(Self {
            inputs: inputs_flat,
            len,
            input_dim,
        })
    }

    #[inline]
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    /// Returns the per-sample input dimension.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    #[inline]
    /// Returns the `idx`-th input row (shape: `(input_dim,)`).
    ///
    /// Panics if `idx >= len`.
    pub fn input(&self, idx: usize) -> &[f64] {
        let start = idx * self.input_dim;
        &self.inputs[start..start + self.input_dim]
    }

    /// Iterate over rows in storage order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.inputs.chunks_exact(self.input_dim)
    }
}

/// A supervised dataset: input rows paired with one desired output each.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Inputs,
    targets: Vec<f64>,
}

impl Dataset {
    /// Build a dataset from a flat `(len, input_dim)` input buffer and `len` targets.
    pub fn from_flat(inputs: Vec<f64>, targets: Vec<f64>, input_dim: usize) -> Result<Self> {
        let inputs = Inputs::from_flat(inputs, input_dim)?;
        Self::new(inputs, targets)
    }

    /// Build a dataset from per-sample rows and their desired outputs.
    pub fn from_rows(inputs: &[Vec<f64>], targets: &[f64]) -> Result<Self> {
        if inputs.len() != targets.len() {
            return Err(Error::DimensionMismatch(format!(
                "inputs/targets length mismatch: {} vs {}",
                inputs.len(),
                targets.len()
            )));
        }

        let inputs = Inputs::from_rows(inputs)?;
        Self::new(inputs, targets.to_vec())
    }

    /// Pair already-built inputs with targets.
    pub fn new(inputs: Inputs, targets: Vec<f64>) -> Result<Self> {
        if inputs.is_empty() {
            return Err(Error::InvalidConfig("dataset must not be empty".to_owned()));
        }
        if targets.len() != inputs.len() {
            return Err(Error::DimensionMismatch(format!(
                "targets length {} does not match number of samples {}",
                targets.len(),
                inputs.len()
            )));
        }

        Ok(Self { inputs, targets })
    }

    /// Parse a delimited text table.
    ///
    /// - Blank lines and `#` comments are ignored.
    /// - A non-numeric first line containing a comma and a letter is a header.
    /// - Lines containing a comma are split on commas, others on whitespace.
    pub fn parse_table(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut width: Option<usize> = None;
        let mut first = true;

        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let parsed = parse_row(line, line_no + 1);
            if first {
                first = false;
                let is_header = parsed.is_err()
                    && line.contains(',')
                    && line.chars().any(char::is_alphabetic);
                if is_header {
                    continue;
                }
            }

            let row = parsed?;
            if row.len() < 2 {
                return Err(Error::InvalidData(format!(
                    "line {}: expected at least one input column and one output column",
                    line_no + 1
                )));
            }
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(Error::InvalidData(format!(
                        "line {}: has {} columns, expected {w}",
                        line_no + 1,
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            rows.push(row);
        }

        let Some(width) = width else {
            return Err(Error::InvalidData("table contains no samples".to_owned()));
        };

        let input_dim = width - 1;
        let mut inputs = Vec::with_capacity(rows.len() * input_dim);
        let mut targets = Vec::with_capacity(rows.len());
        for row in rows {
            inputs.extend_from_slice(&row[..input_dim]);
            targets.push(row[input_dim]);
        }

        Self::from_flat(inputs, targets, input_dim)
    }

    /// Read and parse a delimited text table from disk.
    pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        let text = std::fs::read_to_string(p)
            .map_err(|e| Error::Io(format!("failed to read {}: {e}", p.display())))?;
        let data = Self::parse_table(&text)?;
        log::debug!(
            "loaded {} samples with {} inputs from {}",
            data.len(),
            data.input_dim(),
            p.display()
        );
        Ok(data)
    }

    /// Render as a comma-separated table with an `x1,..,xD,Y` header.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        for j in 1..=self.input_dim() {
            out.push_str(&format!("x{j},"));
        }
        out.push('Y');
        for (x, y) in self.samples() {
            out.push('\n');
            for v in x {
                out.push_str(&format!("{v},"));
            }
            out.push_str(&format!("{y}"));
        }
        out
    }

    #[inline]
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    #[inline]
    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    #[inline]
    /// Returns the per-sample input dimension.
    pub fn input_dim(&self) -> usize {
        self.inputs.input_dim()
    }

    #[inline]
    /// Returns a view of the inputs (X).
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    #[inline]
    /// Returns all desired outputs in sample order.
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    #[inline]
    /// Returns the `idx`-th input row.
    ///
    /// Panics if `idx >= len`.
    pub fn input(&self, idx: usize) -> &[f64] {
        self.inputs.input(idx)
    }

    #[inline]
    /// Returns the `idx`-th desired output.
    ///
    /// Panics if `idx >= len`.
    pub fn target(&self, idx: usize) -> f64 {
        self.targets[idx]
    }

    /// Iterate over `(input, target)` pairs in storage order.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = (&[f64], f64)> + '_ {
        self.inputs.rows().zip(self.targets.iter().copied())
    }
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>> {
    let fields: Vec<&str> = if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    };

    fields
        .into_iter()
        .map(|f| {
            f.parse::<f64>().map_err(|e| {
                Error::InvalidData(format!("line {line_no}: cannot parse {f:?} as a number: {e}"))
            })
        })
        .collect()
}
