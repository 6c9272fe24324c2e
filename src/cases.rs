//! Built-in binary counting datasets.
//!
//! Case `n` has `n + 1` binary inputs and one row per bit pattern. The desired
//! output is the integer encoded by the bits, most significant bit first, so
//! Case 1 is:
//!
//! | x1 | x2 | Y |
//! |----|----|---|
//! | 0  | 0  | 0 |
//! | 0  | 1  | 1 |
//! | 1  | 0  | 2 |
//! | 1  | 1  | 3 |
//!
//! Every case is exactly realizable by a linear unit: the weights are the
//! powers of two and the bias is zero.

use crate::{Dataset, Error, Result};

/// One of the four stock training problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Case1,
    Case2,
    Case3,
    Case4,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Case1, Case::Case2, Case::Case3, Case::Case4];

    /// 1-based case number.
    pub fn number(self) -> usize {
        match self {
            Case::Case1 => 1,
            Case::Case2 => 2,
            Case::Case3 => 3,
            Case::Case4 => 4,
        }
    }

    pub fn from_number(n: usize) -> Result<Self> {
        match n {
            1 => Ok(Case::Case1),
            2 => Ok(Case::Case2),
            3 => Ok(Case::Case3),
            4 => Ok(Case::Case4),
            _ => Err(Error::InvalidConfig(format!(
                "case number must be in 1..=4, got {n}"
            ))),
        }
    }

    /// Number of inputs of this case.
    pub fn input_dim(self) -> usize {
        self.number() + 1
    }

    /// File name the dataset is conventionally stored under.
    pub fn data_file_name(self) -> String {
        format!("Caso{}.txt", self.number())
    }

    /// File name trained weights are conventionally stored under.
    pub fn weights_file_name(self) -> String {
        format!("Pesos_Caso{}.txt", self.number())
    }

    pub fn dataset(self) -> Dataset {
        match binary_counting(self.input_dim()) {
            Ok(data) => data,
            Err(e) => unreachable!("case tables have 2..=5 inputs: {e}"),
        }
    }
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "case {} ({} inputs)", self.number(), self.input_dim())
    }
}

/// Every `input_dim`-bit pattern in counting order, targeting its integer value.
///
/// Returns `InvalidConfig` if `input_dim` is zero or the table size is not addressable.
pub fn binary_counting(input_dim: usize) -> Result<Dataset> {
    if input_dim == 0 {
        return Err(Error::InvalidConfig("input_dim must be > 0".to_owned()));
    }
    let too_large =
        || Error::InvalidConfig(format!("input_dim {input_dim} is too large to enumerate"));
    let len = u32::try_from(input_dim)
        .ok()
        .and_then(|bits| 1usize.checked_shl(bits))
        .ok_or_else(too_large)?;
    let cells = len
        .checked_mul(input_dim)
        .filter(|&c| c <= isize::MAX as usize / std::mem::size_of::<f64>())
        .ok_or_else(too_large)?;

    let mut inputs = Vec::with_capacity(cells);
    let mut targets = Vec::with_capacity(len);
    for value in 0..len {
        for bit in (0..input_dim).rev() {
            inputs.push(((value >> bit) & 1) as f64);
        }
        targets.push(value as f64);
    }

    Dataset::from_flat(inputs, targets, input_dim)
}
