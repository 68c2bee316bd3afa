//! Categorical encoding of equal-length padded rows.
//!
//! Every row is fitted on its own: a row's codes index into the sorted set
//! of symbols seen in that row only, so two rows with different symbol
//! diversity produce one-hot matrices of different widths. Pass an
//! [`Alphabet`] to [`batch_encode`] to share one column space instead.

mod export;
mod label;
mod onehot;

pub use export::*;
pub use label::*;
pub use onehot::*;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{PadError, Result};

/// Fit/transform primitive behind [`batch_encode`].
pub trait Categorical: Send + Sync {
    /// Learn the alphabet of `symbols`, replacing any previous fit.
    fn fit(&mut self, symbols: &[char]);

    /// Map each symbol to its code; `row` is reported on failure.
    fn transform(&self, symbols: &[char], row: usize) -> Result<Array1<u32>>;

    /// Map codes back to symbols, skipping codes outside the alphabet.
    fn inverse_transform(&self, codes: &[u32]) -> String;

    /// Number of distinct codes.
    fn width(&self) -> usize;

    fn fit_transform(&mut self, symbols: &[char], row: usize) -> Result<Array1<u32>> {
        self.fit(symbols);
        self.transform(symbols, row)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum EncodingType {
    /// One unit vector per position.
    #[default]
    #[serde(rename = "onehot")]
    #[value(name = "onehot")]
    OneHot,
    /// One integer code per position.
    #[serde(rename = "label")]
    #[value(name = "label")]
    Label,
}

impl FromStr for EncodingType {
    type Err = PadError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "onehot" => Ok(Self::OneHot),
            "label" => Ok(Self::Label),
            _ => Err(PadError::InvalidEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for EncodingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneHot => write!(f, "onehot"),
            Self::Label => write!(f, "label"),
        }
    }
}

/// One encoded row.
#[derive(Clone, Debug, PartialEq)]
pub enum EncodedRow {
    Label(Array1<u32>),
    /// Shape `(positions, symbols)`.
    OneHot(Array2<f32>),
}

impl EncodedRow {
    /// Number of encoded positions.
    pub fn len(&self) -> usize {
        match self {
            Self::Label(codes) => codes.len(),
            Self::OneHot(matrix) => matrix.nrows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One-hot column count; `None` for label rows.
    pub fn width(&self) -> Option<usize> {
        match self {
            Self::Label(_) => None,
            Self::OneHot(matrix) => Some(matrix.ncols()),
        }
    }

    pub fn as_label(&self) -> Option<&Array1<u32>> {
        match self {
            Self::Label(codes) => Some(codes),
            Self::OneHot(_) => None,
        }
    }

    pub fn as_one_hot(&self) -> Option<&Array2<f32>> {
        match self {
            Self::Label(_) => None,
            Self::OneHot(matrix) => Some(matrix),
        }
    }
}

/// Encode a batch of equal-length rows.
///
/// Without `alphabet` a fresh [`LabelEncoder`] is fitted per row; with it,
/// every row is coded against the shared alphabet.
///
/// # Errors
///
/// * [`PadError::UnequalLengths`] if the rows differ in char length.
/// * [`PadError::UnknownSymbol`] if a row holds a symbol outside `alphabet`.
pub fn batch_encode<S: AsRef<str>>(
    batch: &[S],
    encoding_type: EncodingType,
    alphabet: Option<&Alphabet>,
) -> Result<Vec<EncodedRow>> {
    let lengths: BTreeSet<usize> = batch
        .iter()
        .map(|row| row.as_ref().chars().count())
        .collect();
    if lengths.len() > 1 {
        return Err(PadError::UnequalLengths {
            lengths: lengths.into_iter().collect(),
        });
    }

    log::debug!(
        "encoding {} rows as {encoding_type} ({})",
        batch.len(),
        match alphabet {
            Some(alphabet) => format!("shared alphabet of {}", alphabet.len()),
            None => "per-row alphabets".to_string(),
        }
    );

    batch
        .iter()
        .enumerate()
        .map(|(row, data)| {
            let symbols: Vec<char> = data.as_ref().chars().collect();
            let (codes, width) = match alphabet {
                Some(alphabet) => {
                    let encoder = LabelEncoder::with_alphabet(alphabet.clone());
                    (encoder.transform(&symbols, row)?, encoder.width())
                }
                None => {
                    let mut encoder = LabelEncoder::default();
                    (encoder.fit_transform(&symbols, row)?, encoder.width())
                }
            };

            Ok(match encoding_type {
                EncodingType::Label => EncodedRow::Label(codes),
                EncodingType::OneHot => EncodedRow::OneHot(one_hot(
                    codes.as_slice().unwrap_or_default(),
                    width,
                )),
            })
        })
        .collect()
}
