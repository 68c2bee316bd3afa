use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tokens::TokenSliceExt;
use crate::error::{PadError, Result};

/// Requested target length of a padded batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PadLengthRepr", into = "PadLengthRepr")]
pub enum PadLength {
    /// Every row is cut or filled to exactly this many chars.
    Fixed(usize),
    /// Use the length of the longest row in the batch.
    Max,
}

impl Default for PadLength {
    fn default() -> Self {
        Self::Fixed(148)
    }
}

impl FromStr for PadLength {
    type Err = PadError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "max" {
            return Ok(Self::Max);
        }
        match s.parse::<usize>() {
            Ok(0) | Err(_) => Err(PadError::InvalidPadLength(s.to_string())),
            Ok(n) => Ok(Self::Fixed(n)),
        }
    }
}

impl fmt::Display for PadLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Max => write!(f, "max"),
        }
    }
}

/// On-disk form: either a bare integer or the string `"max"`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum PadLengthRepr {
    Fixed(usize),
    Named(String),
}

impl TryFrom<PadLengthRepr> for PadLength {
    type Error = PadError;

    fn try_from(repr: PadLengthRepr) -> Result<Self> {
        match repr {
            PadLengthRepr::Fixed(0) => Err(PadError::InvalidPadLength("0".to_string())),
            PadLengthRepr::Fixed(n) => Ok(Self::Fixed(n)),
            PadLengthRepr::Named(name) => name.parse(),
        }
    }
}

impl From<PadLength> for PadLengthRepr {
    fn from(length: PadLength) -> Self {
        match length {
            PadLength::Fixed(n) => Self::Fixed(n),
            PadLength::Max => Self::Named("max".to_string()),
        }
    }
}

/// Resolve the effective target length once for the whole batch.
///
/// `Max` measures each row as its joined string and takes the longest;
/// an empty batch resolves to 0.
pub fn resolve_pad_length<S: AsRef<str>>(
    sequences: &[Vec<S>],
    pad_length: PadLength,
) -> Result<usize> {
    match pad_length {
        PadLength::Fixed(0) => Err(PadError::InvalidPadLength("0".to_string())),
        PadLength::Fixed(n) => Ok(n),
        PadLength::Max => Ok(sequences
            .iter()
            .map(|tokens| tokens.joined_len())
            .max()
            .unwrap_or(0)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn check_parse() {
        assert_eq!(PadLength::Max, "max".parse().unwrap());
        assert_eq!(PadLength::Fixed(145), "145".parse().unwrap());
        assert!(matches!(
            "0".parse::<PadLength>(),
            Err(PadError::InvalidPadLength(_))
        ));
        assert!(matches!(
            "longest".parse::<PadLength>(),
            Err(PadError::InvalidPadLength(_))
        ));
    }

    #[test]
    pub fn check_serde() {
        assert_eq!("148", serde_json::to_string(&PadLength::Fixed(148)).unwrap());
        assert_eq!("\"max\"", serde_json::to_string(&PadLength::Max).unwrap());
        assert_eq!(PadLength::Max, serde_json::from_str::<PadLength>("\"max\"").unwrap());
        assert_eq!(
            PadLength::Fixed(12),
            serde_json::from_str::<PadLength>("12").unwrap()
        );
        assert!(serde_json::from_str::<PadLength>("0").is_err());
    }

    #[test]
    pub fn check_resolve_max_uses_joined_length() {
        let batch = vec![vec!["AU", "G"], vec!["A"], vec!["C", "C", "C", "C"]];
        assert_eq!(4, resolve_pad_length(&batch, PadLength::Max).unwrap());
        assert_eq!(7, resolve_pad_length(&batch, PadLength::Fixed(7)).unwrap());
    }

    #[test]
    pub fn check_resolve_rejects_zero() {
        let batch = vec![vec!["A"]];
        assert!(resolve_pad_length(&batch, PadLength::Fixed(0)).is_err());
    }

    #[test]
    pub fn check_resolve_empty_batch() {
        let batch: Vec<Vec<&str>> = vec![];
        assert_eq!(0, resolve_pad_length(&batch, PadLength::Max).unwrap());
    }
}
