//! Fixed-length normalization of token sequences.
//!
//! A batch is padded in two steps: the effective target length is
//! resolved once for the whole batch (see [`resolve_pad_length`]), then each
//! row is cut or filled to that length by the selected [`PadType`].

mod length;
mod policy;
mod tokens;

pub use length::*;
pub use policy::*;
pub use tokens::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::PadConfig;
use crate::error::{PadError, Result};

/// Default pad unit.
pub const DEFAULT_PAD_STR: &str = "AU";

/// Where pad material is placed in a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PadType {
    /// All pad material after the row.
    End,
    /// Pad units interleaved between the row's tokens.
    Symmetric,
    /// Pad units split between the front and the back.
    Dual,
}

impl PadType {
    pub const ALL: [PadType; 3] = [PadType::End, PadType::Symmetric, PadType::Dual];

    /// Pad one row to `target` chars; `num_chunks` is the batch size.
    pub fn apply<S: AsRef<str>>(
        self,
        tokens: &[S],
        pad_str: &str,
        target: usize,
        num_chunks: usize,
    ) -> String {
        match self {
            PadType::End => pad_end(&tokens.join_tokens(), pad_str, target),
            PadType::Dual => pad_dual(&tokens.join_tokens(), pad_str, target),
            PadType::Symmetric => pad_symmetric(tokens, pad_str, target, num_chunks),
        }
    }
}

impl FromStr for PadType {
    type Err = PadError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "end" => Ok(Self::End),
            "symmetric" => Ok(Self::Symmetric),
            "dual" => Ok(Self::Dual),
            _ => Err(PadError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::End => "end",
            Self::Symmetric => "symmetric",
            Self::Dual => "dual",
        };
        write!(f, "{name}")
    }
}

/// Pad every row of `sequences` to one shared length.
///
/// Output row `i` corresponds to input row `i`. Rows longer than the
/// target are cut from the tail under every policy.
///
/// # Errors
///
/// * [`PadError::EmptyPadUnit`] if `pad_str` is empty.
/// * [`PadError::InvalidPadLength`] for a fixed length of 0.
pub fn pad_sequences<S: AsRef<str>>(
    sequences: &[Vec<S>],
    pad_type: PadType,
    pad_str: &str,
    pad_length: PadLength,
) -> Result<Vec<String>> {
    if pad_str.is_empty() {
        return Err(PadError::EmptyPadUnit);
    }

    let target = resolve_pad_length(sequences, pad_length)?;
    log::debug!(
        "padding {} rows with '{pad_type}' to {target} chars (requested {pad_length})",
        sequences.len()
    );

    let num_chunks = sequences.len();
    Ok(sequences
        .iter()
        .map(|tokens| pad_type.apply(tokens, pad_str, target, num_chunks))
        .collect())
}

/// [`pad_sequences`] with the policy, unit and length taken from `config`.
pub fn pad_with_config<S: AsRef<str>>(
    sequences: &[Vec<S>],
    config: &PadConfig,
) -> Result<Vec<String>> {
    pad_sequences(
        sequences,
        config.pad_type,
        &config.pad_str,
        config.pad_length,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn abc() -> Vec<Vec<&'static str>> {
        vec![vec!["A", "B", "C"]]
    }

    #[test]
    pub fn check_end_scenario() {
        let padded = pad_sequences(&abc(), PadType::End, "X", PadLength::Fixed(5)).unwrap();
        assert_eq!(vec!["ABCXX".to_string()], padded);
    }

    #[test]
    pub fn check_dual_scenario() {
        let padded = pad_sequences(&abc(), PadType::Dual, "X", PadLength::Fixed(5)).unwrap();
        assert_eq!(vec!["XABCX".to_string()], padded);
    }

    #[test]
    pub fn check_invalid_policy() {
        let err = "middle".parse::<PadType>().unwrap_err();
        assert!(matches!(err, PadError::InvalidPolicy(ref name) if name == "middle"));
        assert!(err.to_string().contains("middle"));
    }

    #[test]
    pub fn check_policy_names_round_trip() {
        for pad_type in PadType::ALL {
            assert_eq!(pad_type, pad_type.to_string().parse().unwrap());
        }
    }

    #[test]
    pub fn check_empty_pad_unit_rejected() {
        let err = pad_sequences(&abc(), PadType::End, "", PadLength::Fixed(5)).unwrap_err();
        assert!(matches!(err, PadError::EmptyPadUnit));
    }

    #[test]
    pub fn check_zero_length_rejected() {
        let err = pad_sequences(&abc(), PadType::End, "X", PadLength::Fixed(0)).unwrap_err();
        assert!(matches!(err, PadError::InvalidPadLength(_)));
    }

    #[test]
    pub fn check_empty_batch() {
        let batch: Vec<Vec<&str>> = vec![];
        let padded = pad_sequences(&batch, PadType::Symmetric, "AU", PadLength::Max).unwrap();
        assert!(padded.is_empty());
    }

    #[test]
    pub fn check_empty_row_is_filled() {
        let batch = vec![vec![], vec!["A", "U"]];
        let padded = pad_sequences(&batch, PadType::End, "AU", PadLength::Fixed(3)).unwrap();
        assert_eq!(vec!["AUA".to_string(), "AUA".to_string()], padded);
    }

    #[test]
    pub fn check_max_applies_to_every_row() {
        let batch = vec![vec!["A"], vec!["A", "U", "G", "C", "C"], vec!["G", "G"]];
        for pad_type in PadType::ALL {
            let padded = pad_sequences(&batch, pad_type, "AU", PadLength::Max).unwrap();
            assert!(padded.iter().all(|row| row.chars().count() == 5), "{pad_type}");
            assert_eq!("AUGCC", padded[1]);
        }
    }

    #[test]
    pub fn check_symmetric_uses_batch_size() {
        let batch = vec![vec!["A", "B", "C"], vec!["D"], vec!["E"]];
        let padded =
            pad_sequences(&batch, PadType::Symmetric, "-", PadLength::Fixed(12)).unwrap();
        assert_eq!("A-B-C-------", padded[0]);
        assert_eq!("D-----------", padded[1]);
    }

    #[test]
    pub fn check_pad_with_config() {
        let config = PadConfig::new()
            .with_pad_type(PadType::Dual)
            .with_pad_str("X".to_string())
            .with_pad_length(PadLength::Fixed(5));
        assert_eq!(vec!["XABCX".to_string()], pad_with_config(&abc(), &config).unwrap());
    }

    fn batch_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
        proptest::collection::vec(proptest::collection::vec("[ACGU]{1,3}", 0..40), 1..12)
    }

    fn pad_type_strategy() -> impl Strategy<Value = PadType> {
        prop_oneof![
            Just(PadType::End),
            Just(PadType::Symmetric),
            Just(PadType::Dual)
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn length_invariant(
            batch in batch_strategy(),
            pad_type in pad_type_strategy(),
            pad_str in "[A-Z\\-]{1,4}",
            target in 1usize..160,
        ) {
            let padded = pad_sequences(&batch, pad_type, &pad_str, PadLength::Fixed(target)).unwrap();
            prop_assert_eq!(padded.len(), batch.len());
            for row in &padded {
                prop_assert_eq!(row.chars().count(), target);
            }
        }

        #[test]
        fn truncation_keeps_prefix(
            batch in batch_strategy(),
            pad_type in pad_type_strategy(),
            target in 1usize..60,
        ) {
            let padded = pad_sequences(&batch, pad_type, "AU", PadLength::Fixed(target)).unwrap();
            for (tokens, row) in batch.iter().zip(&padded) {
                let joined = tokens.join_tokens();
                if joined.chars().count() >= target {
                    prop_assert_eq!(row, &truncate(&joined, target));
                }
            }
        }

        #[test]
        fn max_length_resolution(
            batch in batch_strategy(),
            pad_type in pad_type_strategy(),
            pad_str in "[A-Z]{1,4}",
        ) {
            let longest = batch.iter().map(|tokens| tokens.joined_len()).max().unwrap_or(0);
            let padded = pad_sequences(&batch, pad_type, &pad_str, PadLength::Max).unwrap();
            for row in &padded {
                prop_assert_eq!(row.chars().count(), longest);
            }
        }

        #[test]
        fn end_is_idempotent(row in "[ACGU]{1,80}", pad_str in "[A-Z]{1,4}") {
            let target = row.chars().count();
            let batch = vec![row.char_tokens()];
            let padded = pad_sequences(&batch, PadType::End, &pad_str, PadLength::Fixed(target)).unwrap();
            prop_assert_eq!(&padded[0], &row);
        }

        #[test]
        fn end_keeps_row_as_prefix(row in "[ACGU]{0,40}", extra in 1usize..40) {
            let target = row.chars().count() + extra;
            let batch = vec![row.char_tokens()];
            let padded = pad_sequences(&batch, PadType::End, "AU", PadLength::Fixed(target)).unwrap();
            prop_assert!(padded[0].starts_with(&row));
        }

        #[test]
        fn dual_post_gets_extra_unit(row in "[ACGU]{0,40}", reps in 1usize..20) {
            // A gap that is an exact multiple of the unit leaves no tail cut.
            let target = row.chars().count() + reps * 2;
            let padded = pad_dual(&row, "xy", target);
            let pre = padded.find(|c: char| c != 'x' && c != 'y').unwrap_or(padded.len());
            let pre = if row.is_empty() { (reps / 2) * 2 } else { pre };
            let post = padded.chars().count() - pre - row.chars().count();
            prop_assert_eq!(pre, (reps / 2) * 2);
            prop_assert_eq!(post, pre + (reps % 2) * 2);
        }
    }
}
