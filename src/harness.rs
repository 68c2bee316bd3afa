//! Self-test of the length invariant over random batches.
//!
//! For every requested length and every policy, pads a freshly generated
//! batch and records which rows missed the resolved target.

use derive_new::new;
use serde::Serialize;

use crate::error::Result;
use crate::fixture::random_batch;
use crate::padding::{pad_sequences, resolve_pad_length, PadLength, PadType, DEFAULT_PAD_STR};

#[derive(new, Clone, Debug)]
pub struct CheckOptions {
    /// Symbols to draw random rows from.
    pub alphabet: String,
    /// Inclusive range of row lengths.
    pub length_range: (usize, usize),
    /// Rows per batch.
    pub rows: usize,
    pub pad_str: String,
    pub lengths: Vec<PadLength>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            alphabet: "-".to_string(),
            length_range: (1, 200),
            rows: 20,
            pad_str: DEFAULT_PAD_STR.to_string(),
            lengths: vec![PadLength::Fixed(145), PadLength::Max],
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CheckOutcome {
    pub pad_type: PadType,
    pub pad_length: PadLength,
    /// Resolved target length.
    pub target: usize,
    /// `(row, length)` of every row that missed `target`.
    pub mismatched: Vec<(usize, usize)>,
    #[serde(skip)]
    pub padded: Vec<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.mismatched.is_empty()
    }
}

/// Run every policy against every length in `options`.
pub fn run_length_checks(options: &CheckOptions) -> Result<Vec<CheckOutcome>> {
    let batch = random_batch(&options.alphabet, options.length_range, options.rows);
    for tokens in &batch {
        log::debug!("input length {}", tokens.len());
    }

    let mut outcomes = Vec::with_capacity(options.lengths.len() * PadType::ALL.len());
    for &pad_length in &options.lengths {
        let target = resolve_pad_length(&batch, pad_length)?;
        for pad_type in PadType::ALL {
            let padded = pad_sequences(&batch, pad_type, &options.pad_str, pad_length)?;
            let mismatched: Vec<(usize, usize)> = padded
                .iter()
                .map(|row| row.chars().count())
                .enumerate()
                .filter(|&(_, length)| length != target)
                .collect();

            let outcome = CheckOutcome {
                pad_type,
                pad_length,
                target,
                mismatched,
                padded,
            };

            if outcome.passed() {
                log::info!("Succeeded '{pad_type}' with '{pad_length}' length.");
                for row in &outcome.padded {
                    log::debug!("{}: {row}", row.chars().count());
                }
            } else {
                log::warn!(
                    "Failed test for '{pad_type}' with '{pad_length}' length: {} rows off target {target}",
                    outcome.mismatched.len()
                );
            }
            outcomes.push(outcome);
        }
    }

    Ok(outcomes)
}
