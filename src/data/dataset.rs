use burn::data::dataset::Dataset;
use derive_new::new;

use crate::config::PadConfig;
use crate::encoding::{batch_encode, EncodedRow};
use crate::error::Result;
use crate::padding::pad_with_config;

#[derive(new, Clone, Debug, PartialEq)]
pub struct PaddedItem {
    /// Row index in the source batch.
    pub index: usize,
    pub sequence: String,
}

/// A padded batch served row by row.
pub struct PaddedDataset {
    rows: Vec<String>,
    config: PadConfig,
}

/// Implement dataset trait for padded rows
/// ref <https://docs.rs/burn-dataset/latest/burn_dataset/trait.Dataset.html>
impl Dataset<PaddedItem> for PaddedDataset {
    fn get(&self, index: usize) -> Option<PaddedItem> {
        self.rows
            .get(index)
            .map(|sequence| PaddedItem::new(index, sequence.clone()))
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

impl PaddedDataset {
    /// Pad `sequences` with `config` and hold the result.
    pub fn new<S: AsRef<str>>(sequences: &[Vec<S>], config: PadConfig) -> Result<Self> {
        let rows = pad_with_config(sequences, &config)?;
        Ok(Self { rows, config })
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Encode every row with the configured encoding and alphabet.
    pub fn encode(&self) -> Result<Vec<EncodedRow>> {
        let alphabet = self.config.shared_alphabet();
        batch_encode(&self.rows, self.config.encoding_type, alphabet.as_ref())
    }
}
