use burn::config::Config;

use crate::encoding::{Alphabet, EncodingType};
use crate::padding::{PadLength, PadType};

/// Padding and encoding settings, loadable from and savable to JSON.
#[derive(Config, Debug)]
pub struct PadConfig {
    /// Placement of pad material.
    #[config(default = "PadType::End")]
    pub pad_type: PadType,
    /// Repeating filler unit.
    #[config(default = "String::from(crate::padding::DEFAULT_PAD_STR)")]
    pub pad_str: String,
    /// Target row length, or `"max"` for the longest row.
    #[config(default = "PadLength::Fixed(148)")]
    pub pad_length: PadLength,
    #[config(default = "EncodingType::OneHot")]
    pub encoding_type: EncodingType,
    /// Symbols of a shared one-hot column space; per-row alphabets when unset.
    pub alphabet: Option<String>,
}

impl PadConfig {
    pub fn shared_alphabet(&self) -> Option<Alphabet> {
        self.alphabet.as_deref().map(Alphabet::from_symbols)
    }
}
