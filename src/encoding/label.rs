use std::collections::BTreeSet;

use ndarray::Array1;

use super::Categorical;
use crate::error::{PadError, Result};

/// Sorted set of distinct symbols; a symbol's code is its position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Distinct chars of `symbols`, in lexicographic order.
    pub fn from_symbols(symbols: &str) -> Self {
        Self::from_chars(symbols.chars())
    }

    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let symbols: BTreeSet<char> = chars.into_iter().collect();
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// One alphabet covering every row, for a shared one-hot column space.
    pub fn from_batch<S: AsRef<str>>(batch: &[S]) -> Self {
        Self::from_chars(batch.iter().flat_map(|row| row.as_ref().chars()))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.binary_search(&symbol).ok()
    }

    pub fn symbol(&self, code: u32) -> Option<char> {
        self.symbols.get(code as usize).copied()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

/// Maps each distinct symbol to a small integer code.
///
/// Codes follow the sorted order of the fitted alphabet, so `"UUAA"` fits
/// to `A -> 0, U -> 1`.
#[derive(Clone, Debug, Default)]
pub struct LabelEncoder {
    alphabet: Alphabet,
}

impl LabelEncoder {
    /// An encoder already fitted to `alphabet`.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl Categorical for LabelEncoder {
    fn fit(&mut self, symbols: &[char]) {
        self.alphabet = Alphabet::from_chars(symbols.iter().copied());
    }

    fn transform(&self, symbols: &[char], row: usize) -> Result<Array1<u32>> {
        symbols
            .iter()
            .map(|&symbol| {
                self.alphabet
                    .index_of(symbol)
                    .map(|code| code as u32)
                    .ok_or(PadError::UnknownSymbol { symbol, row })
            })
            .collect::<Result<Vec<u32>>>()
            .map(Array1::from)
    }

    fn inverse_transform(&self, codes: &[u32]) -> String {
        codes
            .iter()
            .filter_map(|&code| self.alphabet.symbol(code))
            .collect()
    }

    fn width(&self) -> usize {
        self.alphabet.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn check_alphabet_sorted() {
        let alphabet = Alphabet::from_symbols("UGAUCA");
        assert_eq!(&['A', 'C', 'G', 'U'], alphabet.symbols());
        assert_eq!(Some(2), alphabet.index_of('G'));
        assert_eq!(None, alphabet.index_of('T'));
    }

    #[test]
    pub fn check_alphabet_from_batch() {
        let alphabet = Alphabet::from_batch(&["AAUU", "GGAA"]);
        assert_eq!(&['A', 'G', 'U'], alphabet.symbols());
    }

    #[test]
    pub fn check_fit_transform() {
        let symbols: Vec<char> = "UUAG".chars().collect();
        let mut encoder = LabelEncoder::default();
        let codes = encoder.fit_transform(&symbols, 0).unwrap();
        assert_eq!(vec![2, 2, 0, 1], codes.to_vec());
        assert_eq!(3, encoder.width());
        assert_eq!("UUAG", encoder.inverse_transform(codes.as_slice().unwrap()));
    }

    #[test]
    pub fn check_unknown_symbol() {
        let encoder = LabelEncoder::with_alphabet(Alphabet::from_symbols("AU"));
        let symbols: Vec<char> = "AUG".chars().collect();
        let err = encoder.transform(&symbols, 3).unwrap_err();
        assert!(matches!(err, PadError::UnknownSymbol { symbol: 'G', row: 3 }));
    }
}
