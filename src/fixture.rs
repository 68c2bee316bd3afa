//! Random sequence generation for synthetic test batches.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::padding::StrTokensExt;

/// A random string over the chars of `alphabet` with a length drawn from
/// the inclusive `length_range`.
pub fn random_string(alphabet: &str, length_range: (usize, usize)) -> String {
    random_string_with(&mut rand::rng(), alphabet, length_range)
}

/// [`random_string`] with a caller-supplied rng.
///
/// An empty `alphabet` yields an empty string; a reversed range is read
/// low-to-high.
pub fn random_string_with<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: &str,
    length_range: (usize, usize),
) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    let (a, b) = length_range;
    let length = rng.random_range(a.min(b)..=a.max(b));

    (0..length)
        .filter_map(|_| symbols.choose(rng).copied())
        .collect()
}

/// `rows` random sequences, each split into one token per char.
pub fn random_batch(alphabet: &str, length_range: (usize, usize), rows: usize) -> Vec<Vec<String>> {
    let mut rng = rand::rng();
    (0..rows)
        .map(|_| random_string_with(&mut rng, alphabet, length_range).char_tokens())
        .collect()
}
