//! Per-row fill routines.
//!
//! Every routine cuts from the tail when the row is already at or past
//! `target`, and otherwise assembles pad material around the row before
//! cutting the assembled string back to `target` chars.

use super::tokens::TokenSliceExt;

/// Keep the first `target` chars.
pub fn truncate(sequence: &str, target: usize) -> String {
    sequence.chars().take(target).collect()
}

/// Append tiled `pad_str` after the row.
pub fn pad_end(sequence: &str, pad_str: &str, target: usize) -> String {
    let length = sequence.chars().count();
    if length >= target {
        return truncate(sequence, target);
    }

    let gap = target - length;
    let reps = gap.div_ceil(pad_str.chars().count());

    let mut padded = String::with_capacity(sequence.len() + reps * pad_str.len());
    padded.push_str(sequence);
    padded.push_str(&pad_str.repeat(reps));

    truncate(&padded, target)
}

/// Split whole pad units between both ends; an odd unit goes to the tail.
pub fn pad_dual(sequence: &str, pad_str: &str, target: usize) -> String {
    let length = sequence.chars().count();
    if length >= target {
        return truncate(sequence, target);
    }

    let gap = target - length;
    let reps = gap.div_ceil(pad_str.chars().count());
    let pre_reps = reps / 2;
    let post_reps = pre_reps + reps % 2;

    let mut padded = pad_str.repeat(pre_reps);
    padded.push_str(sequence);
    padded.push_str(&pad_str.repeat(post_reps));

    truncate(&padded, target)
}

/// Interleave pad units between the row's tokens, then finish with
/// [`pad_end`].
///
/// `num_chunks` is the size of the whole batch. The number of pad units
/// available for interleaving is `(num_chunks - 1) * num_sub_chunk` where
/// `num_sub_chunk = gap / ((num_chunks - 1) * len(pad_str))`. When
/// `num_sub_chunk <= 1` (including a single-row batch) the row is padded
/// with [`pad_end`] alone.
///
/// Tokens and pad units are paired up to the shorter of the two, so a row
/// with more tokens than available units keeps only the first `units`
/// tokens. The interleaved material never reaches `target`, and the
/// closing [`pad_end`] brings the row to exactly `target` chars.
pub fn pad_symmetric<S: AsRef<str>>(
    tokens: &[S],
    pad_str: &str,
    target: usize,
    num_chunks: usize,
) -> String {
    let sequence = tokens.join_tokens();
    let length = sequence.chars().count();
    if length >= target {
        return truncate(&sequence, target);
    }

    let gap = target - length;
    let slots = num_chunks.saturating_sub(1);
    let num_sub_chunk = match slots {
        0 => 0,
        _ => gap / (slots * pad_str.chars().count()),
    };

    if num_sub_chunk <= 1 {
        log::trace!("no room to interleave (gap {gap}, {num_chunks} chunks); padding at end");
        return pad_end(&sequence, pad_str, target);
    }

    let units = slots * num_sub_chunk;
    let mut interleaved = String::with_capacity(target * 4);
    for (i, token) in tokens.iter().take(units).enumerate() {
        if i > 0 {
            interleaved.push_str(pad_str);
        }
        interleaved.push_str(token.as_ref());
    }

    pad_end(&interleaved, pad_str, target)
}
