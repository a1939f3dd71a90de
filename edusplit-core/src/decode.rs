//! Boundary decoding
//!
//! Turns raw per-token boundary probabilities into a structurally valid
//! boundary vector per sentence, then into absolute token indices over a
//! whole document. Decoding is a pure function of the probability stream;
//! model scores only ever suggest boundaries, the hard constraints below
//! always win.

use crate::types::BoundaryVec;

/// Default probability threshold above which a token starts a new unit.
pub const DEFAULT_THRESHOLD: f32 = 0.35;

/// Decodes one sentence's boundary probabilities into a valid boundary
/// vector.
///
/// Invariants of the output for a non-empty sentence:
/// - position 0 is always `true`,
/// - no two adjacent positions are both `true`.
///
/// The repair pass is a single left-to-right scan over a working copy:
/// when positions `j` and `j + 1` are both on, the forced boundary at
/// position 0 wins its conflict, otherwise the later boundary wins. A
/// boundary turned off stays off for the rest of the scan.
pub fn decode_sentence(probs: &[f32], threshold: f32) -> BoundaryVec {
    let mut flags: BoundaryVec = probs.iter().map(|&p| p > threshold).collect();

    if let Some(first) = flags.first_mut() {
        *first = true;
    }

    for j in 0..flags.len().saturating_sub(1) {
        if flags[j] && flags[j + 1] {
            if j == 0 {
                flags[j + 1] = false;
            } else {
                flags[j] = false;
            }
        }
    }

    flags
}

/// Decodes a whole document's per-sentence probabilities into the sorted
/// list of absolute token indices that start a discourse unit.
///
/// Sentence vectors are concatenated in document order against the flat
/// token sequence; an empty sentence contributes nothing.
pub fn decode_document(sentence_probs: &[Vec<f32>], threshold: f32) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut offset = 0;

    for probs in sentence_probs {
        let flags = decode_sentence(probs, threshold);
        starts.extend(
            flags
                .iter()
                .enumerate()
                .filter(|(_, &on)| on)
                .map(|(j, _)| offset + j),
        );
        offset += probs.len();
    }

    starts
}
