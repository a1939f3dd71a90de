//! Discourse unit construction
//!
//! Materializes [`DiscourseUnit`] records from the sorted boundary token
//! indices produced by [`crate::decode`]. Spans are byte offsets into the
//! original text; the unit sequence is a strict partition of the token
//! sequence.

use crate::error::{CoreError, Result};
use crate::types::{DiscourseUnit, Nuclearity, Token, ELEMENTARY};

/// Builds the ordered discourse unit sequence for a document.
///
/// `numbers` are the absolute token indices that start a unit, sorted
/// ascending. Each unit runs from its start token's `begin` offset up to
/// the next start token's `begin`; the recorded `end` offset stops one
/// byte short of that, so the trailing separator before the next unit
/// belongs to the current one. The last unit runs to the final token's
/// `end`. Ids are assigned `start_id + i` in emission order.
///
/// An empty `numbers` yields an empty sequence. A boundary index outside
/// the token sequence, or token offsets that do not address a valid
/// substring of `text`, are precondition violations.
pub fn build_units(
    text: &str,
    tokens: &[Token],
    numbers: &[usize],
    start_id: usize,
) -> Result<Vec<DiscourseUnit>> {
    if numbers.is_empty() {
        return Ok(Vec::new());
    }
    if let Some(&index) = numbers.iter().find(|&&n| n >= tokens.len()) {
        return Err(CoreError::BoundaryIndexOutOfRange {
            index,
            token_count: tokens.len(),
        });
    }
    debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));

    let mut units = Vec::with_capacity(numbers.len());

    for (i, pair) in numbers.windows(2).enumerate() {
        let start = tokens[pair[0]].begin;
        let next = tokens[pair[1]].begin;
        // A later boundary token starting at offset 0 means the token
        // offsets are not monotonic; refuse the corrupt annotation
        // instead of wrapping.
        let end = next.checked_sub(1).ok_or(CoreError::SpanOutOfRange {
            start,
            end: next,
            text_len: text.len(),
        })?;
        units.push(DiscourseUnit {
            id: start_id + i,
            start,
            end,
            text: slice_span(text, start, next)?.to_string(),
            relation: ELEMENTARY.to_string(),
            nuclearity: Nuclearity::Unset,
        });
    }

    // Tail unit from the last boundary to the end of the token sequence.
    // tokens is non-empty here: numbers is non-empty and in range.
    let start = tokens[numbers[numbers.len() - 1]].begin;
    let end = tokens[tokens.len() - 1].end;
    units.push(DiscourseUnit {
        id: start_id + numbers.len() - 1,
        start,
        end,
        text: slice_span(text, start, end)?.to_string(),
        relation: ELEMENTARY.to_string(),
        nuclearity: Nuclearity::Unset,
    });

    Ok(units)
}

/// Slices `text[start..end]`, rejecting out-of-range offsets and offsets
/// that fall inside a UTF-8 character.
fn slice_span(text: &str, start: usize, end: usize) -> Result<&str> {
    text.get(start..end).ok_or(CoreError::SpanOutOfRange {
        start,
        end,
        text_len: text.len(),
    })
}
