//! # Segment Tokenizer
//!
//! Splits a buffer's content into segments separated by a single delimiter. The
//! tokenizer holds no state of its own; the caller threads a cursor through
//! successive [`next_token`] calls, starting at 0.
//!
//! ## Boundary Behaviour
//!
//! A call returns `false` as soon as the cursor has reached the content length, so
//! the segments produced for a given content are:
//!
//! | Content | Segments |
//! |---------|----------|
//! | `""` | none |
//! | `"a;b"` | `"a"`, `"b"` |
//! | `";a"` | `""`, `"a"` |
//! | `"a;;b"` | `"a"`, `""`, `"b"` |
//! | `"a;"` | `"a"` |
//! | `"a;;"` | `"a"`, `""` |
//!
//! Joining the segments back with the delimiter reproduces the content, except that
//! the final trailing delimiter is absorbed: `"a;"` and `"a"` split identically, and
//! `"a;;"` keeps one empty trailing segment. Edits therefore normalize away a single
//! trailing delimiter and keep the empty segment produced by a doubled one.

use crate::buffer::BoundedBuffer;

/// Copies the next segment of `buffer` into `out` and advances `cursor` past it.
///
/// Returns `false` without touching `out` when there are no segments left. When
/// the segment does not fit in `out`, the cursor still advances but the call
/// returns `false` and `out` is left unchanged.
pub fn next_token(
    buffer: &BoundedBuffer,
    delimiter: char,
    cursor: &mut usize,
    out: &mut BoundedBuffer,
) -> bool {
    let content = buffer.as_chars();
    let start = *cursor;
    if start >= content.len() {
        return false;
    }

    let end = content[start..]
        .iter()
        .position(|c| *c == delimiter)
        .map_or(content.len(), |offset| start + offset);

    let stored = out.assign_slice(content, start, end - start);
    *cursor = end + 1;
    stored
}
