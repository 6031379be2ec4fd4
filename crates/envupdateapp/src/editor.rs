//! # List Editor
//!
//! Rebuilds a delimiter-separated list with one segment appended, prepended or
//! removed, keeping every segment at most once under case-insensitive
//! whole-segment comparison.
//!
//! ## Algorithm
//!
//! Every action is one linear pass over the source segments (see
//! [`crate::tokenizer`]). Segments equal to the target are dropped; all others are
//! copied to the output in order, each preceded by the delimiter unless the output
//! is still empty.
//!
//! - **Append**: copy the filtered segments, then write the target last.
//! - **Prepend**: write the target first, then copy the filtered segments.
//! - **Remove**: copy the filtered segments only.
//!
//! Partial matches never count: with target `C:\Foo`, the segment `C:\Foo\bin`
//! is kept.
//!
//! ## Failure Is Best-Effort
//!
//! A write that does not fit the output is refused (the output keeps its previous
//! content) and marks the edit as failed, but the pass keeps going: every later
//! write is still attempted. On failure the output therefore holds every piece
//! that fit, which callers may show but must not persist.

use crate::buffer::BoundedBuffer;
use crate::model::Action;
use crate::tokenizer::next_token;
use tracing::{debug, warn};

pub const DEFAULT_DELIMITER: char = ';';

/// Success flag for a run of writes that must all be attempted.
///
/// Unlike `&&`, recording a failure never skips the writes that follow.
#[derive(Debug)]
struct BestEffort {
    ok: bool,
}

impl BestEffort {
    fn new() -> Self {
        Self { ok: true }
    }

    fn record(&mut self, step: bool) {
        self.ok &= step;
    }

    fn finish(self) -> bool {
        self.ok
    }
}

#[derive(Debug, Clone)]
pub struct ListEditor {
    delimiter: char,
    delimiter_text: String,
}

impl Default for ListEditor {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl ListEditor {
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            delimiter_text: delimiter.to_string(),
        }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Applies `action` to `source` with `target` and writes the new list to `out`.
    ///
    /// `out` is expected to be empty. Returns `false` for [`Action::NoOp`] (leaving
    /// `out` untouched) and whenever any write into `out` was refused.
    pub fn edit(
        &self,
        action: Action,
        source: &BoundedBuffer,
        target: &BoundedBuffer,
        out: &mut BoundedBuffer,
    ) -> bool {
        if action == Action::NoOp {
            return false;
        }

        // Sized to the whole source, so any single segment fits.
        let mut segment = match BoundedBuffer::new(source.len().max(1)) {
            Ok(buf) => buf,
            Err(e) => {
                warn!("cannot allocate segment buffer: {}", e);
                return false;
            }
        };

        let mut progress = BestEffort::new();

        if action == Action::Prepend {
            progress.record(out.append_buffer(target));
        }

        let mut cursor = 0;
        let mut dropped = 0usize;
        while next_token(source, self.delimiter, &mut cursor, &mut segment) {
            if segment.eq_ignore_case(target) {
                dropped += 1;
                continue;
            }
            self.push_segment(out, &segment, &mut progress);
        }

        if action == Action::Append {
            self.push_segment(out, target, &mut progress);
        }

        let ok = progress.finish();
        debug!(
            %action,
            dropped,
            out_len = out.len(),
            ok,
            "edited list"
        );
        ok
    }

    fn push_segment(
        &self,
        out: &mut BoundedBuffer,
        segment: &BoundedBuffer,
        progress: &mut BestEffort,
    ) {
        progress.record(out.append_if_not_empty(&self.delimiter_text));
        progress.record(out.append_buffer(segment));
    }
}
