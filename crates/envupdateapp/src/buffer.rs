//! # Bounded Buffers
//!
//! Every string that flows through an edit lives in a [`BoundedBuffer`]: a character
//! buffer whose capacity is fixed when it is created and never grows.
//!
//! ## Invariants
//!
//! - `len() <= capacity()` after every call.
//! - The slot at `len()` and every slot after it hold `'\0'`. The buffer is always
//!   terminated, so a consumer reading raw characters sees a clean string.
//! - A write that does not fit is refused as a whole. The call returns `false` and the
//!   buffer is exactly as it was before the call; there is no truncated copy.
//!
//! ## Capacities
//!
//! Two capacities exist in practice:
//!
//! | Constant | Value | Used for |
//! |----------|-------|----------|
//! | [`DEFAULT_EXCHANGE_CAPACITY`] | 1024 | Strings exchanged with the caller (inputs, result) |
//! | [`LONG_CAPACITY`] | 32768 | Stored lists and edit output (the environment-expansion limit) |
//!
//! The exchange capacity is configurable, the long capacity is not.
//!
//! ## Appends Keep One Slot Free
//!
//! `append` only succeeds while `len() + text.len()` stays *strictly below* the
//! capacity, whereas `assign` accepts a source of exactly `capacity()` characters.
//! A buffer filled purely by appends therefore holds at most `capacity() - 1`
//! characters.
//!
//! ## Embedded NULs
//!
//! Text handed to `assign`, `append` and the comparisons is read up to its first
//! `'\0'`, which is treated as the terminator.
//!
//! ## Comparison
//!
//! [`BoundedBuffer::compare_ignore_case`] is an ordinal comparison of the lowercase
//! mappings of both strings. It is used as an equality test when deduplicating
//! segments; no locale or normalization rules are applied.

use crate::error::{EnvUpdateError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Capacity of the long buffers that hold stored lists and edit output.
pub const LONG_CAPACITY: usize = 32768;

/// Default capacity of the buffers used to exchange strings with the caller.
pub const DEFAULT_EXCHANGE_CAPACITY: usize = 1024;

/// A fixed-capacity, always-terminated character buffer.
///
/// The storage is allocated once in [`BoundedBuffer::new`] and released when the
/// buffer is dropped. No operation reallocates.
pub struct BoundedBuffer {
    // capacity + 1 slots; slots[len..] are all '\0'
    slots: Box<[char]>,
    len: usize,
}

impl BoundedBuffer {
    /// Allocates a zero-filled buffer with room for `capacity` characters plus the
    /// terminator.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(EnvUpdateError::InvalidCapacity(capacity));
        }
        let size = capacity
            .checked_add(1)
            .ok_or(EnvUpdateError::Allocation(capacity))?;

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size)
            .map_err(|_| EnvUpdateError::Allocation(capacity))?;
        slots.resize(size, '\0');

        Ok(Self {
            slots: slots.into_boxed_slice(),
            len: 0,
        })
    }

    /// Maximum number of characters, excluding the terminator.
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current content, without the terminator.
    pub fn as_chars(&self) -> &[char] {
        &self.slots[..self.len]
    }

    /// Replaces the content with `source`. Succeeds iff `source` fits.
    pub fn assign(&mut self, source: &str) -> bool {
        let count = terminated(source).count();
        if count > self.capacity() {
            return false;
        }
        self.clear();
        self.write_at(0, terminated(source));
        self.len = count;
        true
    }

    /// Replaces the content with a copy of another buffer's content.
    pub fn assign_buffer(&mut self, source: &BoundedBuffer) -> bool {
        self.assign_slice(source.as_chars(), 0, source.len())
    }

    /// Replaces the content with `source[offset..offset + length]`.
    ///
    /// Succeeds iff `length <= capacity()`. A range outside `source` is refused
    /// as well. Copying stops early at a `'\0'` inside the range.
    pub fn assign_slice(&mut self, source: &[char], offset: usize, length: usize) -> bool {
        let Some(range) = offset
            .checked_add(length)
            .and_then(|end| source.get(offset..end))
        else {
            return false;
        };
        if length > self.capacity() {
            return false;
        }

        let count = range.iter().position(|c| *c == '\0').unwrap_or(length);
        self.clear();
        self.slots[..count].copy_from_slice(&range[..count]);
        self.len = count;
        true
    }

    /// Appends `text`. Succeeds iff the combined length stays below `capacity()`.
    pub fn append(&mut self, text: &str) -> bool {
        let count = terminated(text).count();
        if !self.has_room_for(count) {
            return false;
        }
        let at = self.len;
        self.len += self.write_at(at, terminated(text));
        true
    }

    /// Appends another buffer's content, with the same rule as [`Self::append`].
    pub fn append_buffer(&mut self, text: &BoundedBuffer) -> bool {
        if !self.has_room_for(text.len()) {
            return false;
        }
        let at = self.len;
        self.len += self.write_at(at, text.as_chars().iter().copied());
        true
    }

    /// Appends `text` unless the buffer is empty, in which case nothing happens and
    /// the call succeeds. Used to place delimiters between segments.
    pub fn append_if_not_empty(&mut self, text: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        self.append(text)
    }

    /// Empties the buffer, zero-filling the characters that were in use.
    pub fn clear(&mut self) {
        self.slots[..self.len].fill('\0');
        self.len = 0;
    }

    pub fn compare_ignore_case(&self, other: &str) -> Ordering {
        cmp_folded(self.as_chars().iter().copied(), terminated(other))
    }

    pub fn compare_ignore_case_buffer(&self, other: &BoundedBuffer) -> Ordering {
        cmp_folded(
            self.as_chars().iter().copied(),
            other.as_chars().iter().copied(),
        )
    }

    pub fn eq_ignore_case(&self, other: &BoundedBuffer) -> bool {
        self.compare_ignore_case_buffer(other) == Ordering::Equal
    }

    fn has_room_for(&self, count: usize) -> bool {
        self.len
            .checked_add(count)
            .is_some_and(|total| total < self.capacity())
    }

    // Callers check capacity first; zip stops at the terminator slot at the latest.
    fn write_at<I: Iterator<Item = char>>(&mut self, at: usize, text: I) -> usize {
        let mut written = 0;
        for (slot, c) in self.slots[at..].iter_mut().zip(text) {
            *slot = c;
            written += 1;
        }
        written
    }
}

impl fmt::Display for BoundedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for c in self.as_chars() {
            f.write_char(*c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoundedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBuffer")
            .field("capacity", &self.capacity())
            .field("content", &self.to_string())
            .finish()
    }
}

/// Case-insensitive equality of two strings, using the same folding as
/// [`BoundedBuffer::compare_ignore_case`].
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    cmp_folded(terminated(a), terminated(b)) == Ordering::Equal
}

fn terminated(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().take_while(|c| *c != '\0')
}

fn cmp_folded<A, B>(a: A, b: B) -> Ordering
where
    A: Iterator<Item = char>,
    B: Iterator<Item = char>,
{
    a.flat_map(char::to_lowercase)
        .cmp(b.flat_map(char::to_lowercase))
}
