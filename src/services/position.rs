//! Validated record addressing.
//!
//! Users see 1-based indices; repositories use 0-based offsets. A `Position`
//! is the single place the two meet.

use std::fmt;

/// A bounds-checked location in a [`ContactStore`](super::ContactStore).
///
/// Positions are only handed out by the store after checking the index
/// against the current count. A position obtained before a delete may point
/// past the end afterwards; store operations re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    offset: usize,
}

impl Position {
    pub(crate) fn from_offset(offset: usize) -> Self {
        Self { offset }
    }

    /// 0-based offset used by repositories.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based index shown to users.
    pub fn index(&self) -> usize {
        self.offset + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
