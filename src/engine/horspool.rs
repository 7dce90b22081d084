//! Sliding-window Boyer-Moore-Horspool matcher.
//!
//! The matcher never touches the source. It reads the oldest
//! `pattern_len` elements of the buffered window through [`BufferView`],
//! records a match when all of them agree with the pattern, and answers with
//! the number of elements the driver may discard. Skips come from the
//! classic Horspool table keyed by the element at the last window position,
//! so non-matching alignments advance faster than one element at a time.
//!
//! # Invariants
//! - The skip table is built once at construction and never mutated.
//! - `consumed` equals the total number of elements discarded across the
//!   session and only grows.
//! - Recorded offsets are strictly increasing and 0-based against the whole
//!   stream, not the window.
//!
//! After a full match the matcher still advances by the table skip, not by
//! the whole pattern length; overlapping occurrences are therefore all
//! reported (`"aa"` over `"aaa"` yields offsets 0 and 1).

use std::hash::Hash;

use ahash::AHashMap;

use crate::engine::driver::BufferProcessor;
use crate::engine::ConfigError;
use crate::stdx::ring_buffer::{BufferView, BufferViolation};

/// Horspool matcher over a stream of elements of type `T`.
///
/// One matcher serves one scan session: it accumulates offsets across every
/// [`advance`](Self::advance) call and hands them over once the stream is
/// fully drained.
#[derive(Debug)]
pub struct HorspoolMatcher<T> {
    pattern: Box<[T]>,
    /// Skip distance per element value; values absent from the table skip
    /// the whole pattern length.
    skip: AHashMap<T, usize>,
    /// Total elements discarded so far; also the stream offset of the
    /// window's oldest element.
    consumed: u64,
    matches: Vec<u64>,
}

impl<T: Clone + Eq + Hash> HorspoolMatcher<T> {
    /// Builds the matcher and its skip table.
    ///
    /// Every element occurring anywhere in the pattern except its last
    /// position maps to the distance from its rightmost such occurrence to
    /// the pattern end.
    pub fn new<I>(pattern: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
    {
        let pattern: Box<[T]> = pattern.into_iter().collect();
        if pattern.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }
        let m = pattern.len();
        let mut skip = AHashMap::with_capacity(m - 1);
        for (i, element) in pattern.iter().take(m - 1).enumerate() {
            // Later insertions win, so the rightmost occurrence decides.
            skip.insert(element.clone(), m - 1 - i);
        }
        Ok(Self {
            pattern,
            skip,
            consumed: 0,
            matches: Vec::new(),
        })
    }

    /// Number of elements in the pattern.
    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Total elements discarded across the session so far.
    #[inline]
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Offsets recorded so far; complete only once the stream is drained.
    pub fn matches(&self) -> &[u64] {
        &self.matches
    }

    /// Consumes the matcher and returns the accumulated offsets.
    pub fn into_matches(self) -> Vec<u64> {
        self.matches
    }

    /// Inspects the window and returns how many elements may be discarded.
    ///
    /// The count is in `[1, window.len()]` for any non-empty window. A
    /// window shorter than the pattern can never hold a full alignment and
    /// is handed back whole; given the capacity precondition this only
    /// happens on the final drain.
    pub fn advance(
        &mut self,
        window: &dyn BufferView<T>,
        final_drain: bool,
    ) -> Result<usize, BufferViolation> {
        let m = self.pattern.len();
        let available = window.len();
        debug_assert!(
            final_drain || available >= m,
            "driver must fill the ring before matching"
        );

        if available < m {
            self.consumed += available as u64;
            return Ok(available);
        }

        // Compare right to left against the oldest `m` elements.
        let mut j = m;
        while j > 0 && *window.peek(j - 1)? == self.pattern[j - 1] {
            j -= 1;
        }
        if j == 0 {
            // The window's oldest element sits at stream offset `consumed`.
            self.matches.push(self.consumed);
        }

        let last = window.peek(m - 1)?;
        let shift = self.skip.get(last).copied().unwrap_or(m);
        self.consumed += shift as u64;
        Ok(shift)
    }
}

impl<T: Clone + Eq + Hash> BufferProcessor<T> for HorspoolMatcher<T> {
    fn process(
        &mut self,
        window: &dyn BufferView<T>,
        final_drain: bool,
    ) -> Result<usize, BufferViolation> {
        self.advance(window, final_drain)
    }
}
