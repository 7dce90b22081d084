//! Bounded-memory substring search over streamed input.
//!
//! ## Scope
//! This crate finds every occurrence offset of a fixed pattern in a source
//! that may be far larger than available memory, reading it once, left to
//! right. Memory use is `O(ring capacity)` and independent of source length;
//! total work is `O(n)` amortized because every processor invocation
//! discards at least one element and no element is discarded twice.
//!
//! ## Key invariants
//! - The ring never overwrites unread elements and never re-reads popped
//!   ones; breaches are fatal contract errors, not recoverable states.
//! - The matcher sees the ring only through the read-only [`BufferView`]
//!   contract and reports discard counts in `[1, window len]`.
//! - Match offsets are 0-based element positions in the whole stream,
//!   strictly increasing, and complete only once the drain finishes.
//!
//! ## Flow (single session)
//! `Source -> drive -> RingBuffer -> BufferProcessor -> offsets`
//!
//! ## Notable entry points
//! - [`StreamScanner`]: configure a pattern and capacity, then scan one
//!   source to completion.
//! - [`drive`] / [`BufferProcessor`]: the reusable fill/match/drain loop,
//!   open to alternative matching algorithms via the processor seam.
//! - [`Utf8Source`]: streams logical characters from UTF-8 bytes, so
//!   offsets count characters rather than encoded bytes.
//!
//! ```
//! use streamscan::{StreamScanner, Utf8Source};
//!
//! let scanner = StreamScanner::new("abbad".chars(), 5)?;
//! let offsets = scanner.scan(Utf8Source::new("abeccacbadbabbad".as_bytes()))?;
//! assert_eq!(offsets, vec![11]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engine;
pub mod source;
pub mod stdx;

pub use engine::{drive, BufferProcessor, ConfigError, HorspoolMatcher, ScanError, StreamScanner};
pub use source::{Source, Utf8Source};
pub use stdx::ring_buffer::{BufferView, BufferViolation, InvalidCapacity, RingBuffer};
