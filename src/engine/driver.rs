//! Fill/match/drain loop connecting a source, a ring, and a processor.
//!
//! The driver owns all mutation of the ring: it pushes pulled elements until
//! the ring is full, hands the processor a read-only view, then pops exactly
//! the discard count the processor returned. Once the source is exhausted it
//! keeps processing with the final-drain flag until the ring is empty.
//!
//! # Failure semantics
//! Every error is fatal to the session. A contract breach in the ring, an
//! out-of-range discard count, or a source failure aborts the scan and
//! drops any offsets collected so far; nothing is retried.

use std::fmt;
use std::hash::Hash;
use std::io;

use tracing::{debug, trace};

use crate::engine::horspool::HorspoolMatcher;
use crate::engine::ConfigError;
use crate::source::Source;
use crate::stdx::ring_buffer::{BufferView, BufferViolation, RingBuffer};

/// Single-method processing seam between the driver and a matching
/// algorithm.
///
/// `process` receives the current window read-only and answers with the
/// number of elements the driver should discard, in `[1, window.len()]`.
/// Any `FnMut` of the same shape implements the trait, so a closure can
/// stand in for a full matcher and the driver is reusable as-is.
pub trait BufferProcessor<T> {
    /// Inspects the window; `final_drain` is set once the source is
    /// exhausted and the window can no longer grow.
    fn process(
        &mut self,
        window: &dyn BufferView<T>,
        final_drain: bool,
    ) -> Result<usize, BufferViolation>;
}

impl<T, F> BufferProcessor<T> for F
where
    F: FnMut(&dyn BufferView<T>, bool) -> Result<usize, BufferViolation>,
{
    fn process(
        &mut self,
        window: &dyn BufferView<T>,
        final_drain: bool,
    ) -> Result<usize, BufferViolation> {
        self(window, final_drain)
    }
}

/// Fatal scan failure.
///
/// Partial results never survive one of these; the session's offsets are
/// dropped together with the error.
#[derive(Debug)]
#[non_exhaustive]
pub enum ScanError {
    /// Ring contract breach: overwrite, overread, or out-of-range peek.
    Buffer(BufferViolation),
    /// Processor returned a discard count outside `[1, len]`.
    IllegalDiscard { returned: usize, len: usize },
    /// Source failure, propagated unchanged.
    Io(io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(violation) => write!(f, "buffer contract violated: {violation}"),
            Self::IllegalDiscard { returned, len } => write!(
                f,
                "processor returned discard count {returned}, outside [1, {len}]"
            ),
            Self::Io(err) => write!(f, "source error: {err}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Buffer(violation) => Some(violation),
            Self::Io(err) => Some(err),
            Self::IllegalDiscard { .. } => None,
        }
    }
}

impl From<BufferViolation> for ScanError {
    fn from(violation: BufferViolation) -> Self {
        Self::Buffer(violation)
    }
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Runs one session to completion and returns the total elements pulled.
///
/// States: fill the ring from the source; once full, let the processor
/// discard; loop until the source is exhausted; then drain the remainder
/// with `final_drain` set. The ring is empty when this returns `Ok`.
pub fn drive<T, S, P>(
    source: &mut S,
    ring: &mut RingBuffer<T>,
    processor: &mut P,
) -> Result<u64, ScanError>
where
    S: Source<Item = T> + ?Sized,
    P: BufferProcessor<T> + ?Sized,
{
    let mut pulled: u64 = 0;

    while let Some(element) = source.pull()? {
        ring.push(element)?;
        pulled += 1;
        if ring.is_full() {
            discard(ring, processor, false)?;
        }
    }
    trace!(pulled, remaining = ring.len(), "source exhausted, draining");

    while !ring.is_empty() {
        discard(ring, processor, true)?;
    }
    debug!(pulled, "scan complete");
    Ok(pulled)
}

/// Runs the processor once and pops exactly the count it returned.
fn discard<T, P>(
    ring: &mut RingBuffer<T>,
    processor: &mut P,
    final_drain: bool,
) -> Result<(), ScanError>
where
    P: BufferProcessor<T> + ?Sized,
{
    let n = processor.process(&*ring, final_drain)?;
    if n == 0 || n > ring.len() {
        return Err(ScanError::IllegalDiscard {
            returned: n,
            len: ring.len(),
        });
    }
    for _ in 0..n {
        ring.pop()?;
    }
    Ok(())
}

/// One configured scan session: a Horspool matcher plus a ring of fixed
/// capacity.
///
/// Construction validates everything eagerly; `scan` then reads the source
/// exactly once. The session is consumed by the scan and never reused.
#[derive(Debug)]
pub struct StreamScanner<T> {
    ring: RingBuffer<T>,
    matcher: HorspoolMatcher<T>,
}

impl<T: Clone + Eq + Hash> StreamScanner<T> {
    /// Validates the pattern and capacity; no source element is consumed
    /// here.
    pub fn new<I>(pattern: I, capacity: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
    {
        let matcher = HorspoolMatcher::new(pattern)?;
        let ring = RingBuffer::with_capacity(capacity).map_err(|_| ConfigError::ZeroCapacity)?;
        if ring.capacity() < matcher.pattern_len() {
            return Err(ConfigError::CapacityTooSmall {
                capacity,
                pattern_len: matcher.pattern_len(),
            });
        }
        Ok(Self { ring, matcher })
    }

    /// Runs the session to completion and returns every match offset.
    ///
    /// Offsets are 0-based element positions in the whole stream, in
    /// strictly increasing order. Any contract breach or source failure
    /// aborts the scan; offsets collected before the failure are dropped
    /// with it.
    pub fn scan<S>(mut self, mut source: S) -> Result<Vec<u64>, ScanError>
    where
        S: Source<Item = T>,
    {
        let pulled = drive(&mut source, &mut self.ring, &mut self.matcher)?;
        debug_assert_eq!(
            pulled,
            self.matcher.consumed(),
            "every pulled element is discarded exactly once"
        );
        Ok(self.matcher.into_matches())
    }
}
