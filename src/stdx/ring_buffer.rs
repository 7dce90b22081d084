//! Fixed-capacity FIFO ring buffer with `MaybeUninit<T>` slot storage.
//!
//! The ring holds the currently unread tail of a stream: elements are pushed
//! at the write cursor, popped at the read cursor, and peeked at an offset
//! from the oldest unread element. Capacity is chosen at construction and
//! never changes; storage is reused cyclically.
//!
//! # Invariants
//! - `head < capacity` and `len <= capacity`.
//! - Slots in the logical range `[head, head + len)` (wrapping modulo
//!   `capacity`) are initialized; all other slots are uninitialized.
//! - The write cursor is derived: it always sits `len` slots past `head`.
//!
//! # Contract
//! Overwriting an unread element, popping an empty ring, and peeking past
//! the unread count are caller bugs, reported as [`BufferViolation`] and
//! never recovered from.
//!
//! # Threading
//! This type is not synchronized; it assumes single-threaded usage.

use std::fmt;
use std::mem::MaybeUninit;

/// Error from constructing a ring with zero capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCapacity;

impl fmt::Display for InvalidCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring capacity must be greater than 0")
    }
}

impl std::error::Error for InvalidCapacity {}

/// Contract breach on a ring operation.
///
/// Every variant indicates a bug in the calling driver or processor, not a
/// data condition: the caller must never push into a full ring, pop from an
/// empty one, or peek past the unread count. A breach aborts the scan that
/// raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BufferViolation {
    /// Push into a full ring; an unread element would have been lost.
    Overwrite { capacity: usize },
    /// Pop from an empty ring; an element would have been read twice.
    Overread,
    /// Peek at an offset past the unread count.
    PeekOutOfRange { offset: usize, len: usize },
}

impl fmt::Display for BufferViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite { capacity } => {
                write!(f, "write cursor reached the read cursor (capacity {capacity}); refusing to overwrite unread data")
            }
            Self::Overread => {
                write!(f, "read cursor reached the write cursor; refusing to re-read popped data")
            }
            Self::PeekOutOfRange { offset, len } => {
                write!(f, "peek offset {offset} is past the unread count {len}")
            }
        }
    }
}

impl std::error::Error for BufferViolation {}

/// Read-only window over the unread contents of a ring.
///
/// This is the seam between the buffer and anything that inspects it: a
/// processor gets `&dyn BufferView<T>` and can measure and peek the window
/// but never mutate it. [`RingBuffer`] is the canonical implementor.
pub trait BufferView<T> {
    /// Number of unread elements currently held.
    fn len(&self) -> usize;

    /// True when no unread elements are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the unread count has reached capacity.
    fn is_full(&self) -> bool;

    /// Element `offset` positions past the oldest unread element.
    ///
    /// Defined only for `offset < len()`; anything else is a
    /// [`BufferViolation::PeekOutOfRange`].
    fn peek(&self, offset: usize) -> Result<&T, BufferViolation>;
}

/// Fixed-capacity FIFO ring buffer.
///
/// Storage is a heap-allocated slice of `MaybeUninit<T>` so elements need
/// neither `Default` nor zeroing; `head`/`len` bookkeeping tracks which slots
/// are live. One ring serves one scan session and is discarded with it.
pub struct RingBuffer<T> {
    buf: Box<[MaybeUninit<T>]>,
    head: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Constructs an empty ring holding up to `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity);
        }
        let buf = std::iter::repeat_with(MaybeUninit::uninit)
            .take(capacity)
            .collect();
        Ok(Self { buf, head: 0, len: 0 })
    }

    /// Maximum number of unread elements the ring can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of unread elements currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no unread elements are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when `len == capacity`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Slot index `i` logical positions past the read cursor.
    ///
    /// `head < capacity` and `i <= capacity` hold at every call site, so a
    /// single conditional subtraction replaces the modulo.
    #[inline]
    fn slot(&self, i: usize) -> usize {
        debug_assert!(self.head < self.buf.len());
        debug_assert!(i <= self.buf.len());
        let at = self.head + i;
        if at >= self.buf.len() {
            at - self.buf.len()
        } else {
            at
        }
    }

    /// Appends `element` at the write cursor.
    ///
    /// Fails with [`BufferViolation::Overwrite`] when the ring is full; the
    /// element is dropped with the error, never written over unread data.
    #[inline]
    pub fn push(&mut self, element: T) -> Result<(), BufferViolation> {
        if self.is_full() {
            return Err(BufferViolation::Overwrite {
                capacity: self.buf.len(),
            });
        }
        let tail = self.slot(self.len);
        self.buf[tail].write(element);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest unread element.
    ///
    /// Fails with [`BufferViolation::Overread`] when the ring is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, BufferViolation> {
        if self.is_empty() {
            return Err(BufferViolation::Overread);
        }
        // SAFETY: `len > 0`, so the slot at `head` is inside the initialized
        // range. Advancing `head` below removes it from that range, so the
        // value is moved out exactly once.
        let element = unsafe { self.buf[self.head].assume_init_read() };
        self.head = self.slot(1);
        self.len -= 1;
        Ok(element)
    }

    /// Drops all unread elements in FIFO order; the ring stays usable.
    pub fn clear(&mut self) {
        while self.len > 0 {
            // SAFETY: `len > 0`, so the slot at `head` is initialized, and
            // it leaves the initialized range as soon as `head` advances.
            unsafe { self.buf[self.head].assume_init_drop() };
            self.head = self.slot(1);
            self.len -= 1;
        }
        self.head = 0;
    }
}

impl<T> BufferView<T> for RingBuffer<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn is_full(&self) -> bool {
        RingBuffer::is_full(self)
    }

    #[inline]
    fn peek(&self, offset: usize) -> Result<&T, BufferViolation> {
        if offset >= self.len {
            return Err(BufferViolation::PeekOutOfRange {
                offset,
                len: self.len,
            });
        }
        let idx = self.slot(offset);
        // SAFETY: `offset < len`, so the slot is inside the initialized
        // range, and the shared borrow keeps it there for the reference's
        // lifetime.
        Ok(unsafe { self.buf[idx].assume_init_ref() })
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.buf.len())
            .field("len", &self.len)
            .field("head", &self.head)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Test module includes
// ---------------------------------------------------------------------------

#[cfg(any(test, kani))]
#[path = "ring_buffer_tests.rs"]
mod ring_buffer_tests;
