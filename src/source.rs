//! Pull-based element sources.
//!
//! The driver treats input as an opaque pull interface: yield the next
//! element or signal exhaustion. Any infallible iterator is a source, and
//! [`Utf8Source`] adapts a byte reader into a stream of logical characters
//! so match offsets count characters rather than encoded bytes.

use std::io::{self, Read};

/// One-at-a-time element supplier for a scan session.
///
/// Failures are the source's own; the driver propagates them unchanged and
/// never retries a pull.
pub trait Source {
    type Item;

    /// Pulls the next element, or `None` once the stream is exhausted.
    fn pull(&mut self) -> io::Result<Option<Self::Item>>;
}

impl<I: Iterator> Source for I {
    type Item = I::Item;

    fn pull(&mut self) -> io::Result<Option<I::Item>> {
        Ok(self.next())
    }
}

/// Streams logical characters from UTF-8 bytes.
///
/// Each pull reads exactly the bytes of one character, so memory use stays
/// constant regardless of input length. Wrap plain files in
/// `std::io::BufReader`; this adapter reads byte-at-a-time and relies on
/// the reader for buffering.
///
/// # Errors
/// - Invalid leading bytes, invalid sequences, and streams truncated in the
///   middle of a multi-byte character surface as
///   [`io::ErrorKind::InvalidData`].
/// - Underlying reader failures pass through untouched.
pub struct Utf8Source<R> {
    reader: R,
}

impl<R: Read> Utf8Source<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads one byte, retrying on interruption; `None` at end of stream.
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Source for Utf8Source<R> {
    type Item = char;

    fn pull(&mut self) -> io::Result<Option<char>> {
        let first = match self.next_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };
        let width = utf8_len(first).ok_or_else(|| invalid("invalid UTF-8 leading byte"))?;

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self
                .next_byte()?
                .ok_or_else(|| invalid("stream truncated inside a UTF-8 sequence"))?;
        }

        let decoded = std::str::from_utf8(&buf[..width])
            .map_err(|_| invalid("invalid UTF-8 sequence"))?;
        Ok(decoded.chars().next())
    }
}

/// Sequence length implied by a UTF-8 leading byte.
///
/// 0xC0/0xC1 and bytes above 0xF4 can never start a valid sequence;
/// continuation and overlong checks are left to `str::from_utf8`.
fn utf8_len(byte: u8) -> Option<usize> {
    match byte {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid(detail: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, detail)
}
