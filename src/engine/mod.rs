//! Sliding-window matching engine.
//!
//! Two halves share this module: the Horspool matcher, which inspects the
//! buffered window and decides how far the stream may advance, and the
//! driver, which owns the fill/match/drain loop between a source, a ring
//! buffer, and any [`BufferProcessor`]. Configuration is validated here,
//! eagerly, before a single element is pulled.

use std::fmt;

mod driver;
mod horspool;


pub use driver::{drive, BufferProcessor, ScanError, StreamScanner};
pub use horspool::HorspoolMatcher;

/// Rejected scan configuration.
///
/// Raised at construction, before any stream processing begins; never
/// retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Ring capacity must be at least 1.
    ZeroCapacity,
    /// The search pattern must contain at least one element.
    EmptyPattern,
    /// A window smaller than the pattern can never contain a full match.
    CapacityTooSmall { capacity: usize, pattern_len: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "ring capacity must be greater than 0"),
            Self::EmptyPattern => write!(f, "search pattern must not be empty"),
            Self::CapacityTooSmall {
                capacity,
                pattern_len,
            } => write!(
                f,
                "ring capacity {capacity} is smaller than the pattern length {pattern_len}; \
                 such a window can never contain a match"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
