//! Small, self-contained data structures used across the project.

pub mod ring_buffer;

pub use ring_buffer::{BufferView, BufferViolation, InvalidCapacity, RingBuffer};
