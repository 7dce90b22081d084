//! Property-based soundness tests for the public scanning API.
//!
//! Run with: `cargo test --test property`

mod streaming_equivalence;
