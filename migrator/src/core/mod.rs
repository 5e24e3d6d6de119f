//! Deterministic, pure rewrite logic.
//!
//! Core modules must be free of I/O side effects. Each rule maps a file's full
//! text to a new text and reports whether anything changed.

pub mod opacity;
pub mod rule;
pub mod super_key;
