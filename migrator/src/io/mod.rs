//! I/O helpers for the fix command.

pub mod config;
pub mod source_file;
pub mod walker;
