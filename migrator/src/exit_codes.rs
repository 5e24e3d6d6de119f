//! Stable exit codes for the migrator CLI.

/// Run finished, whether or not any file changed.
pub const OK: i32 = 0;
/// Run aborted: invalid arguments, missing root, or an I/O failure.
pub const INVALID: i32 = 1;
