//! Regex-driven migration of deprecated Flutter API usages.
//!
//! Walks a source tree and rewrites two patterns in place:
//!
//! - `.withOpacity(0.5)` → `.withValues(alpha: 0.5)`
//! - `const W({Key? key, ...}) : super(key: key);` → `const W({super.key, ...});`
//!
//! The crate is split like this:
//!
//! - **[`core`]**: Pure rewrite rules. No I/O, fully testable in isolation.
//! - **[`io`]**: Run inputs, source file load/persist, directory walking.
//!
//! [`fix`] coordinates the two to implement the CLI command and [`report`]
//! renders its console output.

pub mod core;
pub mod exit_codes;
pub mod fix;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
