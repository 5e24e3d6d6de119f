//! `Key? key` + `: super(key: key)` → `super.key` parameter.
//!
//! Runs as two ordered substitutions against the evolving text:
//!
//! 1. Promotion: `const Name({Key? key, ...}) : super(key: key)` gets its
//!    `Key? key` parameter replaced by `super.key`. The rest of the parameter
//!    list and the base call are kept verbatim.
//! 2. Cleanup: any `): super(key: key)` left in the text loses its base call,
//!    keeping the `)` and an optional `;`.
//!
//! The cleanup pass is not conditioned on the promotion pass. It also fires on
//! constructors the promotion shape did not recognize.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::rule::{Rewrite, RewriteRule};

/// Constructor opening with a leading `Key? key,` parameter and a trailing
/// `}) : super(key: key)` base call. The parameter tail is matched lazily so a
/// match stops at the nearest forwarding clause.
static PROMOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(const\s+\w+\(\s*\{\s*)Key\?\s+key(,[\s\S]*?\}\s*\)\s*:\s*super\s*\(\s*key:\s*key\s*\))",
    )
    .unwrap()
});

static CLEANUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)\s*:\s*super\s*\(\s*key:\s*key\s*\)(;)?").unwrap());

/// Migrates constructors to the `super.key` parameter shorthand.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperKeyRule;

impl SuperKeyRule {
    fn promote(text: &str) -> String {
        PROMOTE_RE.replace_all(text, "${1}super.key${2}").into_owned()
    }

    fn cleanup(text: &str) -> String {
        CLEANUP_RE.replace_all(text, ")${1}").into_owned()
    }
}

impl RewriteRule for SuperKeyRule {
    fn name(&self) -> &'static str {
        "super_key"
    }

    fn apply(&self, text: &str) -> Rewrite {
        let promoted = Self::promote(text);
        let cleaned = Self::cleanup(&promoted);
        Rewrite::compare(text, cleaned)
    }
}
