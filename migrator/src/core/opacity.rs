//! `Color.withOpacity(x)` → `Color.withValues(alpha: x)`.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::rule::{Rewrite, RewriteRule};

/// `.withOpacity(` + numeric literal (digits, at most one decimal point) + `)`.
static WITH_OPACITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.withOpacity\((\d+\.?\d*|\.\d+)\)").unwrap());

/// Rewrites deprecated `withOpacity` calls with a literal argument.
///
/// Matching is lexical: call sites inside comments and string literals are
/// rewritten as well. The literal is carried over untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpacityRule;

impl RewriteRule for OpacityRule {
    fn name(&self) -> &'static str {
        "opacity"
    }

    fn apply(&self, text: &str) -> Rewrite {
        let replaced = WITH_OPACITY_RE.replace_all(text, ".withValues(alpha: ${1})");
        Rewrite::compare(text, replaced.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(text: &str) -> Rewrite {
        OpacityRule.apply(text)
    }

    #[test]
    fn rewrites_decimal_literal() {
        let rewrite = apply("final c = Colors.black.withOpacity(3.14);");
        assert!(rewrite.changed);
        assert_eq!(rewrite.text, "final c = Colors.black.withValues(alpha: 3.14);");
        assert!(!rewrite.text.contains(".withOpacity("));
    }

    #[test]
    fn rewrites_every_call_site() {
        let rewrite = apply("a.withOpacity(0.1), b.withOpacity(1), c.withOpacity(.5)");
        assert_eq!(
            rewrite.text,
            "a.withValues(alpha: 0.1), b.withValues(alpha: 1), c.withValues(alpha: .5)"
        );
    }

    #[test]
    fn keeps_literal_verbatim() {
        let rewrite = apply("x.withOpacity(0.50)");
        assert_eq!(rewrite.text, "x.withValues(alpha: 0.50)");
    }

    #[test]
    fn rewrites_inside_comments_and_strings() {
        let rewrite = apply("// use .withOpacity(0.2)\nconst s = 'x.withOpacity(0.3)';");
        assert_eq!(
            rewrite.text,
            "// use .withValues(alpha: 0.2)\nconst s = 'x.withValues(alpha: 0.3)';"
        );
    }

    #[test]
    fn leaves_non_literal_arguments_alone() {
        let text = "c.withOpacity(opacity) + c.withOpacity(0.5 * t) + c.withOpacity(1.2.3)";
        let rewrite = apply(text);
        assert!(!rewrite.changed);
        assert_eq!(rewrite.text, text);
    }

    #[test]
    fn text_without_call_is_unchanged() {
        let text = "Container(color: Colors.red)";
        let rewrite = apply(text);
        assert!(!rewrite.changed);
        assert_eq!(rewrite.text, text);
    }

    #[test]
    fn applying_twice_matches_applying_once() {
        let once = apply("a.withOpacity(0.8); b.withOpacity(2)");
        let twice = apply(&once.text);
        assert!(!twice.changed);
        assert_eq!(twice.text, once.text);
    }
}
