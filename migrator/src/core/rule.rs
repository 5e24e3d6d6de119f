//! Rewrite rule abstraction and the default rule chain.

use crate::core::opacity::OpacityRule;
use crate::core::super_key::SuperKeyRule;

/// Outcome of applying a rule to a file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub changed: bool,
}

impl Rewrite {
    /// Build a rewrite by comparing the final text against the rule input.
    pub fn compare(input: &str, text: String) -> Self {
        let changed = text != input;
        Self { text, changed }
    }
}

/// A stateless text-to-text transformation keyed by a fixed pattern.
pub trait RewriteRule {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Rewrite `text`. Must not depend on anything but its input.
    fn apply(&self, text: &str) -> Rewrite;
}

/// Rules in the order they are applied to every file.
pub fn default_rules() -> Vec<Box<dyn RewriteRule>> {
    vec![Box::new(OpacityRule), Box::new(SuperKeyRule)]
}

/// Result of running a rule chain over one text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    pub text: String,
    /// Names of the rules that reported a change, in application order.
    pub applied: Vec<&'static str>,
}

/// Apply `rules` in sequence, each against the latest text.
pub fn apply_rules(rules: &[Box<dyn RewriteRule>], text: &str) -> ChainOutcome {
    let mut current = text.to_string();
    let mut applied = Vec::new();
    for rule in rules {
        let rewrite = rule.apply(&current);
        if rewrite.changed {
            applied.push(rule.name());
            current = rewrite.text;
        }
    }
    ChainOutcome {
        text: current,
        applied,
    }
}
