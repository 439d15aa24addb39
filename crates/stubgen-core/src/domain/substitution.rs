//! Literal token substitution.
//!
//! This is deliberately not a templating language: no conditionals, no loops,
//! no escaping. A stub is plain text and a token is an exact substring.

use super::name::EntityName;

/// Token replaced by the entity name as supplied.
pub const NAME_TOKEN: &str = "{{name}}";

/// Token replaced by the lowercase variant of the entity name.
pub const VAR_NAME_TOKEN: &str = "{{var_name}}";

/// An ordered set of (token, replacement) pairs.
///
/// Pairs are applied in declared order by exact string replacement. The pairs
/// used by the generators have disjoint tokens, so order does not affect the
/// output and a replacement value is never re-scanned for its own token.
/// Tokens not in the set are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    pairs: Vec<(String, String)>,
}

impl Substitution {
    /// An empty substitution (applies as the identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a (token, replacement) pair, consuming self for fluent construction.
    pub fn pair(mut self, token: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.pairs.push((token.into(), replacement.into()));
        self
    }

    /// The standard pair set for interface and service stubs:
    /// `{{name}}` → name, `{{var_name}}` → lowercase(name).
    pub fn for_name(name: &EntityName) -> Self {
        Self::new()
            .pair(NAME_TOKEN, name.as_str())
            .pair(VAR_NAME_TOKEN, name.var_name())
    }

    /// The reduced pair set for repository stubs: only `{{name}}`.
    pub fn name_only(name: &EntityName) -> Self {
        Self::new().pair(NAME_TOKEN, name.as_str())
    }

    /// Replace every occurrence of each token in `template`.
    pub fn apply(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (token, replacement) in &self.pairs {
            result = result.replace(token, replacement);
        }
        result
    }

    /// The declared pairs, in application order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
