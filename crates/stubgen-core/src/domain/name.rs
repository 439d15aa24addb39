//! Entity name value object.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// A validated entity name, as supplied to the `make:*` commands.
///
/// The name is interpolated into both file contents and file paths, so it is
/// validated at construction: non-empty, starts with an ASCII letter, and
/// contains only ASCII alphanumerics and underscores. This rules out path
/// separators and `..` segments before any path is ever computed.
///
/// Invariant: once constructed, the wrapped string is safe to splice into a
/// single path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Create a validated entity name.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        let mut chars = raw.chars();
        let Some(first) = chars.next() else {
            return Err(DomainError::EmptyName);
        };
        if !first.is_ascii_alphabetic() {
            return Err(DomainError::InvalidName {
                name: raw,
                reason: "must start with a letter".into(),
            });
        }

        if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(DomainError::InvalidName {
                name: raw.clone(),
                reason: format!("contains forbidden character '{bad}'"),
            });
        }

        Ok(Self(raw))
    }

    /// The name exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase variant, substituted for `{{var_name}}`.
    pub fn var_name(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
