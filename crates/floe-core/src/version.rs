//! Filename-embedded version parsing and ordering
//!
//! Migration filenames carry an optional dotted version prefix
//! (`1.2.3_add_column.sql`, `v2_orders.sql`). The prefix is parsed into a
//! [`VersionKey`] that gives migrations a total order within their category.

use std::cmp::Ordering;
use std::fmt;

/// One component of a parsed version token.
///
/// Components are either numeric (`1`, `42`) or text (`beta`, `rc1`).
/// Numeric components compare numerically, text components lexicographically.
/// At a mismatched position an integer always sorts before text, so the
/// ordering is total over every observed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Numeric component, compared numerically
    Integer(u64),
    /// Non-numeric component, compared lexicographically
    Text(String),
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Component::Integer(a), Component::Integer(b)) => a.cmp(b),
            (Component::Text(a), Component::Text(b)) => a.cmp(b),
            (Component::Integer(_), Component::Text(_)) => Ordering::Less,
            (Component::Text(_), Component::Integer(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Integer(n) => write!(f, "{}", n),
            Component::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Comparable ordering key extracted from a migration filename.
///
/// Keys compare element-wise left to right; a key that is a strict prefix of
/// another sorts first. Files without a parseable version prefix get the
/// fallback key `(0,)` and therefore sort before any versioned file in the
/// same category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey(Vec<Component>);

impl VersionKey {
    /// The key assigned to files with no parseable version prefix
    pub fn fallback() -> Self {
        VersionKey(vec![Component::Integer(0)])
    }

    /// Parse a version token into a key.
    ///
    /// An optional leading `v`/`V` is stripped when followed by a digit.
    /// The token is split on `.`; each part becomes an `Integer` when it
    /// parses as one, `Text` otherwise. An empty token, or a token with no
    /// integer component at all, yields [`VersionKey::fallback`] — such
    /// tokens are treated as unversioned, not as text versions.
    ///
    /// Never fails; pure and deterministic.
    pub fn parse(token: &str) -> Self {
        let token = strip_v_prefix(token.trim());
        if token.is_empty() {
            return Self::fallback();
        }

        let components: Vec<Component> = token
            .split('.')
            .map(|part| match part.parse::<u64>() {
                Ok(n) => Component::Integer(n),
                Err(_) => Component::Text(part.to_string()),
            })
            .collect();

        if !components
            .iter()
            .any(|c| matches!(c, Component::Integer(_)))
        {
            return Self::fallback();
        }

        VersionKey(components)
    }

    /// The parsed components, in order
    pub fn components(&self) -> &[Component] {
        &self.0
    }

    /// True when this is the unversioned fallback key
    pub fn is_fallback(&self) -> bool {
        self.0 == [Component::Integer(0)]
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Strip a leading `v`/`V` only when a digit follows (`v2` yes, `views` no)
fn strip_v_prefix(token: &str) -> &str {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some('v') | Some('V'), Some(c)) if c.is_ascii_digit() => &token[1..],
        _ => token,
    }
}

/// Extract the version token from a filename stem.
///
/// Returns the portion before the first `_`, or the whole stem when no `_`
/// is present (`1.2.3_add_column` → `1.2.3`).
pub fn version_token(stem: &str) -> &str {
    stem.split('_').next().unwrap_or(stem)
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
