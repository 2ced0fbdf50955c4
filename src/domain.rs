//! Hierarchical domain names.
//!
//! A [`Domain`] keeps the raw name behind one synthetic leading separator,
//! so every label is bounded by dots on both sides. Comparisons walk the
//! labels from the root (`com`) towards the leaf (`www`).

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Label separator.
const SEPARATOR: char = '.';

/// A dot-separated domain name such as `mail.example.com`.
///
/// No validation is done: empty or malformed names are accepted and simply
/// produce degenerate label sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    /// Raw name prefixed with [`SEPARATOR`].
    framed: String,
}

impl Domain {
    /// Create a domain from a name without leading or trailing dot.
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        let mut framed = String::with_capacity(name.len() + 1);
        framed.push(SEPARATOR);
        framed.push_str(name);
        Self { framed }
    }

    /// Stored form, including the leading separator.
    pub fn value(&self) -> &str {
        &self.framed
    }

    /// The name as it was given.
    pub fn name(&self) -> &str {
        &self.framed[SEPARATOR.len_utf8()..]
    }

    /// Labels from the root towards the leaf.
    ///
    /// `"a.b.com"` yields `com`, `b`, `a`.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.name().rsplit(SEPARATOR)
    }

    /// Returns true if `self` is `other` or lies underneath it.
    ///
    /// Matching happens on whole labels, so `foo.com` is not a subdomain of
    /// `oo.com`.
    pub fn is_subdomain(&self, other: &Domain) -> bool {
        if other.framed.len() > self.framed.len() {
            return false;
        }
        let mut mine = self.labels();
        other.labels().all(|label| mine.next() == Some(label))
    }
}

impl Ord for Domain {
    /// Root-anchored order: compare top-level labels first, then the next
    /// level, and so on. An ancestor sorts before all of its subdomains.
    fn cmp(&self, other: &Self) -> Ordering {
        self.labels().cmp(other.labels())
    }
}

impl PartialOrd for Domain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Domain {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl FromStr for Domain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
