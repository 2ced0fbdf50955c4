//! Blocklist filtering.
//!
//! Builds a [`DomainChecker`] from blocklist domains and turns query domains
//! into [`Verdict`]s.

mod checker;

use std::fmt;

pub use checker::DomainChecker;

use crate::domain::Domain;

/// Outcome of checking one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The domain or one of its ancestors is blocklisted.
    Forbidden,
    Allowed,
}

impl Verdict {
    /// Output token for this verdict.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Forbidden => "Bad",
            Verdict::Allowed => "Good",
        }
    }
}

impl From<bool> for Verdict {
    fn from(forbidden: bool) -> Self {
        if forbidden {
            Verdict::Forbidden
        } else {
            Verdict::Allowed
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check every query against the blocklist, keeping input order.
pub fn check_all<'a, I>(checker: &DomainChecker, queries: I) -> Vec<Verdict>
where
    I: IntoIterator<Item = &'a Domain>,
{
    queries
        .into_iter()
        .map(|domain| Verdict::from(checker.is_forbidden(domain)))
        .collect()
}
