//! Sorted blocklist index.
//!
//! Keeps only the most general blocklist entries in root-anchored order and
//! answers membership queries with a single binary search.

use crate::domain::Domain;

/// Immutable set of forbidden domains.
///
/// A domain is forbidden if it equals a blocklist entry or is a subdomain
/// of one.
#[derive(Debug, Clone, Default)]
pub struct DomainChecker {
    /// Sorted, with no entry a subdomain of another.
    forbidden: Vec<Domain>,
}

impl DomainChecker {
    /// Build a checker from blocklist domains in any order.
    ///
    /// Duplicates and entries already covered by an ancestor are dropped.
    pub fn new<I>(domains: I) -> Self
    where
        I: IntoIterator<Item = Domain>,
    {
        let mut forbidden: Vec<Domain> = domains.into_iter().collect();
        forbidden.sort_unstable();
        // After sorting, every subdomain follows its ancestor, so comparing
        // against the last retained entry is enough.
        forbidden.dedup_by(|next, retained| next.is_subdomain(retained));

        Self { forbidden }
    }

    /// Build a checker from raw blocklist names.
    pub fn build<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(names.into_iter().map(Domain::new))
    }

    /// Check if a domain is forbidden.
    ///
    /// The only entry that can cover `domain` is the one immediately before
    /// its sorted position.
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        let upper = self.forbidden.partition_point(|entry| entry <= domain);
        match upper.checked_sub(1) {
            Some(idx) => domain.is_subdomain(&self.forbidden[idx]),
            None => false,
        }
    }

    /// Check a raw domain name.
    pub fn query(&self, name: &str) -> bool {
        self.is_forbidden(&Domain::new(name))
    }

    /// Retained entries, in sorted order.
    pub fn forbidden(&self) -> &[Domain] {
        &self.forbidden
    }

    /// Returns the number of retained entries.
    pub fn len(&self) -> usize {
        self.forbidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }
}

impl FromIterator<Domain> for DomainChecker {
    fn from_iter<I: IntoIterator<Item = Domain>>(iter: I) -> Self {
        Self::new(iter)
    }
}
