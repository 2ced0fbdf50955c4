//! Run statistics.

use tracing::info;

use crate::filter::Verdict;

/// Counters for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Blocklist entries as read.
    pub blocklist: usize,
    /// Entries left after pruning duplicates and covered subdomains.
    pub retained: usize,
    pub forbidden: usize,
    pub allowed: usize,
}

impl Summary {
    pub fn new(blocklist: usize, retained: usize) -> Self {
        Self {
            blocklist,
            retained,
            ..Self::default()
        }
    }

    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Forbidden => self.forbidden += 1,
            Verdict::Allowed => self.allowed += 1,
        }
    }

    /// Total number of queries recorded.
    pub fn queries(&self) -> usize {
        self.forbidden + self.allowed
    }

    pub fn log(&self) {
        info!(
            blocklist = self.blocklist,
            retained = self.retained,
            queries = self.queries(),
            forbidden = self.forbidden,
            allowed = self.allowed,
            "batch complete"
        );
    }
}

impl Extend<Verdict> for Summary {
    fn extend<I: IntoIterator<Item = Verdict>>(&mut self, iter: I) {
        for verdict in iter {
            self.record(verdict);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_each_verdict() {
        let mut summary = Summary::new(8, 5);

        summary.record(Verdict::Forbidden);
        summary.record(Verdict::Allowed);
        summary.record(Verdict::Forbidden);

        assert_eq!(summary.forbidden, 2);
        assert_eq!(summary.allowed, 1);
        assert_eq!(summary.queries(), 3);
    }

    #[test]
    fn extend_records_all() {
        let mut summary = Summary::new(1, 1);

        summary.extend([Verdict::Allowed, Verdict::Allowed]);

        assert_eq!(summary.allowed, 2);
        assert_eq!(summary.forbidden, 0);
        assert_eq!(summary.blocklist, 1);
    }
}
