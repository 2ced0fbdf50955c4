//! domcheck - Offline checker for domains covered by a blocklist.
//!
//! A domain is forbidden if it, or any of its ancestors, is on the
//! blocklist.
//!
//! ```
//! use domcheck::DomainChecker;
//!
//! let checker = DomainChecker::build(["gdz.ru", "maps.me", "com"]);
//!
//! assert!(checker.query("gdz.ru"));
//! assert!(checker.query("bla.bla.maps.me"));
//! assert!(!checker.query("aaa.aa"));
//! ```

pub mod batch;
pub mod domain;
pub mod error;
pub mod filter;
pub mod stats;

use std::io::{BufRead, Write};

use tracing::debug;

pub use domain::Domain;
pub use error::{Error, Result};
pub use filter::{DomainChecker, Verdict, check_all};
pub use stats::Summary;

/// Read a batch from `input`, write one verdict per query to `output`.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Summary> {
    let batch::Batch { blocklist, queries } = batch::read_batch(input)?;

    let read = blocklist.len();
    let checker = DomainChecker::new(blocklist);
    debug!(read, retained = checker.len(), "built checker");

    let verdicts = check_all(&checker, &queries);
    batch::write_verdicts(output, &verdicts)?;

    let mut summary = Summary::new(read, checker.len());
    summary.extend(verdicts);
    Ok(summary)
}
