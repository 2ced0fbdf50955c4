//! Line-oriented batch input and output.
//!
//! Input is a count line followed by that many blocklist domains, then a
//! second count line followed by that many query domains:
//!
//! ```text
//! 2
//! gdz.ru
//! com
//! 3
//! m.gdz.ru
//! aaa.aa
//! maps.com
//! ```
//!
//! Output is one verdict token per query, in input order.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::domain::Domain;
use crate::error::Result;
use crate::filter::Verdict;

/// Domains read from one batch input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    pub blocklist: Vec<Domain>,
    pub queries: Vec<Domain>,
}

/// Upper bound on the up-front reservation for a domain section.
const MAX_RESERVE: usize = 4096;

/// Read one line without its terminator.
///
/// Invalid UTF-8 is replaced rather than rejected. Returns `None` at end of
/// input.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }

    match String::from_utf8(buf) {
        Ok(line) => Ok(Some(line)),
        Err(e) => {
            let line = String::from_utf8_lossy(e.as_bytes()).into_owned();
            warn!(line = %line, "line is not valid UTF-8, replacing invalid bytes");
            Ok(Some(line))
        }
    }
}

/// Read a count line.
///
/// A missing or unparsable count is treated as zero.
pub fn read_count<R: BufRead>(reader: &mut R) -> Result<usize> {
    let Some(line) = read_line(reader)? else {
        warn!("missing count line, assuming 0");
        return Ok(0);
    };

    match line.trim().parse() {
        Ok(count) => Ok(count),
        Err(e) => {
            warn!(line = %line, error = %e, "invalid count line, assuming 0");
            Ok(0)
        }
    }
}

/// Read up to `count` domains, one per line.
///
/// Reading stops early at end of input.
pub fn read_domains<R: BufRead>(reader: &mut R, count: usize) -> Result<Vec<Domain>> {
    let mut domains = Vec::with_capacity(count.min(MAX_RESERVE));

    while domains.len() < count {
        let Some(line) = read_line(reader)? else {
            warn!(expected = count, read = domains.len(), "input ended early");
            break;
        };
        domains.push(Domain::new(line));
    }

    Ok(domains)
}

/// Read the blocklist section followed by the query section.
pub fn read_batch<R: BufRead>(reader: &mut R) -> Result<Batch> {
    let count = read_count(reader)?;
    let blocklist = read_domains(reader, count)?;
    debug!(count, "read blocklist");

    let count = read_count(reader)?;
    let queries = read_domains(reader, count)?;
    debug!(count, "read queries");

    Ok(Batch { blocklist, queries })
}

/// Write one verdict per line and flush.
pub fn write_verdicts<W: Write>(writer: &mut W, verdicts: &[Verdict]) -> Result<()> {
    for verdict in verdicts {
        writeln!(writer, "{}", verdict)?;
    }
    writer.flush()?;
    Ok(())
}
