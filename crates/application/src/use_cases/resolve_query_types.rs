use crate::ports::RecordSink;
use ferrous_qtype_domain::{DomainError, ParsedLine, QueryRecord};
use std::io::{self, BufRead};
use tracing::{debug, info};

/// Per-run counters. Every input line lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub written: u64,
    pub blank: u64,
    pub incomplete: u64,
    pub invalid: u64,
}

impl TransformStats {
    pub fn lines(&self) -> u64 {
        self.written + self.blank + self.incomplete + self.invalid
    }
}

/// Reads one line into `buf`, accepting `\n`, `\r\n` and a lone `\r` as
/// terminators. Returns `false` at end of input.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    loop {
        let available = input.fill_buf()?;
        if available.is_empty() {
            return Ok(!buf.is_empty());
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let is_cr = available[i] == b'\r';
                buf.extend_from_slice(&available[..i]);
                input.consume(i + 1);
                if is_cr && input.fill_buf()?.first() == Some(&b'\n') {
                    input.consume(1);
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                input.consume(len);
            }
        }
    }
}

/// Streams `<domain> <qtype>` lines into resolved records.
///
/// Lines are handled one at a time in input order with no state carried
/// between them. Blank and single-field lines are dropped silently; a
/// non-numeric qtype is reported to the sink and the run continues. Only
/// I/O failures on the input or the sink abort the run.
#[derive(Debug, Default)]
pub struct ResolveQueryTypesUseCase;

impl ResolveQueryTypesUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute<R, S>(&self, mut input: R, sink: &mut S) -> Result<TransformStats, DomainError>
    where
        R: BufRead,
        S: RecordSink + ?Sized,
    {
        let mut stats = TransformStats::default();
        let mut buf = Vec::with_capacity(256);

        while read_line(&mut input, &mut buf)? {
            let line = String::from_utf8_lossy(&buf);
            match QueryRecord::parse(&line) {
                Ok(ParsedLine::Record(record)) => {
                    sink.emit(&record)?;
                    stats.written += 1;
                }
                Ok(ParsedLine::Blank) => stats.blank += 1,
                Ok(ParsedLine::Incomplete) => stats.incomplete += 1,
                Err(e) => {
                    debug!(error = %e, "Skipping line with invalid qtype");
                    sink.report(&e)?;
                    stats.invalid += 1;
                }
            }
        }

        sink.flush()?;

        info!(
            lines = stats.lines(),
            written = stats.written,
            blank = stats.blank,
            incomplete = stats.incomplete,
            invalid = stats.invalid,
            "QTYPE resolution finished"
        );

        Ok(stats)
    }
}
