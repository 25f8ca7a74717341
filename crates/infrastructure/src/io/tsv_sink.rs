use ferrous_qtype_application::ports::RecordSink;
use ferrous_qtype_domain::{DomainError, QueryRecord};
use std::io::Write;

/// Writes records as `<domain>\t<mnemonic>` lines and diagnostics as
/// `Error: ...` lines on a separate writer.
pub struct TsvSink<W: Write, E: Write> {
    out: W,
    diagnostics: E,
}

impl<W: Write, E: Write> TsvSink<W, E> {
    pub fn new(out: W, diagnostics: E) -> Self {
        Self { out, diagnostics }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.diagnostics)
    }
}

impl<W: Write, E: Write> RecordSink for TsvSink<W, E> {
    fn emit(&mut self, record: &QueryRecord<'_>) -> Result<(), DomainError> {
        writeln!(self.out, "{}\t{}", record.domain, record.query_type)?;
        Ok(())
    }

    fn report(&mut self, error: &DomainError) -> Result<(), DomainError> {
        writeln!(self.diagnostics, "Error: {}", error)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        self.out.flush()?;
        self.diagnostics.flush()?;
        Ok(())
    }
}
