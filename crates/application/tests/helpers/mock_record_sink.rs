#![allow(dead_code)]

use ferrous_qtype_application::ports::RecordSink;
use ferrous_qtype_domain::{DomainError, QueryRecord};

/// Collects everything the use case hands to the sink.
#[derive(Default)]
pub struct MockRecordSink {
    pub records: Vec<(String, String)>,
    pub reports: Vec<DomainError>,
    pub flushes: usize,
    fail_on_emit: bool,
}

impl MockRecordSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_on_emit: true,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|(domain, mnemonic)| format!("{}\t{}", domain, mnemonic))
            .collect()
    }
}

impl RecordSink for MockRecordSink {
    fn emit(&mut self, record: &QueryRecord<'_>) -> Result<(), DomainError> {
        if self.fail_on_emit {
            return Err(DomainError::IoError("Broken pipe".to_string()));
        }
        self.records
            .push((record.domain.to_string(), record.query_type.to_string()));
        Ok(())
    }

    fn report(&mut self, error: &DomainError) -> Result<(), DomainError> {
        self.reports.push(error.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        self.flushes += 1;
        Ok(())
    }
}
