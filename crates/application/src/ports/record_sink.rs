use ferrous_qtype_domain::{DomainError, QueryRecord};
use std::sync::{Arc, Mutex, MutexGuard};

/// Destination for resolved records and per-line diagnostics.
///
/// Records and diagnostics are kept on separate channels so diagnostics
/// never interleave with the data stream.
pub trait RecordSink {
    fn emit(&mut self, record: &QueryRecord<'_>) -> Result<(), DomainError>;

    /// Reports a recoverable, per-line error.
    fn report(&mut self, error: &DomainError) -> Result<(), DomainError>;

    fn flush(&mut self) -> Result<(), DomainError> {
        Ok(())
    }
}

/// A sink shared with another thread. The lock is held for one call at a
/// time, so a holder of the lock always sees whole records.
impl<S: RecordSink> RecordSink for Arc<Mutex<S>> {
    fn emit(&mut self, record: &QueryRecord<'_>) -> Result<(), DomainError> {
        lock_sink(self).emit(record)
    }

    fn report(&mut self, error: &DomainError) -> Result<(), DomainError> {
        lock_sink(self).report(error)
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        lock_sink(self).flush()
    }
}

/// Locks a shared sink, ignoring poisoning: a panicked writer leaves at most
/// a partially filled buffer, which is still safe to flush.
pub fn lock_sink<S>(sink: &Mutex<S>) -> MutexGuard<'_, S> {
    sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
