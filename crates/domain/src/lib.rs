//! Ferrous QType Domain Layer
pub mod dns_record;
pub mod errors;
pub mod query_record;

pub use dns_record::{lookup, QueryType, RecordType};
pub use errors::DomainError;
pub use query_record::{ParsedLine, QueryRecord};
