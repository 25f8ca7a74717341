mod query_type;
mod record_type;

pub use query_type::QueryType;
pub use record_type::RecordType;

/// Resolves a numeric QTYPE to its presentation mnemonic.
///
/// Never fails: codes missing from the table come back as `TYPE<n>`,
/// including zero and negative values.
pub fn lookup(code: i64) -> QueryType {
    QueryType::from_code(code)
}
