use crate::dns_record::QueryType;
use crate::errors::DomainError;

/// One `<domain> <qtype>` input line, resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord<'a> {
    pub domain: &'a str,
    pub query_type: QueryType,
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Empty after trimming.
    Blank,
    /// No whitespace, so no qtype field at all. Dropped without a diagnostic.
    Incomplete,
    Record(QueryRecord<'a>),
}

impl<'a> QueryRecord<'a> {
    pub fn new(domain: &'a str, query_type: QueryType) -> Self {
        Self { domain, query_type }
    }

    /// Parses one line.
    ///
    /// The line is split at its first whitespace run only, so everything
    /// after the domain must form a single integer of any width. A present but
    /// non-numeric qtype is the only error case.
    pub fn parse(line: &'a str) -> Result<ParsedLine<'a>, DomainError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ParsedLine::Blank);
        }

        let Some((domain, qtype)) = line.split_once(char::is_whitespace) else {
            return Ok(ParsedLine::Incomplete);
        };
        let qtype = qtype.trim_start();

        let query_type =
            QueryType::parse_code(qtype).ok_or_else(|| DomainError::InvalidQueryType {
                token: qtype.to_string(),
                domain: domain.to_string(),
            })?;

        Ok(ParsedLine::Record(Self::new(domain, query_type)))
    }
}
