use super::RecordType;
use std::fmt;

/// Result of resolving a numeric QTYPE against the IANA table.
///
/// Resolution is total: any integer resolves, unassigned or out-of-range
/// codes fall back to the RFC 3597 `TYPE<n>` presentation form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryType {
    Known(RecordType),
    Unknown(i64),
    /// Code too wide for `i64`, held as canonical decimal (`-` sign only,
    /// no leading zeros, no separators).
    Wide(Box<str>),
}

impl QueryType {
    pub fn from_code(code: i64) -> Self {
        u16::try_from(code)
            .ok()
            .and_then(RecordType::from_u16)
            .map_or(QueryType::Unknown(code), QueryType::Known)
    }

    /// Parses a decimal integer token of any width.
    ///
    /// Accepts an optional `+`/`-` sign, leading zeros and single `_`
    /// separators between digits. Returns `None` for anything else.
    pub fn parse_code(token: &str) -> Option<Self> {
        if let Ok(code) = token.parse::<i64>() {
            return Some(Self::from_code(code));
        }

        let (negative, digits) = match token.as_bytes().first()? {
            b'+' => (false, &token[1..]),
            b'-' => (true, &token[1..]),
            _ => (false, token),
        };
        let well_formed = !digits.is_empty()
            && !digits.starts_with('_')
            && !digits.ends_with('_')
            && !digits.contains("__")
            && digits.bytes().all(|b| b.is_ascii_digit() || b == b'_');
        if !well_formed {
            return None;
        }

        let digits: String = digits.chars().filter(|c| *c != '_').collect();
        let magnitude = match digits.trim_start_matches('0') {
            "" => "0",
            m => m,
        };
        let canonical = if negative && magnitude != "0" {
            format!("-{}", magnitude)
        } else {
            magnitude.to_string()
        };

        Some(match canonical.parse::<i64>() {
            Ok(code) => Self::from_code(code),
            Err(_) => QueryType::Wide(canonical.into_boxed_str()),
        })
    }

    /// Numeric code, or `None` when it does not fit in `i64`.
    pub fn code(&self) -> Option<i64> {
        match self {
            QueryType::Known(record_type) => Some(i64::from(record_type.to_u16())),
            QueryType::Unknown(code) => Some(*code),
            QueryType::Wide(_) => None,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            QueryType::Known(record_type) => Some(*record_type),
            QueryType::Unknown(_) | QueryType::Wide(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, QueryType::Known(_))
    }
}

impl From<RecordType> for QueryType {
    fn from(record_type: RecordType) -> Self {
        QueryType::Known(record_type)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Known(record_type) => f.write_str(record_type.as_str()),
            QueryType::Unknown(code) => write!(f, "TYPE{}", code),
            QueryType::Wide(digits) => write!(f, "TYPE{}", digits),
        }
    }
}
