//! Caller-side input validation, run before the ranker or oracle is invoked.

use sagewell_common::SagewellError;
use thiserror::Error;

pub const MAX_SEARCH_QUERY_CHARS: usize = 100;
pub const MAX_QUESTION_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query must not be empty")]
    Empty,
    /// Length is counted in characters, not bytes.
    #[error("query must not exceed {max} characters (got {len})")]
    TooLong { len: usize, max: usize },
}

impl From<QueryError> for SagewellError {
    fn from(err: QueryError) -> Self {
        SagewellError::InvalidQuery(err.to_string())
    }
}

/// Trim `raw` and check it is non-empty and at most `max_chars` characters.
pub fn validate_query(raw: &str, max_chars: usize) -> Result<String, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QueryError::Empty);
    }
    let len = trimmed.chars().count();
    if len > max_chars {
        return Err(QueryError::TooLong { len, max: max_chars });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(validate_query("  学习 \n", MAX_SEARCH_QUERY_CHARS).unwrap(), "学习");
    }

    #[test]
    fn test_rejects_blank() {
        assert_eq!(validate_query("", 100), Err(QueryError::Empty));
        assert_eq!(validate_query(" \t ", 100), Err(QueryError::Empty));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 100 CJK characters = 300 bytes, still valid
        let at_limit = "学".repeat(MAX_SEARCH_QUERY_CHARS);
        assert!(validate_query(&at_limit, MAX_SEARCH_QUERY_CHARS).is_ok());

        let over = "学".repeat(MAX_SEARCH_QUERY_CHARS + 1);
        assert_eq!(
            validate_query(&over, MAX_SEARCH_QUERY_CHARS),
            Err(QueryError::TooLong { len: 101, max: 100 })
        );
    }

    #[test]
    fn test_converts_to_invalid_query() {
        let err: SagewellError = QueryError::Empty.into();
        assert!(matches!(err, SagewellError::InvalidQuery(_)));
    }
}
