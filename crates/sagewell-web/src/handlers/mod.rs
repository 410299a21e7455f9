//! HTTP handlers for all web routes.

pub mod ask;
pub mod search;
pub mod system;

use sagewell_common::ApiError;
use sagewell_ranker::query::QueryError;

/// User-facing messages for rejected input, worded per endpoint.
pub(crate) struct InputMessages {
    pub empty: &'static str,
    pub too_long: fn(usize) -> String,
}

pub(crate) fn reject_input(err: QueryError, messages: &InputMessages) -> ApiError {
    let msg = match err {
        QueryError::Empty => messages.empty.to_string(),
        QueryError::TooLong { max, .. } => (messages.too_long)(max),
    };
    ApiError::BadRequest(msg)
}
