//! sagewell-common — Shared error types used across all Sagewell crates.

pub mod error;

pub use error::{ApiError, Result, SagewellError};
