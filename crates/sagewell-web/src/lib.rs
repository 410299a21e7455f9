//! sagewell-web — HTTP surface for Sagewell.
//! Provides:
//!   - Smart search over the classical-text corpus
//!   - Search suggestions and facet metadata
//!   - Templated wisdom answers to free-form questions

pub mod auth;
pub mod config;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;
