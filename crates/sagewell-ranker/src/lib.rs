//! sagewell-ranker — Relevance ranking over the built-in classical-text corpus.
//!
//! The corpus is built once at startup and passed by reference into every
//! component here; nothing in this crate holds mutable global state.

pub mod catalog;
pub mod collate;
pub mod corpus;
pub mod filters;
pub mod query;
pub mod scorer;
pub mod search;
pub mod semantic;
pub mod weights;
pub mod wisdom;

pub use corpus::{Corpus, Passage};
pub use filters::{FilterValue, SearchFilters, SortBy};
pub use search::{Ranker, ScoredResult, SearchOutcome};
