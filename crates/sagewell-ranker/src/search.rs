//! Relevance ranking pipeline: score → drop zeros → filter → sort → truncate.

use sagewell_common::{Result, SagewellError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collate;
use crate::corpus::{Corpus, Passage};
use crate::filters::{FilterValue, SearchFilters, SortBy};
use crate::scorer;
use crate::semantic::SemanticTable;
use crate::weights::ScoreWeights;

/// Maximum number of results returned by one search.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// A ranked passage, formatted for display: `source` and `category` carry the
/// display names rather than the internal codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source: String,
    pub category: String,
    pub relevance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<ScoredResult>,
    /// Size of the filtered set before truncation.
    pub total: usize,
}

/// Ranks passages of a borrowed corpus. Holds no mutable state, so one ranker
/// can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Ranker<'c> {
    corpus: &'c Corpus,
    table: SemanticTable,
    weights: ScoreWeights,
    limit: usize,
}

struct Candidate<'c> {
    passage: &'c Passage,
    relevance: f64,
}

impl<'c> Ranker<'c> {
    pub fn new(corpus: &'c Corpus) -> Self {
        Self {
            corpus,
            table: SemanticTable::standard(),
            weights: ScoreWeights::default(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Replace the default weights. Rejects weights that fail
    /// [`ScoreWeights::validate`].
    pub fn with_weights(mut self, weights: ScoreWeights) -> Result<Self> {
        if !weights.validate() {
            return Err(SagewellError::Config(format!("invalid score weights: {weights:?}")));
        }
        self.weights = weights;
        Ok(self)
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Score of a single passage, exposed for diagnostics and tests.
    pub fn score(&self, query: &str, passage: &Passage) -> f64 {
        scorer::relevance(query, passage, &self.table, &self.weights)
    }

    /// Run a search. `query` must already be trimmed and non-empty; see
    /// [`crate::query::validate_query`].
    pub fn search(&self, query: &str, filters: &SearchFilters) -> SearchOutcome {
        let mut candidates: Vec<Candidate<'c>> = self
            .corpus
            .passages()
            .iter()
            .map(|passage| Candidate { passage, relevance: self.score(query, passage) })
            .filter(|c| c.relevance > 0.0)
            .collect();
        let scored = candidates.len();

        self.note_unknown_filters(filters);
        candidates.retain(|c| {
            filters.category.matches(&c.passage.category) && filters.source.matches(&c.passage.source)
        });

        sort_candidates(&mut candidates, filters.sort_by);

        let total = candidates.len();
        let results: Vec<ScoredResult> = candidates
            .into_iter()
            .take(self.limit)
            .map(|c| ScoredResult {
                id: c.passage.id.clone(),
                title: c.passage.title.clone(),
                content: c.passage.content.clone(),
                source: c.passage.source_name.clone(),
                category: c.passage.category_name.clone(),
                relevance: c.relevance,
            })
            .collect();

        debug!(query, scored, total, returned = results.len(), sort = ?filters.sort_by, "search complete");
        SearchOutcome { results, total }
    }

    fn note_unknown_filters(&self, filters: &SearchFilters) {
        if let FilterValue::Code(code) = &filters.category {
            if !self.corpus.has_category(code) {
                debug!(category = %code, "category filter names no passage; result set will be empty");
            }
        }
        if let FilterValue::Code(code) = &filters.source {
            if !self.corpus.has_source(code) {
                debug!(source = %code, "source filter names no passage; result set will be empty");
            }
        }
    }
}

/// Stable sort, so ties keep corpus order.
fn sort_candidates(candidates: &mut [Candidate<'_>], sort_by: SortBy) {
    match sort_by {
        SortBy::Relevance => candidates.sort_by(|a, b| b.relevance.total_cmp(&a.relevance)),
        SortBy::Title => candidates.sort_by(|a, b| collate::compare(&a.passage.title, &b.passage.title)),
        SortBy::Date => candidates.sort_by_key(|c| c.passage.composed),
    }
}
