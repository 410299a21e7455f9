//! Shared application state for the web server.

use std::sync::Arc;

use sagewell_ranker::catalog::Catalog;
use sagewell_ranker::wisdom::Oracle;
use sagewell_ranker::{Corpus, Ranker};

use crate::config::Config;

/// Shared state injected into every Axum handler. Everything here is
/// read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub corpus: Arc<Corpus>,
    /// Derived once from the corpus at startup.
    pub catalog: Arc<Catalog>,
    pub oracle: Oracle,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(corpus: Corpus, config: Config) -> Self {
        let catalog = Catalog::from_corpus(&corpus);
        Self {
            corpus: Arc::new(corpus),
            catalog: Arc::new(catalog),
            oracle: Oracle,
            config: Arc::new(config),
        }
    }

    /// State backed by the built-in corpus.
    pub fn with_classics(config: Config) -> Self {
        Self::new(Corpus::classics(), config)
    }

    pub fn ranker(&self) -> Ranker<'_> {
        Ranker::new(&self.corpus).with_limit(self.config.search.result_limit)
    }

    pub fn auth_enabled(&self) -> bool {
        !self.config.auth.tokens.is_empty()
    }
}

pub type SharedState = Arc<AppState>;
