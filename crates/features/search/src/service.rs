use crate::error::SearchError;
use crate::query::SearchForSearchTerm;
use crate::repository::AliasRepository;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

/// Outcome of an alias search, one variant per response status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    Found(Vec<String>),
    NotFound,
    BadRequest(String),
}

impl SearchResponse {
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Found(_) => 200,
            Self::NotFound => 404,
            Self::BadRequest(_) => 400,
        }
    }

    /// JSON body: `{"searchTerms": [...]}` or `{"message": "..."}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Found(terms) => json!({ "searchTerms": terms }),
            Self::NotFound => json!({ "searchTerms": [] }),
            Self::BadRequest(message) => json!({ "message": message }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchService {
    repository: Arc<dyn AliasRepository>,
    default_limit: usize,
}

impl SearchService {
    pub fn new(repository: Arc<dyn AliasRepository>, default_limit: usize) -> Self {
        Self { repository, default_limit }
    }

    /// Search terms to associate with a product, `limit` defaulting to the configured one.
    ///
    /// Constraint violations become [`SearchResponse::BadRequest`].
    ///
    /// # Errors
    /// Propagates repository failures.
    pub fn search_aliases_for_association(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<SearchResponse, SearchError> {
        let query = match SearchForSearchTerm::new(query, limit.unwrap_or(self.default_limit)) {
            Ok(query) => query,
            Err(SearchError::AliasConstraint { message, .. }) => {
                return Ok(SearchResponse::BadRequest(message.into_owned()));
            },
            Err(err) => return Err(err),
        };

        let terms = self.repository.search_terms(query.search_term(), query.limit())?;
        debug!(term = query.search_term(), found = terms.len(), "Alias search");

        if terms.is_empty() {
            return Ok(SearchResponse::NotFound);
        }
        Ok(SearchResponse::Found(terms))
    }
}
