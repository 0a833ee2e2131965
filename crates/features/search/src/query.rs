use crate::error::{AliasConstraintCode, SearchError};

/// Looks up the search terms whose aliases match `search_term`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForSearchTerm {
    search_term: String,
    limit: usize,
}

impl SearchForSearchTerm {
    pub const DEFAULT_LIMIT: usize = 10;

    /// # Errors
    /// Returns [`SearchError::AliasConstraint`] for a blank term or a zero limit.
    pub fn new(search_term: impl Into<String>, limit: usize) -> Result<Self, SearchError> {
        let search_term = search_term.into().trim().to_owned();

        if search_term.is_empty() {
            return Err(SearchError::AliasConstraint {
                code: AliasConstraintCode::EmptySearchTerm,
                message: "Search term cannot be empty".into(),
                context: None,
            });
        }

        if limit == 0 {
            return Err(SearchError::AliasConstraint {
                code: AliasConstraintCode::InvalidLimit,
                message: "Limit must be greater than zero".into(),
                context: None,
            });
        }

        Ok(Self { search_term, limit })
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}
