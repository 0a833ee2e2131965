//! Search alias feature slice.

mod error;
pub mod query;
pub mod repository;
pub mod service;

pub use crate::error::{AliasConstraintCode, SearchError, SearchErrorExt};
pub use crate::query::SearchForSearchTerm;
pub use crate::repository::{AliasRepository, InMemoryAliasRepository};
pub use crate::service::{SearchResponse, SearchService};

use shopdesk_domain::config::ShopdeskConfig;
use shopdesk_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;

/// Search feature state.
#[shopdesk_derive::shopdesk_slice]
pub struct Search {
    pub service: SearchService,
}

/// Initialize the search feature with the configured aliases.
///
/// # Errors
/// Returns an error if the configured default limit is zero.
pub fn init(config: &ShopdeskConfig) -> Result<InitializedSlice, SearchError> {
    if config.search.default_limit == 0 {
        return Err("search.default_limit must be greater than zero".into());
    }

    let repository = Arc::new(InMemoryAliasRepository::new(config.search.aliases.clone()));
    tracing::info!(aliases = repository.len(), "Search slice initialized");

    let service = SearchService::new(repository, config.search.default_limit);
    Ok(InitializedSlice::new(Search::new(SearchInner { service })))
}
