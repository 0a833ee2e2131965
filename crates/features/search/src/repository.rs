use crate::error::SearchError;
use parking_lot::RwLock;
use shopdesk_domain::search::Alias;
use std::collections::BTreeSet;
use std::fmt::Debug;

/// Source of search aliases.
pub trait AliasRepository: Debug + Send + Sync {
    /// Distinct search terms of the active aliases matching `term`, at most `limit`.
    ///
    /// # Errors
    /// Returns an error when the aliases cannot be read.
    fn search_terms(&self, term: &str, limit: usize) -> Result<Vec<String>, SearchError>;
}

/// Aliases kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryAliasRepository {
    aliases: RwLock<Vec<Alias>>,
}

impl InMemoryAliasRepository {
    #[must_use]
    pub fn new(aliases: Vec<Alias>) -> Self {
        Self { aliases: RwLock::new(aliases) }
    }

    pub fn add(&self, alias: Alias) {
        self.aliases.write().push(alias);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.read().len()
    }
}

impl AliasRepository for InMemoryAliasRepository {
    /// Case-insensitive substring match on the alias, results sorted.
    fn search_terms(&self, term: &str, limit: usize) -> Result<Vec<String>, SearchError> {
        let needle = term.to_lowercase();
        let aliases = self.aliases.read();

        let terms: BTreeSet<&str> = aliases
            .iter()
            .filter(|a| a.active && a.alias.to_lowercase().contains(&needle))
            .map(|a| a.search.as_str())
            .collect();

        Ok(terms.into_iter().take(limit).map(str::to_owned).collect())
    }
}
