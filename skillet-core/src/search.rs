//! Search resolution.
//!
//! Two interchangeable strategies answer non-empty queries behind one trait:
//! the backend match endpoint, or a case-insensitive filter over a pre-loaded
//! catalog. Empty and whitespace-only queries fall back to the full list.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{RecipesApi, DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET};
use crate::config::{ClientConfig, SearchMode};
use crate::error::ApiError;
use crate::types::{Recipe, SearchOutcome};

/// Strategy for answering a non-empty search query.
#[async_trait]
pub trait SearchStrategy: Send + Sync {
    async fn resolve(&self, query: &str) -> Result<SearchOutcome, ApiError>;
}

/// Delegates to the backend match endpoint; result order is relevance order.
pub struct RemoteMatchStrategy {
    api: Arc<RecipesApi>,
}

impl RemoteMatchStrategy {
    pub fn new(api: Arc<RecipesApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SearchStrategy for RemoteMatchStrategy {
    async fn resolve(&self, query: &str) -> Result<SearchOutcome, ApiError> {
        self.api.match_recipes(query).await
    }
}

/// Filters a pre-loaded catalog on the client; result order is catalog order.
///
/// A recipe matches when the query is a case-insensitive substring of its
/// title, its description, or any one of its ingredients.
pub struct ClientSideFilterStrategy {
    catalog: Vec<Recipe>,
}

impl ClientSideFilterStrategy {
    pub fn new(catalog: Vec<Recipe>) -> Self {
        Self { catalog }
    }

    fn matches(recipe: &Recipe, needle: &str) -> bool {
        recipe.title.to_lowercase().contains(needle)
            || recipe.description.to_lowercase().contains(needle)
            || recipe
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(needle))
    }
}

#[async_trait]
impl SearchStrategy for ClientSideFilterStrategy {
    async fn resolve(&self, query: &str) -> Result<SearchOutcome, ApiError> {
        let needle = query.trim().to_lowercase();

        let results = self
            .catalog
            .iter()
            .filter(|recipe| Self::matches(recipe, &needle))
            .cloned()
            .collect();

        Ok(SearchOutcome {
            query: query.to_string(),
            results,
        })
    }
}

/// Front door for search: picks the full-list fallback for blank queries and
/// defers everything else to the configured strategy.
pub struct SearchResolver {
    api: Arc<RecipesApi>,
    strategy: Box<dyn SearchStrategy>,
}

impl SearchResolver {
    pub fn new(api: Arc<RecipesApi>, strategy: Box<dyn SearchStrategy>) -> Self {
        Self { api, strategy }
    }

    /// Build a resolver for the configured [`SearchMode`].
    ///
    /// Local mode pre-loads the catalog with one full-list fetch, so this can
    /// fail on transport errors; remote mode never does.
    pub async fn from_config(
        config: &ClientConfig,
        api: Arc<RecipesApi>,
    ) -> Result<Self, ApiError> {
        let strategy: Box<dyn SearchStrategy> = match config.search_mode {
            SearchMode::Remote => Box::new(RemoteMatchStrategy::new(api.clone())),
            SearchMode::Local => {
                let page = api.list(DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET).await?;
                Box::new(ClientSideFilterStrategy::new(page.items))
            }
        };

        Ok(Self::new(api, strategy))
    }

    /// Resolve a query. Blank queries are equivalent to "fetch all" and echo
    /// no query string; zero matches is a successful, empty outcome.
    pub async fn resolve(&self, query: &str) -> Result<SearchOutcome, ApiError> {
        if query.trim().is_empty() {
            let page = self.api.list(DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET).await?;
            return Ok(SearchOutcome {
                query: String::new(),
                results: page.items,
            });
        }

        self.strategy.resolve(query).await
    }
}
