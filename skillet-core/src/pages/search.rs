//! The search view.

use crate::error::ApiError;
use crate::pages::render_card;
use crate::search::SearchResolver;
use crate::state::{LoadState, RequestToken, ViewStateController};
use crate::types::SearchOutcome;

/// Handle for one issued search; pass it back to [`SearchPage::finish_search`].
pub struct PendingSearch {
    query: String,
    token: RequestToken,
}

pub struct SearchPage {
    resolver: SearchResolver,
    results: ViewStateController<SearchOutcome>,
    searched: bool,
}

impl SearchPage {
    pub fn new(resolver: SearchResolver) -> Self {
        Self {
            resolver,
            results: ViewStateController::new(),
            searched: false,
        }
    }

    /// Issue a search: enters Loading and supersedes any outstanding search.
    pub fn begin_search(&mut self, query: &str) -> PendingSearch {
        self.searched = true;
        PendingSearch {
            query: query.to_string(),
            token: self.results.begin(),
        }
    }

    /// Resolve a pending search over the wire.
    pub async fn fetch(&self, pending: &PendingSearch) -> Result<SearchOutcome, ApiError> {
        self.resolver.resolve(&pending.query).await
    }

    /// Apply a search result. Stale results (superseded by a newer
    /// `begin_search`) are discarded.
    pub fn finish_search(
        &mut self,
        pending: PendingSearch,
        outcome: Result<SearchOutcome, ApiError>,
    ) {
        self.results
            .complete(pending.token, outcome.map_err(|e| e.to_string()));
    }

    /// Convenience wrapper: issue, fetch, and apply in one call.
    pub async fn run_search(&mut self, query: &str) {
        let pending = self.begin_search(query);
        let outcome = self.fetch(&pending).await;
        self.finish_search(pending, outcome);
    }

    pub fn state(&self) -> &LoadState<SearchOutcome> {
        self.results.state()
    }

    pub fn render(&self) -> String {
        if !self.searched {
            return [
                "Search tips:",
                "  - Enter the dish name (e.g.: \"borscht\", \"pizza\")",
                "  - Specify an ingredient (e.g.: \"chicken\", \"tomatoes\")",
                "  - You can search by any word from the description",
            ]
            .join("\n");
        }

        match self.results.state() {
            LoadState::Idle | LoadState::Loading => "Searching recipes...".to_string(),
            LoadState::Error(message) => format!("Error: {}", message),
            LoadState::Success(outcome) if outcome.results.is_empty() => {
                "Recipes not found\nTry adjusting your query".to_string()
            }
            LoadState::Success(outcome) => {
                let mut out = format!(
                    "Search Results\nRecipes found: {}\n",
                    outcome.results.len()
                );
                for recipe in &outcome.results {
                    out.push('\n');
                    out.push_str(&render_card(recipe));
                    out.push('\n');
                }
                out
            }
        }
    }
}
