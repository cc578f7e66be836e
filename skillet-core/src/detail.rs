//! Detail view aggregation: one recipe plus its similar-recipes set.
//!
//! The two fetches are independent. A primary failure is fatal to the detail
//! view; a similar-recipes failure is absorbed into an empty set so the rest
//! of the page keeps working.

use std::sync::Arc;

use crate::api::RecipesApi;
use crate::error::ApiError;
use crate::types::{Recipe, RecipeId};

pub struct DetailAggregator {
    api: Arc<RecipesApi>,
}

impl DetailAggregator {
    pub fn new(api: Arc<RecipesApi>) -> Self {
        Self { api }
    }

    /// Fetch the primary recipe. NotFound and transport errors propagate.
    pub async fn load_detail(&self, id: RecipeId) -> Result<Recipe, ApiError> {
        self.api.get(id).await
    }

    /// Fetch the similar-recipes set. Failure is absorbed into an empty set;
    /// the similar section then shows its own empty state.
    pub async fn load_similar(&self, id: RecipeId, limit: u32) -> Vec<Recipe> {
        match self.api.similar(id, limit).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(recipe_id = id, error = %e, "similar recipes fetch failed");
                Vec::new()
            }
        }
    }

    /// Fetch the primary recipe and its similar set concurrently. Neither
    /// fetch blocks the other.
    pub async fn load(
        &self,
        id: RecipeId,
        similar_limit: u32,
    ) -> (Result<Recipe, ApiError>, Vec<Recipe>) {
        tokio::join!(self.load_detail(id), self.load_similar(id, similar_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, SearchMode};
    use crate::http::MockClient;
    use serde_json::json;

    fn aggregator(mock: MockClient) -> DetailAggregator {
        let config = ClientConfig::new("http://api.test", SearchMode::Remote);
        DetailAggregator::new(Arc::new(RecipesApi::new(&config, Arc::new(mock))))
    }

    #[tokio::test]
    async fn test_similar_failure_does_not_affect_primary() {
        let mock = MockClient::new()
            .with_json(
                "http://api.test/recipes/1",
                json!({ "id": 1, "title": "Borscht" }),
            )
            .with_error("http://api.test/recipes/1/similar?limit=5", "refused");

        let (primary, similar) = aggregator(mock).load(1, 5).await;
        assert_eq!(primary.unwrap().title, "Borscht");
        assert!(similar.is_empty());
    }

    #[tokio::test]
    async fn test_primary_failure_propagates() {
        let mock = MockClient::new()
            .with_status("http://api.test/recipes/7", 404)
            .with_json("http://api.test/recipes/7/similar?limit=5", json!({ "items": [] }));

        let (primary, _) = aggregator(mock).load(7, 5).await;
        assert!(matches!(primary.unwrap_err(), ApiError::NotFound { id: 7 }));
    }

    #[tokio::test]
    async fn test_similar_is_independently_retryable() {
        let mock = MockClient::new().with_json(
            "http://api.test/recipes/1/similar?limit=5",
            json!({ "items": [{ "id": 2, "title": "Solyanka", "score": 0.8 }] }),
        );

        let aggregator = aggregator(mock);
        let similar = aggregator.load_similar(1, 5).await;
        assert_eq!(similar.len(), 1);

        // Refresh hits only the similar endpoint, never the primary.
        let again = aggregator.load_similar(1, 5).await;
        assert_eq!(again, similar);
    }
}
