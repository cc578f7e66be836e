//! Typed client for the recipe catalog HTTP API.
//!
//! All methods return normalized [`Recipe`] values; raw backend records never
//! escape this module.

use std::sync::Arc;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, FetchError};
use crate::http::HttpClient;
use crate::normalize::normalize;
use crate::types::{Recipe, RecipeId, RecipePage, SearchOutcome, WriteAck};

/// Default page size for the list view.
pub const DEFAULT_LIST_LIMIT: u32 = 50;
/// Default offset for the list view.
pub const DEFAULT_LIST_OFFSET: u32 = 0;
/// Default similar-recipes set size.
pub const DEFAULT_SIMILAR_LIMIT: u32 = 5;

/// Client for the recipe catalog backend.
pub struct RecipesApi {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl RecipesApi {
    pub fn new(config: &ClientConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch one page of the full recipe list.
    ///
    /// `GET /recipes?limit=&offset=`
    pub async fn list(&self, limit: u32, offset: u32) -> Result<RecipePage, ApiError> {
        let url = format!("{}/recipes?limit={}&offset={}", self.base_url, limit, offset);
        let body = self.http.get_json(&url).await?;

        Ok(RecipePage {
            items: normalize_items(&body, "items"),
            limit: u32_field(&body, "limit").unwrap_or(limit),
            offset: u32_field(&body, "offset").unwrap_or(offset),
        })
    }

    /// Resolve a non-empty query against the backend match endpoint.
    ///
    /// `GET /recipes/match?query=` (URL-encoded). The outcome echoes the
    /// backend's query string. Zero matches is a successful, empty outcome.
    pub async fn match_recipes(&self, query: &str) -> Result<SearchOutcome, ApiError> {
        let mut url = reqwest::Url::parse(&format!("{}/recipes/match", self.base_url))
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut().append_pair("query", query);

        let body = self.http.get_json(url.as_str()).await?;

        let echoed = body
            .get("query")
            .and_then(Value::as_str)
            .unwrap_or(query)
            .to_string();

        Ok(SearchOutcome {
            query: echoed,
            results: normalize_items(&body, "results"),
        })
    }

    /// Fetch a single recipe, with steps when the backend has them.
    ///
    /// `GET /recipes/{id}`. A 404 is reported as [`ApiError::NotFound`],
    /// distinct from transport failure.
    pub async fn get(&self, id: RecipeId) -> Result<Recipe, ApiError> {
        let url = format!("{}/recipes/{}", self.base_url, id);

        match self.http.get_json(&url).await {
            Ok(body) => Ok(normalize(&body)),
            Err(FetchError::Status { code: 404 }) => Err(ApiError::NotFound { id }),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch the similar-recipes set for a recipe, in backend ranking order.
    ///
    /// `GET /recipes/{id}/similar?limit=`. Each item keeps its `score` when
    /// the backend provided one.
    pub async fn similar(&self, id: RecipeId, limit: u32) -> Result<Vec<Recipe>, ApiError> {
        let url = format!("{}/recipes/{}/similar?limit={}", self.base_url, id, limit);
        let body = self.http.get_json(&url).await?;
        Ok(normalize_items(&body, "items"))
    }

    /// Stubbed create. The backend has no write endpoint yet, so this always
    /// succeeds without a network call and returns a synthetic identifier.
    /// Keep this contract until a real endpoint exists.
    pub async fn add_recipe(&self, _data: &Value) -> Result<WriteAck, ApiError> {
        let id = chrono::Utc::now().timestamp_millis();
        tracing::debug!(id, "add_recipe stub: no write endpoint yet");

        Ok(WriteAck {
            id: Some(id),
            message: "Backend add endpoint not yet implemented".to_string(),
        })
    }

    /// Stubbed delete. Always succeeds without a network call; see
    /// [`RecipesApi::add_recipe`].
    pub async fn delete_recipe(&self, id: RecipeId) -> Result<WriteAck, ApiError> {
        tracing::debug!(id, "delete_recipe stub: no write endpoint yet");

        Ok(WriteAck {
            id: None,
            message: "Backend delete endpoint not yet implemented".to_string(),
        })
    }
}

fn normalize_items(body: &Value, key: &str) -> Vec<Recipe> {
    body.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(normalize).collect())
        .unwrap_or_default()
}

fn u32_field(body: &Value, key: &str) -> Option<u32> {
    body.get(key).and_then(Value::as_u64).map(|n| n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchMode;
    use crate::http::MockClient;
    use serde_json::json;

    fn api(mock: MockClient) -> RecipesApi {
        let config = ClientConfig::new("http://api.test", SearchMode::Remote);
        RecipesApi::new(&config, Arc::new(mock))
    }

    #[tokio::test]
    async fn test_list_normalizes_items() {
        let mock = MockClient::new().with_json(
            "http://api.test/recipes?limit=50&offset=0",
            json!({
                "items": [{ "id": 1, "title": "Borscht", "cooking_time": 90 }],
                "limit": 50,
                "offset": 0
            }),
        );

        let page = api(mock).list(50, 0).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "Borscht");
        assert_eq!(page.items[0].cooking_time, Some(90));
        assert_eq!(page.items[0].ingredients, Vec::<String>::new());
        assert_eq!(page.limit, 50);
    }

    #[tokio::test]
    async fn test_match_encodes_query_and_echoes_backend_query() {
        let mock = MockClient::new().with_json(
            "http://api.test/recipes/match?query=chicken+soup",
            json!({ "query": "chicken soup", "results": [{ "id": 3, "title": "Chicken Soup" }] }),
        );

        let outcome = api(mock).match_recipes("chicken soup").await.unwrap();
        assert_eq!(outcome.query, "chicken soup");
        assert_eq!(outcome.results.len(), 1);
    }

    #[tokio::test]
    async fn test_match_zero_results_is_success() {
        let mock = MockClient::new().with_json(
            "http://api.test/recipes/match?query=chicken",
            json!({ "query": "chicken", "results": [] }),
        );

        let outcome = api(mock).match_recipes("chicken").await.unwrap();
        assert!(outcome.results.is_empty());
    }

    #[tokio::test]
    async fn test_get_maps_404_to_not_found() {
        let mock = MockClient::new().with_status("http://api.test/recipes/7", 404);

        let err = api(mock).get(7).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { id: 7 }));
        assert_eq!(err.to_string(), "Recipe 7 not found");
    }

    #[tokio::test]
    async fn test_get_other_status_is_transport_error() {
        let mock = MockClient::new().with_status("http://api.test/recipes/7", 500);

        let err = api(mock).get(7).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Transport(FetchError::Status { code: 500 })
        ));
    }

    #[tokio::test]
    async fn test_similar_preserves_order_and_score() {
        let mock = MockClient::new().with_json(
            "http://api.test/recipes/1/similar?limit=5",
            json!({
                "items": [
                    { "id": 9, "title": "Beet Salad", "score": 0.91 },
                    { "id": 4, "title": "Solyanka", "score": 0.88 }
                ]
            }),
        );

        let similar = api(mock).similar(1, 5).await.unwrap();
        assert_eq!(similar.len(), 2);
        assert_eq!(similar[0].id, 9);
        assert_eq!(similar[0].score, Some(0.91));
        assert_eq!(similar[1].id, 4);
    }

    #[tokio::test]
    async fn test_write_stubs_succeed_without_network() {
        // Empty mock: any network call would error.
        let api = api(MockClient::new());

        let ack = api.add_recipe(&json!({ "title": "Pelmeni" })).await.unwrap();
        assert!(ack.id.is_some());
        assert_eq!(ack.message, "Backend add endpoint not yet implemented");

        let ack = api.delete_recipe(12).await.unwrap();
        assert_eq!(ack.id, None);
        assert_eq!(ack.message, "Backend delete endpoint not yet implemented");
    }
}
