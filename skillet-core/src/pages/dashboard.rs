//! The list view: every recipe in the catalog.

use std::sync::Arc;

use crate::api::{RecipesApi, DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET};
use crate::pages::render_card;
use crate::state::{LoadState, ViewStateController};
use crate::types::Recipe;

pub struct DashboardPage {
    api: Arc<RecipesApi>,
    recipes: ViewStateController<Vec<Recipe>>,
}

impl DashboardPage {
    pub fn new(api: Arc<RecipesApi>) -> Self {
        Self {
            api,
            recipes: ViewStateController::new(),
        }
    }

    pub async fn load(&mut self) {
        self.load_page(DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET).await;
    }

    pub async fn load_page(&mut self, limit: u32, offset: u32) {
        let token = self.recipes.begin();
        let result = self
            .api
            .list(limit, offset)
            .await
            .map(|page| page.items)
            .map_err(|e| e.to_string());
        self.recipes.complete(token, result);
    }

    pub fn state(&self) -> &LoadState<Vec<Recipe>> {
        self.recipes.state()
    }

    pub fn render(&self) -> String {
        match self.recipes.state() {
            LoadState::Idle | LoadState::Loading => "Loading recipes...".to_string(),
            LoadState::Error(message) => format!("Error: {}", message),
            LoadState::Success(recipes) => {
                let mut out = format!("All Recipes\nRecipes found: {}\n", recipes.len());
                for recipe in recipes {
                    out.push('\n');
                    out.push_str(&render_card(recipe));
                    out.push('\n');
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, SearchMode};
    use crate::http::MockClient;
    use serde_json::json;

    fn page(mock: MockClient) -> DashboardPage {
        let config = ClientConfig::new("http://api.test", SearchMode::Remote);
        DashboardPage::new(Arc::new(RecipesApi::new(&config, Arc::new(mock))))
    }

    #[tokio::test]
    async fn test_renders_one_card_per_recipe() {
        let mock = MockClient::new().with_json(
            "http://api.test/recipes?limit=50&offset=0",
            json!({
                "items": [{ "id": 1, "title": "Borscht", "cooking_time": 90 }],
                "limit": 50,
                "offset": 0
            }),
        );

        let mut page = page(mock);
        assert_eq!(page.render(), "Loading recipes...");

        page.load().await;
        let rendered = page.render();
        assert!(rendered.contains("Recipes found: 1"));
        assert!(rendered.contains("Borscht"));
        assert!(rendered.contains("90 min"));
    }

    #[tokio::test]
    async fn test_failure_shows_error_and_no_stale_data() {
        let ok_body = json!({
            "items": [{ "id": 1, "title": "Borscht" }],
            "limit": 50,
            "offset": 0
        });
        let mock = MockClient::new()
            .with_json("http://api.test/recipes?limit=50&offset=0", ok_body)
            .with_status("http://api.test/recipes?limit=10&offset=0", 500);

        let mut page = page(mock);
        page.load().await;
        assert!(page.state().data().is_some());

        page.load_page(10, 0).await;
        assert!(page.state().data().is_none());
        assert!(page.render().starts_with("Error: "));
    }
}
