//! The detail view: one recipe, its steps, and its similar-recipes section.

use crate::api::DEFAULT_SIMILAR_LIMIT;
use crate::detail::DetailAggregator;
use crate::error::ApiError;
use crate::pages::render_card;
use crate::state::{LoadState, RequestToken, ViewStateController};
use crate::types::{Recipe, RecipeId, StepBlock};

/// Handle for one issued detail load (primary + similar).
pub struct PendingDetail {
    id: RecipeId,
    recipe_token: RequestToken,
    similar_token: RequestToken,
}

/// Handle for a similar-only refresh.
pub struct PendingSimilar {
    id: RecipeId,
    token: RequestToken,
}

pub struct DetailPage {
    aggregator: DetailAggregator,
    recipe: ViewStateController<Recipe>,
    similar: ViewStateController<Vec<Recipe>>,
    current_id: Option<RecipeId>,
}

impl DetailPage {
    pub fn new(aggregator: DetailAggregator) -> Self {
        Self {
            aggregator,
            recipe: ViewStateController::new(),
            similar: ViewStateController::new(),
            current_id: None,
        }
    }

    /// Re-key the view to a recipe id. Both sections enter Loading and any
    /// outstanding fetches for the previous id are superseded.
    pub fn begin_load(&mut self, id: RecipeId) -> PendingDetail {
        self.current_id = Some(id);
        PendingDetail {
            id,
            recipe_token: self.recipe.begin(),
            similar_token: self.similar.begin(),
        }
    }

    /// Fetch both sections concurrently. A similar failure has already been
    /// absorbed into an empty set by the aggregator.
    pub async fn fetch(&self, pending: &PendingDetail) -> (Result<Recipe, ApiError>, Vec<Recipe>) {
        self.aggregator.load(pending.id, DEFAULT_SIMILAR_LIMIT).await
    }

    /// Apply results for a pending load. Stale results for a superseded id
    /// are discarded section by section.
    pub fn finish_load(
        &mut self,
        pending: PendingDetail,
        primary: Result<Recipe, ApiError>,
        similar: Vec<Recipe>,
    ) {
        self.recipe
            .complete(pending.recipe_token, primary.map_err(|e| e.to_string()));
        self.similar.complete(pending.similar_token, Ok(similar));
    }

    /// Convenience wrapper: issue, fetch, and apply in one call.
    pub async fn load(&mut self, id: RecipeId) {
        let pending = self.begin_load(id);
        let (primary, similar) = self.fetch(&pending).await;
        self.finish_load(pending, primary, similar);
    }

    /// Re-issue only the similar fetch, independent of the primary lifecycle.
    pub fn begin_refresh_similar(&mut self) -> Option<PendingSimilar> {
        let id = self.current_id?;
        Some(PendingSimilar {
            id,
            token: self.similar.begin(),
        })
    }

    pub async fn fetch_similar(&self, pending: &PendingSimilar) -> Vec<Recipe> {
        self.aggregator
            .load_similar(pending.id, DEFAULT_SIMILAR_LIMIT)
            .await
    }

    pub fn finish_refresh_similar(&mut self, pending: PendingSimilar, similar: Vec<Recipe>) {
        self.similar.complete(pending.token, Ok(similar));
    }

    /// Convenience wrapper for the user-triggered similar refresh.
    pub async fn refresh_similar(&mut self) {
        let Some(pending) = self.begin_refresh_similar() else {
            return;
        };
        let similar = self.fetch_similar(&pending).await;
        self.finish_refresh_similar(pending, similar);
    }

    pub fn recipe_state(&self) -> &LoadState<Recipe> {
        self.recipe.state()
    }

    pub fn similar_state(&self) -> &LoadState<Vec<Recipe>> {
        self.similar.state()
    }

    pub fn render(&self) -> String {
        match self.recipe.state() {
            LoadState::Idle | LoadState::Loading => "Loading recipe...".to_string(),
            // Primary failure is fatal: error panel plus back action, no
            // similar section.
            LoadState::Error(message) => format!("Error: {}\n\n[Back]", message),
            LoadState::Success(recipe) => {
                let mut out = format!("[Back]\n\n{}\n", recipe.title);
                out.push_str(&format!("Difficulty: {}\n", recipe.difficulty.as_str()));
                if let Some(minutes) = recipe.cooking_time {
                    out.push_str(&format!("Cooking time: {} min\n", minutes));
                }

                if !recipe.ingredients.is_empty() {
                    out.push_str("Ingredients:\n");
                    for ingredient in &recipe.ingredients {
                        out.push_str(&format!("  - {}\n", ingredient));
                    }
                }

                out.push_str("\nInstructions\n");
                out.push_str(&render_steps(recipe));

                out.push_str("\nSimilar recipes\n");
                out.push_str(&self.render_similar());
                out
            }
        }
    }

    fn render_similar(&self) -> String {
        match self.similar.state() {
            LoadState::Loading => "Loading recommendations...".to_string(),
            LoadState::Success(items) if !items.is_empty() => {
                let mut out = String::new();
                for recipe in items {
                    out.push_str(&render_card(recipe));
                    out.push('\n');
                }
                out
            }
            _ => "No similar recipes found yet.".to_string(),
        }
    }
}

fn render_steps(recipe: &Recipe) -> String {
    let Some(steps) = recipe.steps.as_ref().filter(|s| !s.is_empty()) else {
        return "No steps available for this recipe yet.\n".to_string();
    };

    let mut out = String::new();
    for step in steps {
        out.push_str(&format!("Step {}\n", step.step_number));
        for block in &step.blocks {
            match block {
                StepBlock::Text(text) => out.push_str(&format!("  {}\n", text)),
                StepBlock::Image(url) => out.push_str(&format!("  [image] {}\n", url)),
            }
        }
    }
    out
}
