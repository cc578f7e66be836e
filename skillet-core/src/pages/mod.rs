//! Page controllers for the three views: list, search, detail.
//!
//! Each page owns its [`crate::state::ViewStateController`]s and renders a
//! plain-text panel. Routing between pages and visual styling live with the
//! caller.

mod dashboard;
mod detail;
mod search;

pub use dashboard::DashboardPage;
pub use detail::{DetailPage, PendingDetail, PendingSimilar};
pub use search::{PendingSearch, SearchPage};

use crate::types::Recipe;

/// Render one recipe card: title, difficulty badge, meta line, and up to four
/// ingredient tags with an overflow count.
pub(crate) fn render_card(recipe: &Recipe) -> String {
    let mut lines = vec![format!("{} [{}]", recipe.title, recipe.difficulty.as_str())];

    if !recipe.description.is_empty() {
        lines.push(format!("  {}", recipe.description));
    }

    let mut meta = Vec::new();
    if let Some(minutes) = recipe.cooking_time {
        meta.push(format!("{} min", minutes));
    }
    meta.push(format!("{} ingr.", recipe.ingredients.len()));
    lines.push(format!("  {}", meta.join(" | ")));

    if !recipe.ingredients.is_empty() {
        let shown: Vec<&str> = recipe
            .ingredients
            .iter()
            .take(4)
            .map(String::as_str)
            .collect();
        let mut tags = shown.join(", ");
        if recipe.ingredients.len() > 4 {
            tags.push_str(&format!(" +{}", recipe.ingredients.len() - 4));
        }
        lines.push(format!("  Ingredients: {}", tags));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    fn recipe() -> Recipe {
        Recipe {
            id: 1,
            title: "Borscht".to_string(),
            description: "Hearty beet soup".to_string(),
            image_url: String::new(),
            difficulty: Difficulty::Medium,
            cooking_time: Some(90),
            popularity: None,
            ingredients: vec![
                "beets".to_string(),
                "potato".to_string(),
                "carrot".to_string(),
                "onion".to_string(),
                "dill".to_string(),
            ],
            steps: None,
            score: None,
        }
    }

    #[test]
    fn test_card_shows_meta_and_overflow() {
        let card = render_card(&recipe());
        assert!(card.contains("Borscht [medium]"));
        assert!(card.contains("90 min"));
        assert!(card.contains("5 ingr."));
        assert!(card.contains("beets, potato, carrot, onion +1"));
    }

    #[test]
    fn test_card_omits_unknown_cooking_time() {
        let mut recipe = recipe();
        recipe.cooking_time = None;
        let card = render_card(&recipe);
        assert!(!card.contains("min"));
    }

    #[test]
    fn test_card_keeps_zero_cooking_time() {
        let mut recipe = recipe();
        recipe.cooking_time = Some(0);
        assert!(render_card(&recipe).contains("0 min"));
    }
}
