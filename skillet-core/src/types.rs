use serde::{Deserialize, Serialize};

/// Backend recipe identifiers are plain integers.
pub type RecipeId = i64;

/// Recipe difficulty label. Unknown labels normalize to Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// One block of a recipe step: either prose or an illustration URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StepBlock {
    Text(String),
    Image(String),
}

/// A numbered instruction step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub step_number: u32,
    pub blocks: Vec<StepBlock>,
}

/// The canonical recipe shape used by every view.
///
/// Raw backend records vary by API revision; [`crate::normalize`] folds them
/// into this shape. `ingredients` is always present (empty when unknown) and
/// `cooking_time` keeps `Some(0)` distinct from "unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub difficulty: Difficulty,
    pub cooking_time: Option<u32>,
    pub popularity: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
    /// Similarity score, present only when the source record carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// One page of the full recipe list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePage {
    pub items: Vec<Recipe>,
    pub limit: u32,
    pub offset: u32,
}

/// Outcome of resolving a search query. Result order is whatever the chosen
/// strategy returned; there is no client-side re-sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub query: String,
    pub results: Vec<Recipe>,
}

/// Acknowledgement from the stubbed write paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteAck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    pub message: String,
}
