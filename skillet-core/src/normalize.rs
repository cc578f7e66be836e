//! Normalization of raw backend records into the canonical recipe shape.
//!
//! Backend payloads are loose JSON whose field names vary by API revision
//! (`cover_url` vs `image_url`, `cooking_time` vs `cookingTime`). Nothing
//! downstream of this module trusts raw field presence.

use serde_json::Value;

use crate::types::{Difficulty, Recipe, Step, StepBlock};

/// Convert one raw backend record into a [`Recipe`].
///
/// Total over arbitrary JSON: missing or mistyped fields fall back to
/// defaults instead of failing. Field precedence, first present wins:
/// - image: `cover_url`, `image_url`, `imageUrl`, then empty string
/// - cooking time: `cooking_time`, `cookingTime`, then unknown (`0` is kept)
/// - difficulty: recognized label, else `medium`
/// - ingredients: the raw array if it is one, else empty
pub fn normalize(raw: &Value) -> Recipe {
    let score = raw.get("score").and_then(Value::as_f64);

    Recipe {
        id: raw.get("id").and_then(Value::as_i64).unwrap_or_default(),
        title: string_field(raw, "title"),
        description: string_field(raw, "description"),
        image_url: first_string(raw, &["cover_url", "image_url", "imageUrl"]),
        difficulty: raw
            .get("difficulty")
            .and_then(Value::as_str)
            .and_then(Difficulty::from_label)
            .unwrap_or_default(),
        cooking_time: first_u32(raw, &["cooking_time", "cookingTime"]),
        popularity: raw
            .get("popularity")
            .and_then(Value::as_u64)
            .map(|n| n as u32),
        ingredients: raw
            .get("ingredients")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        steps: raw
            .get("steps")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(parse_step).collect()),
        score,
    }
}

fn string_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn first_string(raw: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| raw.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

fn first_u32(raw: &Value, keys: &[&str]) -> Option<u32> {
    keys.iter()
        .find_map(|key| raw.get(*key).and_then(Value::as_u64))
        .map(|n| n as u32)
}

/// Parse one step. Steps without a valid number (>= 1) are dropped;
/// malformed blocks within a step are skipped.
fn parse_step(value: &Value) -> Option<Step> {
    let step_number = value
        .get("step_number")
        .and_then(Value::as_u64)
        .filter(|n| *n >= 1)? as u32;

    let blocks = value
        .get("blocks")
        .and_then(Value::as_array)
        .map(|blocks| blocks.iter().filter_map(parse_block).collect())
        .unwrap_or_default();

    Some(Step {
        step_number,
        blocks,
    })
}

fn parse_block(value: &Value) -> Option<StepBlock> {
    let kind = value.get("type").and_then(Value::as_str)?;
    let content = value.get("value").and_then(Value::as_str)?.to_string();

    match kind {
        "text" => Some(StepBlock::Text(content)),
        "image" => Some(StepBlock::Image(content)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_ingredients_become_empty_vec() {
        let raw = json!({ "id": 1, "title": "Borscht" });
        assert_eq!(normalize(&raw).ingredients, Vec::<String>::new());
    }

    #[test]
    fn test_non_array_ingredients_become_empty_vec() {
        let raw = json!({ "id": 1, "ingredients": "beets" });
        assert_eq!(normalize(&raw).ingredients, Vec::<String>::new());
    }

    #[test]
    fn test_difficulty_defaults_to_medium() {
        assert_eq!(normalize(&json!({})).difficulty, Difficulty::Medium);
        assert_eq!(
            normalize(&json!({ "difficulty": "brutal" })).difficulty,
            Difficulty::Medium
        );
        assert_eq!(
            normalize(&json!({ "difficulty": "hard" })).difficulty,
            Difficulty::Hard
        );
    }

    #[test]
    fn test_cooking_time_zero_is_preserved() {
        let raw = json!({ "cooking_time": 0 });
        assert_eq!(normalize(&raw).cooking_time, Some(0));
    }

    #[test]
    fn test_cooking_time_absent_is_none() {
        assert_eq!(normalize(&json!({})).cooking_time, None);
    }

    #[test]
    fn test_image_url_precedence() {
        let raw = json!({ "cover_url": "a.jpg", "image_url": "b.jpg", "imageUrl": "c.jpg" });
        assert_eq!(normalize(&raw).image_url, "a.jpg");

        let raw = json!({ "image_url": "b.jpg", "imageUrl": "c.jpg" });
        assert_eq!(normalize(&raw).image_url, "b.jpg");

        let raw = json!({ "imageUrl": "c.jpg" });
        assert_eq!(normalize(&raw).image_url, "c.jpg");

        assert_eq!(normalize(&json!({})).image_url, "");
    }

    #[test]
    fn test_score_only_present_when_source_carried_one() {
        assert_eq!(normalize(&json!({})).score, None);
        assert_eq!(normalize(&json!({ "score": 0.93 })).score, Some(0.93));
    }

    #[test]
    fn test_steps_parsed_with_blocks() {
        let raw = json!({
            "steps": [
                {
                    "step_number": 1,
                    "blocks": [
                        { "type": "text", "value": "Chop the beets" },
                        { "type": "image", "value": "https://img/step1.jpg" },
                        { "type": "video", "value": "ignored" }
                    ]
                },
                { "step_number": 0, "blocks": [] }
            ]
        });

        let steps = normalize(&raw).steps.unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].step_number, 1);
        assert_eq!(
            steps[0].blocks,
            vec![
                StepBlock::Text("Chop the beets".to_string()),
                StepBlock::Image("https://img/step1.jpg".to_string()),
            ]
        );
    }

    #[test]
    fn test_totally_empty_record_normalizes() {
        let recipe = normalize(&json!({}));
        assert_eq!(recipe.id, 0);
        assert_eq!(recipe.title, "");
        assert_eq!(recipe.description, "");
        assert!(recipe.steps.is_none());
        assert_eq!(recipe.popularity, None);
    }

    #[test]
    fn test_popularity_passthrough() {
        assert_eq!(normalize(&json!({ "popularity": 42 })).popularity, Some(42));
    }
}
