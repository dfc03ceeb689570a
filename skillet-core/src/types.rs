//! Recipe data model shared by the generation service and its clients.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for recipe generation.
///
/// An absent or empty ingredient list selects random mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
}

/// Which prompt template a request selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode<'a> {
    /// Produce a recipe constrained to exactly these ingredients.
    Ingredients(&'a [String]),
    /// Produce an arbitrary recipe.
    Random,
}

impl GenerationRequest {
    pub fn from_ingredients(ingredients: Vec<String>) -> Self {
        Self {
            ingredients: Some(ingredients),
        }
    }

    pub fn random() -> Self {
        Self { ingredients: None }
    }

    pub fn mode(&self) -> GenerationMode<'_> {
        match self.ingredients.as_deref() {
            Some(list) if !list.is_empty() => GenerationMode::Ingredients(list),
            _ => GenerationMode::Random,
        }
    }
}

/// A generated recipe.
///
/// Created per request and held only for display; nothing is persisted.
/// Step order in `instructions` is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(
        rename = "nutritionalInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub nutritional_info: Option<NutritionalInfo>,
}

/// Estimated nutrition for one serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionalInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_ingredients_is_random() {
        let request: GenerationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.mode(), GenerationMode::Random);
    }

    #[test]
    fn test_empty_ingredients_is_random() {
        let request: GenerationRequest = serde_json::from_str(r#"{"ingredients": []}"#).unwrap();
        assert_eq!(request.mode(), GenerationMode::Random);
    }

    #[test]
    fn test_ingredients_mode_preserves_order() {
        let request = GenerationRequest::from_ingredients(vec![
            "egg".to_string(),
            "rice".to_string(),
        ]);
        match request.mode() {
            GenerationMode::Ingredients(list) => assert_eq!(list, ["egg", "rice"]),
            GenerationMode::Random => panic!("expected ingredients mode"),
        }
    }

    #[test]
    fn test_recipe_serializes_nutrition_field_name() {
        let recipe = Recipe {
            title: "Toast".to_string(),
            ingredients: vec!["bread".to_string()],
            instructions: vec!["toast it".to_string()],
            nutritional_info: Some(NutritionalInfo {
                calories: 90.0,
                protein: 3.0,
                carbs: 17.0,
                fat: 1.0,
            }),
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert!(json.get("nutritionalInfo").is_some());
        assert!(json.get("nutritional_info").is_none());
    }
}
