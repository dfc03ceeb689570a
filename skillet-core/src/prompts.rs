//! Prompt templates for recipe generation.

/// Shared response-format instructions appended to both templates.
///
/// The JSON shape here must stay in sync with [`crate::types::Recipe`].
const RECIPE_FORMAT: &str = r#"You must return ONLY a valid JSON object in this exact format, with no additional text:
{
  "title": "Recipe Title",
  "ingredients": ["ingredient 1", "ingredient 2"],
  "instructions": ["step 1", "step 2"],
  "nutritionalInfo": {
    "calories": 500,
    "protein": 20,
    "carbs": 30,
    "fat": 15
  }
}
Make sure all numbers in nutritionalInfo are realistic positive numbers."#;

/// Render the prompt for a recipe constrained to the supplied ingredients.
pub fn render_ingredients_prompt(ingredients: &[String]) -> String {
    format!(
        "Create a recipe using these ingredients: {}.\n{}",
        ingredients.join(", "),
        RECIPE_FORMAT
    )
}

/// Render the prompt for an unconstrained recipe.
pub fn render_random_prompt() -> String {
    format!("Create a random recipe.\n{}", RECIPE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredients_prompt_joins_with_commas() {
        let prompt = render_ingredients_prompt(&[
            "egg".to_string(),
            "rice".to_string(),
            "scallions".to_string(),
        ]);

        assert!(prompt.contains("egg, rice, scallions"));
        assert!(prompt.contains("nutritionalInfo"));
        assert!(prompt.contains("ONLY a valid JSON object"));
    }

    #[test]
    fn test_random_prompt_references_no_ingredients() {
        let prompt = render_random_prompt();

        assert!(prompt.contains("Create a random recipe"));
        assert!(!prompt.contains("using these ingredients"));
        assert!(prompt.contains("nutritionalInfo"));
    }
}
