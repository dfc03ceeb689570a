//! Recipe generation: prompt assembly, model invocation, defensive parsing.

use serde_json::Value;

use crate::error::GenerateError;
use crate::extract::extract_json_object;
use crate::llm::LlmProvider;
use crate::prompts;
use crate::types::{GenerationMode, GenerationRequest, Recipe};

/// Generate a recipe with the given provider.
///
/// Builds the mode-appropriate prompt, awaits the full model response,
/// recovers a JSON object from it (tolerating surrounding prose), and
/// validates the result against the recipe schema. The parsed recipe is
/// returned as-is: no normalization, no rounding.
pub async fn generate_recipe(
    provider: &dyn LlmProvider,
    request: &GenerationRequest,
) -> Result<Recipe, GenerateError> {
    let prompt = match request.mode() {
        GenerationMode::Ingredients(list) => prompts::render_ingredients_prompt(list),
        GenerationMode::Random => prompts::render_random_prompt(),
    };

    tracing::debug!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        "requesting recipe from model"
    );

    let raw = provider.complete(&prompt).await?;

    // If no balanced object is found, fall back to parsing the raw text so
    // the parse error carries the actual model output.
    let candidate = extract_json_object(&raw).unwrap_or_else(|| raw.trim());

    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

    validate_recipe(&value).map_err(GenerateError::SchemaViolation)?;

    serde_json::from_value(value).map_err(|e| GenerateError::SchemaViolation(e.to_string()))
}

/// Check the parsed value against the recipe schema.
///
/// Mirrors the wire contract: title non-empty, ingredients and instructions
/// present as arrays (emptiness tolerated), nutritionalInfo present with
/// four numeric fields.
fn validate_recipe(value: &Value) -> Result<(), String> {
    match value.get("title").and_then(Value::as_str) {
        Some(title) if !title.trim().is_empty() => {}
        _ => return Err("missing or empty title".to_string()),
    }

    if !value.get("ingredients").is_some_and(Value::is_array) {
        return Err("ingredients must be a list".to_string());
    }

    if !value.get("instructions").is_some_and(Value::is_array) {
        return Err("instructions must be a list".to_string());
    }

    let nutrition = value
        .get("nutritionalInfo")
        .ok_or_else(|| "missing nutritionalInfo".to_string())?;

    for field in ["calories", "protein", "carbs", "fat"] {
        if !nutrition.get(field).is_some_and(Value::is_number) {
            return Err(format!("nutritionalInfo.{} must be a number", field));
        }
    }

    Ok(())
}
