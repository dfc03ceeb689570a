use crate::api::ErrorResponse;
use crate::AppState;
use axum::routing::post;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json, Router};
use skillet_core::{generate_recipe, GenerationRequest, NutritionalInfo, Recipe};
use utoipa::OpenApi;

/// Generate a recipe
///
/// Builds a prompt from the optional ingredient list (absent or empty means
/// random mode), calls the configured model provider, and returns the
/// validated recipe. The endpoint is stateless; nothing is persisted.
///
/// Every failure (provider call, JSON parse, schema validation) is converted
/// here into the shared error envelope.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "generate",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated recipe", body = Recipe),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> impl IntoResponse {
    match generate_recipe(state.provider.as_ref(), &request).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => {
            tracing::error!("Recipe generation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Returns the router for the generation endpoint (public, no auth)
pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate),
    components(schemas(GenerationRequest, Recipe, NutritionalInfo))
)]
pub struct ApiDoc;
