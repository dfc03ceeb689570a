use crate::api::ErrorResponse;
use crate::identity::AuthUser;
use crate::profile::Profile;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Read the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "The user's profile", body = Profile),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_profile(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    match state.profiles.read_profile(user.id).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
