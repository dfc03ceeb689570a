use crate::api::ErrorResponse;
use crate::identity::AuthUser;
use crate::profile::{Profile, ProfileUpdate};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Update the authenticated user's profile
///
/// Absent fields are left untouched; the full updated profile is returned.
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "profile",
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_profile(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> impl IntoResponse {
    if update
        .username
        .as_deref()
        .is_some_and(|u| u.trim().is_empty())
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Username cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    match state.profiles.update_profile(user.id, update).await {
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
