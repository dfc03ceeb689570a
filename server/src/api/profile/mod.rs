pub mod get;
pub mod update;

use crate::profile::{Profile, ProfileUpdate};
use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/profile endpoints (mounted at /api/profile)
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get::get_profile).put(update::update_profile))
}

#[derive(OpenApi)]
#[openapi(
    paths(get::get_profile, update::update_profile),
    components(schemas(Profile, ProfileUpdate))
)]
pub struct ApiDoc;
