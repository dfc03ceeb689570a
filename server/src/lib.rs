pub mod api;
pub mod identity;
pub mod profile;

use std::sync::Arc;

use axum::http::{header, HeaderName, Method};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa_swagger_ui::SwaggerUi;

use identity::IdentityProvider;
use profile::ProfileStore;
use skillet_core::llm::LlmProvider;

/// Capabilities shared across all handlers.
///
/// The identity provider and profile store are trait objects so the hosted
/// services they stand in for can be swapped without touching handlers.
pub struct Services {
    pub provider: Arc<dyn LlmProvider>,
    pub identity: Arc<dyn IdentityProvider>,
    pub profiles: Arc<dyn ProfileStore>,
}

/// Application state shared across all handlers
pub type AppState = Arc<Services>;

/// Assemble the application router.
///
/// The generation endpoint is public; profile and authed test endpoints sit
/// behind the bearer-token middleware. CORS is wide open (any origin) with
/// the header set browsers send through the hosted-platform client.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    // Protected routes (auth required)
    let protected = Router::new()
        .nest("/api/test", api::testing::router())
        .nest("/api/profile", api::profile::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            identity::middleware::require_auth,
        ));

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .merge(api::generate::router())
        .merge(api::public::router())
        .merge(protected)
        .merge(swagger_ui)
        .with_state(state)
        .layer(cors)
}
