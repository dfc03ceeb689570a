//! Identity capability.
//!
//! The real system delegates sign-in and session management to a hosted
//! identity provider; this service only ever sees bearer tokens. The
//! [`IdentityProvider`] trait is that boundary, and [`StaticTokenIdentity`]
//! is the in-process stand-in used for development and tests.

pub mod extractor;
pub mod middleware;

pub use extractor::AuthUser;

use async_trait::async_trait;
use uuid::Uuid;

/// Default token accepted by [`StaticTokenIdentity`] when none is configured.
pub const DEV_TEST_TOKEN: &str = "dev-test-token";

/// The authenticated caller, as resolved from a session token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
}

/// Capability interface over the external identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a bearer token to the current user, if the session is valid.
    async fn authenticate(&self, token: &str) -> Option<CurrentUser>;
}

/// Identity provider that accepts a single static token.
///
/// Stands in for the hosted provider: one configured token maps to one
/// user, everything else is rejected.
#[derive(Debug)]
pub struct StaticTokenIdentity {
    token: String,
    user: CurrentUser,
}

impl StaticTokenIdentity {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: CurrentUser {
                id: Uuid::new_v4(),
                username: username.into(),
            },
        }
    }

    /// Build from SKILLET_AUTH_TOKEN, falling back to the dev token.
    pub fn from_env() -> Self {
        let token =
            std::env::var("SKILLET_AUTH_TOKEN").unwrap_or_else(|_| DEV_TEST_TOKEN.to_string());
        Self::new(token, "dev")
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenIdentity {
    async fn authenticate(&self, token: &str) -> Option<CurrentUser> {
        (token == self.token).then(|| self.user.clone())
    }
}
