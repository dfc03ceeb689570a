//! Profile storage capability.
//!
//! User profiles live in an external relational store owned by the hosting
//! platform; this service reads and updates them through the
//! [`ProfileStore`] trait. [`InMemoryProfileStore`] is the in-process
//! stand-in used for development and tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Profile fields owned by the user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile not found")]
    NotFound,
}

/// Capability interface over the external profile store.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn read_profile(&self, user_id: Uuid) -> Result<Profile, ProfileError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Profile, ProfileError>;
}

/// Profile store backed by a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile outside the capability interface.
    pub fn seed(&self, user_id: Uuid, profile: Profile) {
        self.profiles.write().unwrap().insert(user_id, profile);
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn read_profile(&self, user_id: Uuid) -> Result<Profile, ProfileError> {
        self.profiles
            .read()
            .unwrap()
            .get(&user_id)
            .cloned()
            .ok_or(ProfileError::NotFound)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Profile, ProfileError> {
        let mut profiles = self.profiles.write().unwrap();
        let profile = profiles.get_mut(&user_id).ok_or(ProfileError::NotFound)?;

        if let Some(username) = update.username {
            profile.username = username;
        }
        if let Some(full_name) = update.full_name {
            profile.full_name = Some(full_name);
        }
        if let Some(email) = update.email {
            profile.email = Some(email);
        }

        Ok(profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_profile_is_not_found() {
        let store = InMemoryProfileStore::new();
        let result = store.read_profile(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ProfileError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_merges_only_present_fields() {
        let store = InMemoryProfileStore::new();
        let user_id = Uuid::new_v4();
        store.seed(
            user_id,
            Profile {
                username: "alice".to_string(),
                full_name: Some("Alice A".to_string()),
                email: None,
            },
        );

        let updated = store
            .update_profile(
                user_id,
                ProfileUpdate {
                    email: Some("alice@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "alice");
        assert_eq!(updated.full_name.as_deref(), Some("Alice A"));
        assert_eq!(updated.email.as_deref(), Some("alice@example.com"));
    }
}
