//! Request-builder state: the collected ingredient list, the single-slot
//! request-in-flight guard, and the session that holds the displayed recipe.

use std::sync::atomic::{AtomicBool, Ordering};

use skillet_core::{GenerationRequest, Recipe};
use thiserror::Error;

use crate::client::{ClientError, GenerateBackend};

/// Client-side failures that block a request before it is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ingredient cannot be empty")]
    EmptyIngredient,

    #[error("add at least one ingredient first")]
    NoIngredients,
}

/// The collected ingredients. Never stores an empty string.
#[derive(Debug, Default)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim and append one ingredient; whitespace-only input is rejected.
    pub fn add(&mut self, raw: &str) -> Result<(), ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyIngredient);
        }
        self.items.push(trimmed.to_string());
        Ok(())
    }

    /// Remove the ingredient at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Single-slot token enforcing at most one outstanding generation request.
///
/// `begin` hands out the slot or refuses; the slot releases itself on drop,
/// so both success and failure paths clear it.
#[derive(Debug, Default)]
pub struct RequestGuard {
    in_flight: AtomicBool,
}

impl RequestGuard {
    pub fn begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()?;
        Some(InFlight { guard: self })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

#[must_use]
pub struct InFlight<'a> {
    guard: &'a RequestGuard,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.store(false, Ordering::Release);
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("a generation request is already in flight")]
    Busy,

    #[error(transparent)]
    Request(#[from] ClientError),
}

/// One user's generation session: issues requests through the guard and
/// keeps the last successful recipe for display.
pub struct RecipeSession<B> {
    backend: B,
    guard: RequestGuard,
    recipe: Option<Recipe>,
}

impl<B: GenerateBackend> RecipeSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            guard: RequestGuard::default(),
            recipe: None,
        }
    }

    /// The recipe currently on display, if any.
    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// Generate from the collected ingredients. Requires at least one.
    pub async fn generate_from_ingredients(
        &mut self,
        ingredients: &IngredientList,
    ) -> Result<&Recipe, SessionError> {
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients.into());
        }
        self.generate(GenerationRequest::from_ingredients(
            ingredients.items().to_vec(),
        ))
        .await
    }

    /// Generate an unconstrained recipe.
    pub async fn generate_random(&mut self) -> Result<&Recipe, SessionError> {
        self.generate(GenerationRequest::random()).await
    }

    async fn generate(&mut self, request: GenerationRequest) -> Result<&Recipe, SessionError> {
        let _slot = self.guard.begin().ok_or(SessionError::Busy)?;

        match self.backend.generate(&request).await {
            Ok(recipe) => Ok(&*self.recipe.insert(recipe)),
            // Previous recipe stays on display
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    fn sample_recipe(title: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            ingredients: vec!["egg".to_string()],
            instructions: vec!["cook".to_string()],
            nutritional_info: None,
        }
    }

    /// Backend stub with a scripted sequence of results.
    struct StubBackend {
        results: std::sync::Mutex<Vec<Result<Recipe, ClientError>>>,
    }

    impl StubBackend {
        fn new(results: Vec<Result<Recipe, ClientError>>) -> Self {
            Self {
                results: std::sync::Mutex::new(results),
            }
        }
    }

    #[async_trait]
    impl GenerateBackend for StubBackend {
        async fn generate(&self, _request: &GenerationRequest) -> Result<Recipe, ClientError> {
            self.results.lock().unwrap().remove(0)
        }
    }

    #[test]
    fn test_add_trims_whitespace() {
        let mut list = IngredientList::new();
        list.add("  egg  ").unwrap();
        assert_eq!(list.items(), ["egg"]);
    }

    #[test]
    fn test_add_rejects_empty() {
        let mut list = IngredientList::new();
        assert_eq!(list.add("   "), Err(ValidationError::EmptyIngredient));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_by_position() {
        let mut list = IngredientList::new();
        list.add("egg").unwrap();
        list.add("rice").unwrap();

        assert_eq!(list.remove(0).as_deref(), Some("egg"));
        assert_eq!(list.items(), ["rice"]);
        assert_eq!(list.remove(5), None);
    }

    #[test]
    fn test_guard_admits_one_at_a_time() {
        let guard = RequestGuard::default();

        let slot = guard.begin().unwrap();
        assert!(guard.is_in_flight());
        assert!(guard.begin().is_none());

        drop(slot);
        assert!(!guard.is_in_flight());
        assert!(guard.begin().is_some());
    }

    #[tokio::test]
    async fn test_zero_ingredients_blocked_before_any_request() {
        let mut session = RecipeSession::new(StubBackend::new(vec![]));
        let list = IngredientList::new();

        let err = session.generate_from_ingredients(&list).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::NoIngredients)
        ));
        // The stub had no scripted results, so no request was made
    }

    #[tokio::test]
    async fn test_success_replaces_displayed_recipe() {
        let mut session = RecipeSession::new(StubBackend::new(vec![
            Ok(sample_recipe("First")),
            Ok(sample_recipe("Second")),
        ]));

        session.generate_random().await.unwrap();
        assert_eq!(session.current_recipe().unwrap().title, "First");

        session.generate_random().await.unwrap();
        assert_eq!(session.current_recipe().unwrap().title, "Second");
    }

    #[tokio::test]
    async fn test_failure_retains_previous_recipe() {
        let mut session = RecipeSession::new(StubBackend::new(vec![
            Ok(sample_recipe("Keeper")),
            Err(ClientError::Api {
                status: 500,
                message: "model request failed".to_string(),
            }),
        ]));

        session.generate_random().await.unwrap();
        let err = session.generate_random().await.unwrap_err();

        assert!(matches!(err, SessionError::Request(_)));
        assert_eq!(session.current_recipe().unwrap().title, "Keeper");
    }

    #[tokio::test]
    async fn test_guard_released_after_failure() {
        let mut session = RecipeSession::new(StubBackend::new(vec![
            Err(ClientError::Api {
                status: 500,
                message: "boom".to_string(),
            }),
            Ok(sample_recipe("Recovered")),
        ]));

        session.generate_random().await.unwrap_err();
        // The slot was released, so the next request goes through
        session.generate_random().await.unwrap();
        assert_eq!(session.current_recipe().unwrap().title, "Recovered");
    }
}
