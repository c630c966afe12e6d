use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::time::sleep;

use crate::backend::RecipeBackend;
use crate::model::{GenerationOutcome, GenerationRequest};

/// Shortest time a generation is allowed to take, so a loading view never
/// just flashes by.
pub const MIN_DURATION: Duration = Duration::from_millis(3500);

/// Runs one generation at a time against a [`RecipeBackend`]
///
/// Each call to [`Orchestrator::generate`] is independent: it starts the
/// minimum-duration timer and the backend request together and settles only
/// once both are done. Nothing is shared between calls.
pub struct Orchestrator {
    backend: Arc<dyn RecipeBackend>,
    min_duration: Duration,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn RecipeBackend>) -> Self {
        Orchestrator {
            backend,
            min_duration: MIN_DURATION,
        }
    }

    pub fn with_min_duration(backend: Arc<dyn RecipeBackend>, min_duration: Duration) -> Self {
        Orchestrator {
            backend,
            min_duration,
        }
    }

    pub fn min_duration(&self) -> Duration {
        self.min_duration
    }

    /// Generate a recipe, returning a terminal outcome.
    ///
    /// The returned outcome is never `Pending`. Dropping the future before it
    /// completes cancels both the timer and the request.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        debug!(
            "Generating with {} (temperature {}): {}",
            self.backend.backend_name(),
            request.temperature(),
            request.inspiration()
        );

        let (_, result) = tokio::join!(
            sleep(self.min_duration),
            self.backend.request_recipe(request)
        );

        match result {
            Ok(raw) => {
                info!("Recipe generated using {}", self.backend.backend_name());
                GenerationOutcome::Success(raw)
            }
            Err(e) => {
                warn!("Generation with {} failed: {}", self.backend.backend_name(), e);
                GenerationOutcome::Failure(e.to_string())
            }
        }
    }

    /// Like [`Orchestrator::generate`], but also publishes `Pending` on
    /// `status` when the call starts and the terminal outcome once it settles.
    pub async fn generate_observed(
        &self,
        request: &GenerationRequest,
        status: &watch::Sender<GenerationOutcome>,
    ) -> GenerationOutcome {
        status.send_replace(GenerationOutcome::Pending);
        let outcome = self.generate(request).await;
        status.send_replace(outcome.clone());
        outcome
    }
}
