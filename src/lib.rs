//! Compose matcha drink requests, send them to a recipe generation endpoint
//! and turn the generated text into a structured recipe.
//!
//! ```no_run
//! # use matchagen::{generate_recipe, GenerationRequest};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = GenerationRequest::validated("Mango, Oat Milk", 0.8)?;
//! let outcome = generate_recipe(&request).await?;
//! match outcome.recipe() {
//!     Some(recipe) => println!("{}", recipe),
//!     None => eprintln!("{}", outcome.message().unwrap_or_default()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod pantry;
pub mod parser;
pub mod session;

use std::sync::Arc;

pub use backend::{HttpBackend, RecipeBackend};
pub use config::LabConfig;
pub use error::{GenerationError, LabError};
pub use model::{GenerationOutcome, GenerationRequest, ParsedRecipe};
pub use orchestrator::Orchestrator;
pub use parser::parse;
pub use session::LabSession;

/// Build an orchestrator talking HTTP, as described by `config`
pub fn orchestrator_from_config(config: &LabConfig) -> Result<Orchestrator, LabError> {
    let backend = HttpBackend::from_config(config)?;
    Ok(Orchestrator::with_min_duration(
        Arc::new(backend),
        config.min_duration(),
    ))
}

/// Generate a recipe using configuration from `matchagen.toml` and the environment
///
/// Only configuration problems are returned as errors; generation problems
/// come back as `GenerationOutcome::Failure`.
pub async fn generate_recipe(request: &GenerationRequest) -> Result<GenerationOutcome, LabError> {
    let config = LabConfig::load()?;
    let orchestrator = orchestrator_from_config(&config)?;
    Ok(orchestrator.generate(request).await)
}
