use thiserror::Error;

/// Errors that can occur while requesting a recipe from the generation endpoint
///
/// The `Display` text of each variant is exactly what ends up in
/// `GenerationOutcome::Failure`.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The request could not complete (connectivity, timeout, ...)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered, but not with a success status
    #[error("Failed to generate recipe")]
    Status(reqwest::StatusCode),

    /// The response body was not JSON or had no `recipe` field
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors raised around the generation core: configuration, CLI input and
/// caller-side preconditions
#[derive(Error, Debug)]
pub enum LabError {
    /// Nothing selected and no custom ingredient typed
    #[error("Pick at least one ingredient or type your own inspiration")]
    EmptyInspiration,

    /// Temperature outside the supported creativity range
    #[error("Temperature {0} is outside the supported range 0.5-1.5")]
    TemperatureOutOfRange(f64),

    /// Ingredient name that is not in the pantry
    #[error("Unknown pantry ingredient: {0}")]
    UnknownIngredient(String),

    /// Failed to build the HTTP client
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
