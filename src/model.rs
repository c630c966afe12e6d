use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LabError;
use crate::parser;

/// Lowest creativity the generator accepts.
pub const MIN_TEMPERATURE: f64 = 0.5;
/// Highest creativity the generator accepts.
pub const MAX_TEMPERATURE: f64 = 1.5;
/// Creativity used when the caller does not pick one.
pub const DEFAULT_TEMPERATURE: f64 = 0.8;
/// Granularity of the creativity control.
pub const TEMPERATURE_STEP: f64 = 0.1;

/// Title used when the generated text has no `Title:` line.
pub const DEFAULT_TITLE: &str = "Custom Recipe";

/// A single recipe generation request
///
/// Serializes to the wire body `{"inspiration": ..., "temperature": ...}`.
/// Fields are private so a request cannot change after it has been submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    inspiration: String,
    temperature: f64,
}

impl GenerationRequest {
    /// Build a request as-is.
    ///
    /// No validation happens here; callers are expected to only submit
    /// non-empty inspiration (see [`GenerationRequest::validated`]).
    pub fn new(inspiration: impl Into<String>, temperature: f64) -> Self {
        GenerationRequest {
            inspiration: inspiration.into(),
            temperature,
        }
    }

    /// Build a request, rejecting blank inspiration and out-of-range temperature.
    pub fn validated(inspiration: impl Into<String>, temperature: f64) -> Result<Self, LabError> {
        let inspiration = inspiration.into();
        if inspiration.trim().is_empty() {
            return Err(LabError::EmptyInspiration);
        }
        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
            return Err(LabError::TemperatureOutOfRange(temperature));
        }
        Ok(Self::new(inspiration, temperature))
    }

    pub fn inspiration(&self) -> &str {
        &self.inspiration
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

/// Lifecycle of one generation attempt
///
/// `Pending` is the only non-terminal variant. A finished generation is
/// always exactly one of `Success` or `Failure`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationOutcome {
    #[default]
    Pending,
    /// Raw generated text as returned by the endpoint
    Success(String),
    /// Human-readable description of what went wrong
    Failure(String),
}

impl GenerationOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, GenerationOutcome::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Failure message, if this outcome is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Structured recipe for a successful outcome.
    pub fn recipe(&self) -> Option<ParsedRecipe> {
        match self {
            GenerationOutcome::Success(raw) => Some(parser::parse(raw)),
            _ => None,
        }
    }
}

/// Recipe recovered from the generator's freeform text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
}

impl fmt::Display for ParsedRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;

        if !self.ingredients.is_empty() {
            writeln!(f)?;
            writeln!(f, "Ingredients:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "- {}", ingredient)?;
            }
        }

        if !self.directions.is_empty() {
            writeln!(f)?;
            writeln!(f, "Directions:")?;
            for (i, step) in self.directions.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, step)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_wire_body() {
        let request = GenerationRequest::new("Mango, Oat Milk", 0.8);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"inspiration": "Mango, Oat Milk", "temperature": 0.8})
        );
    }

    #[test]
    fn test_validated_rejects_blank_inspiration() {
        let result = GenerationRequest::validated("   ", 0.8);
        assert!(matches!(result, Err(LabError::EmptyInspiration)));
    }

    #[test]
    fn test_validated_rejects_temperature_out_of_range() {
        assert!(matches!(
            GenerationRequest::validated("Honey", 0.4),
            Err(LabError::TemperatureOutOfRange(_))
        ));
        assert!(matches!(
            GenerationRequest::validated("Honey", 1.6),
            Err(LabError::TemperatureOutOfRange(_))
        ));
        assert!(GenerationRequest::validated("Honey", 1.5).is_ok());
        assert!(GenerationRequest::validated("Honey", 0.5).is_ok());
    }

    #[test]
    fn test_outcome_states() {
        assert!(GenerationOutcome::default().is_pending());
        assert!(GenerationOutcome::Success(String::new()).is_terminal());
        assert!(GenerationOutcome::Failure("boom".to_string()).is_terminal());
        assert_eq!(
            GenerationOutcome::Failure("boom".to_string()).message(),
            Some("boom")
        );
        assert_eq!(GenerationOutcome::Success("x".to_string()).message(), None);
    }

    #[test]
    fn test_outcome_recipe_only_for_success() {
        let success = GenerationOutcome::Success("Title: Iced Matcha".to_string());
        assert_eq!(success.recipe().unwrap().title, "Iced Matcha");
        assert!(GenerationOutcome::Pending.recipe().is_none());
        assert!(GenerationOutcome::Failure("nope".to_string())
            .recipe()
            .is_none());
    }

    #[test]
    fn test_display_renders_sections() {
        let recipe = ParsedRecipe {
            title: "Golden Latte".to_string(),
            ingredients: vec!["Oat Milk".to_string()],
            directions: vec!["Warm milk".to_string(), "Whisk matcha".to_string()],
        };
        let text = recipe.to_string();
        assert!(text.starts_with("Golden Latte\n"));
        assert!(text.contains("- Oat Milk\n"));
        assert!(text.contains("1. Warm milk\n2. Whisk matcha\n"));
    }

    #[test]
    fn test_display_skips_empty_sections() {
        let recipe = ParsedRecipe {
            title: DEFAULT_TITLE.to_string(),
            ingredients: vec![],
            directions: vec![],
        };
        assert_eq!(recipe.to_string(), "Custom Recipe\n");
    }
}
