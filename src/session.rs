use log::debug;

use crate::error::LabError;
use crate::model::{
    GenerationOutcome, GenerationRequest, ParsedRecipe, DEFAULT_TEMPERATURE, MAX_TEMPERATURE,
    MIN_TEMPERATURE, TEMPERATURE_STEP,
};
use crate::orchestrator::Orchestrator;
use crate::parser;

/// What a user has picked so far, plus the last generation result
///
/// This is the caller of the [`Orchestrator`]: it guards against empty
/// inspiration and, by taking `&mut self`, against overlapping generations.
#[derive(Debug, Clone)]
pub struct LabSession {
    selected: Vec<String>,
    custom_input: String,
    temperature: f64,
    outcome: Option<GenerationOutcome>,
}

impl Default for LabSession {
    fn default() -> Self {
        LabSession {
            selected: Vec::new(),
            custom_input: String::new(),
            temperature: DEFAULT_TEMPERATURE,
            outcome: None,
        }
    }
}

impl LabSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `item` if it isn't selected yet, otherwise deselect it.
    pub fn toggle(&mut self, item: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == item) {
            self.selected.remove(pos);
        } else {
            self.selected.push(item.to_string());
        }
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.selected.iter().any(|s| s == item)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn set_custom_input(&mut self, input: impl Into<String>) {
        self.custom_input = input.into();
    }

    pub fn custom_input(&self) -> &str {
        &self.custom_input
    }

    /// Clamp to the supported range and snap to the nearest 0.1.
    pub fn set_temperature(&mut self, temperature: f64) {
        let clamped = if temperature.is_nan() {
            DEFAULT_TEMPERATURE
        } else {
            temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
        };
        let per_unit = (1.0 / TEMPERATURE_STEP).round();
        self.temperature = (clamped * per_unit).round() / per_unit;
    }

    /// Like [`LabSession::set_temperature`], but rejects values outside the
    /// supported range instead of clamping them.
    pub fn try_set_temperature(&mut self, temperature: f64) -> Result<(), LabError> {
        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
            return Err(LabError::TemperatureOutOfRange(temperature));
        }
        self.set_temperature(temperature);
        Ok(())
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Selected items in selection order, then the custom input, joined with
    /// `", "`. `None` when there is nothing to send.
    pub fn inspiration(&self) -> Option<String> {
        let mut parts: Vec<&str> = self.selected.iter().map(String::as_str).collect();
        let custom = self.custom_input.trim();
        if !custom.is_empty() {
            parts.push(custom);
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    pub fn can_generate(&self) -> bool {
        !self.selected.is_empty() || !self.custom_input.trim().is_empty()
    }

    /// Build the request for the current selection.
    pub fn request(&self) -> Result<GenerationRequest, LabError> {
        let inspiration = self.inspiration().ok_or(LabError::EmptyInspiration)?;
        GenerationRequest::validated(inspiration, self.temperature)
    }

    /// Run one generation and record its result, replacing the previous one.
    ///
    /// If the returned future is dropped early, the previous result is kept.
    /// Returns `LabError::EmptyInspiration` without contacting the
    /// orchestrator when nothing is selected.
    pub async fn generate(
        &mut self,
        orchestrator: &Orchestrator,
    ) -> Result<&GenerationOutcome, LabError> {
        let request = self.request()?;

        let outcome = orchestrator.generate(&request).await;
        debug!("Session settled: {:?}", outcome);

        Ok(&*self.outcome.insert(outcome))
    }

    pub fn outcome(&self) -> Option<&GenerationOutcome> {
        self.outcome.as_ref()
    }

    /// Raw text of the last successful generation
    pub fn recipe(&self) -> Option<&str> {
        match &self.outcome {
            Some(GenerationOutcome::Success(raw)) => Some(raw.as_str()),
            _ => None,
        }
    }

    pub fn parsed_recipe(&self) -> Option<ParsedRecipe> {
        self.recipe().map(parser::parse)
    }

    /// Message of the last generation, if it failed
    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(GenerationOutcome::message)
    }

    /// Start over: forget the recipe and the selection, keep the temperature.
    pub fn reset(&mut self) {
        self.outcome = None;
        self.selected.clear();
        self.custom_input.clear();
    }
}
