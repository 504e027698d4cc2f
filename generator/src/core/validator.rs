//! Structural checks applied to parsed artifacts
//!
//! A failed check rejects the current candidate's output only; the fallback
//! loop moves on to the next model.

use serde::de::DeserializeOwned;

use shared::{ArtifactKind, Component, EducationalRoadmap, EducationalTrail, KeyResultsResponse, Roadmap, TopicsResponse, service_debug};

use crate::error::{GenerationError, GenerationResult};
use crate::types::PromptContext;

/// An artifact shape that can be parsed from a completion and checked
pub trait StructuralCheck: DeserializeOwned + Send + 'static {
    const KIND: ArtifactKind;

    /// `slack` is how far a roadmap may exceed its day budget
    fn check(&self, context: &PromptContext, slack: u32) -> GenerationResult<()>;
}

fn require_text(kind: ArtifactKind, field: &str, value: &str) -> GenerationResult<()> {
    if value.trim().is_empty() {
        return Err(GenerationError::structural(kind, format!("{field} is empty")));
    }
    Ok(())
}

fn require_entries<T>(kind: ArtifactKind, field: &str, values: &[T]) -> GenerationResult<()> {
    if values.is_empty() {
        return Err(GenerationError::structural(kind, format!("{field} has no entries")));
    }
    Ok(())
}

impl StructuralCheck for Roadmap {
    const KIND: ArtifactKind = ArtifactKind::Roadmap;

    fn check(&self, context: &PromptContext, slack: u32) -> GenerationResult<()> {
        require_text(Self::KIND, "topic", &self.topic)?;
        require_entries(Self::KIND, "roadmap", &self.roadmap)?;

        if let Some(ceiling) = context.item_ceiling {
            let limit = ceiling.saturating_add(slack);
            let total = self.total_items();
            service_debug!(Component::Generator, total, ceiling, limit, "Roadmap item count");
            if total > limit as usize {
                return Err(GenerationError::structural(
                    Self::KIND,
                    format!("{total} items exceed the limit of {limit} for {ceiling} days"),
                ));
            }
        }
        Ok(())
    }
}

impl StructuralCheck for TopicsResponse {
    const KIND: ArtifactKind = ArtifactKind::Topics;

    fn check(&self, _context: &PromptContext, _slack: u32) -> GenerationResult<()> {
        require_text(Self::KIND, "subject", &self.subject)?;
        require_entries(Self::KIND, "topics", &self.topics)
    }
}

impl StructuralCheck for KeyResultsResponse {
    const KIND: ArtifactKind = ArtifactKind::KeyResults;

    fn check(&self, _context: &PromptContext, _slack: u32) -> GenerationResult<()> {
        require_text(Self::KIND, "objective", &self.objective)?;
        require_entries(Self::KIND, "key_results", &self.key_results)
    }
}

impl StructuralCheck for EducationalRoadmap {
    const KIND: ArtifactKind = ArtifactKind::EducationalRoadmap;

    // resource lists may be empty
    fn check(&self, _context: &PromptContext, _slack: u32) -> GenerationResult<()> {
        require_text(Self::KIND, "topic", &self.topic)
    }
}

impl StructuralCheck for EducationalTrail {
    const KIND: ArtifactKind = ArtifactKind::EducationalTrail;

    fn check(&self, _context: &PromptContext, _slack: u32) -> GenerationResult<()> {
        require_text(Self::KIND, "topic", &self.topic)?;
        require_entries(Self::KIND, "steps", &self.steps)
    }
}

/// Parse extracted JSON into `T` and run its structural check
pub fn parse_artifact<T: StructuralCheck>(json: &str, context: &PromptContext, slack: u32) -> GenerationResult<T> {
    let artifact: T = serde_json::from_str(json).map_err(|e| GenerationError::Parse(e.to_string()))?;
    artifact.check(context, slack)?;
    Ok(artifact)
}
