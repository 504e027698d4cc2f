//! Generator-specific data types

use std::fmt;

use shared::ArtifactKind;

/// Where a candidate model identifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    Discovered,
    Fallback,
}

/// One model identifier to attempt, in order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelCandidate {
    pub id: String,
    pub provenance: Provenance,
}

impl ModelCandidate {
    pub fn discovered(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provenance: Provenance::Discovered,
        }
    }

    pub fn fallback(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provenance: Provenance::Fallback,
        }
    }
}

impl fmt::Display for ModelCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Inclusive count range stated to the model, rendered as `min-max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Range around `center`, clamped so `1 <= min <= max`
    pub fn around(center: u32, below: u32, above: u32) -> Self {
        let min = center.saturating_sub(below).max(1);
        let max = center.saturating_add(above).max(min);
        Self { min, max }
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Structural constraints derived once per request
///
/// Read-only after the prompt is built; the validator consults
/// `item_ceiling` to enforce the roadmap day budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub kind: ArtifactKind,
    pub categories: Option<CountRange>,
    pub items_per_category: Option<CountRange>,
    pub activities_per_day: Option<CountRange>,
    pub total_days: Option<u32>,
    /// Caller-supplied day budget for roadmaps; `None` disables enforcement
    pub item_ceiling: Option<u32>,
    /// Human-readable time constraint, possibly empty
    pub time_clause: String,
}

impl PromptContext {
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            categories: None,
            items_per_category: None,
            activities_per_day: None,
            total_days: None,
            item_ceiling: None,
            time_clause: String::new(),
        }
    }
}

/// A prompt ready to send plus the constraints it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompt {
    pub text: String,
    pub context: PromptContext,
}
