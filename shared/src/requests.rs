//! Generation request bodies
//!
//! The primary subject field of each body has no serde default, so a body that
//! omits it fails to bind; an explicit empty string binds and is rejected by
//! [`GenerationRequest::validate`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};
use crate::types::ArtifactKind;

/// Topic count used when the caller asks for zero or fewer
pub const DEFAULT_TOPIC_COUNT: u32 = 10;

/// Key result count used when the caller asks for zero or fewer
pub const DEFAULT_KEY_RESULT_COUNT: u32 = 5;

/// Date format accepted for `completion_date`
pub const COMPLETION_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_days: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicsRequest {
    pub subject: String,
    #[serde(default)]
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyResultsRequest {
    pub objective: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationalRoadmapRequest {
    pub topic: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationalTrailRequest {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_days: Option<i64>,
}

/// Only strictly positive day budgets count; anything else means "no budget"
fn positive_days(days: Option<i64>) -> Option<u32> {
    days.filter(|d| *d > 0)
        .map(|d| u32::try_from(d).unwrap_or(u32::MAX))
}

fn count_or_default(count: i64, default: u32) -> u32 {
    if count <= 0 {
        default
    } else {
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

impl RoadmapRequest {
    pub fn day_budget(&self) -> Option<u32> {
        positive_days(self.available_days)
    }
}

impl EducationalTrailRequest {
    pub fn day_budget(&self) -> Option<u32> {
        positive_days(self.available_days)
    }
}

impl TopicsRequest {
    pub fn effective_count(&self) -> u32 {
        count_or_default(self.count, DEFAULT_TOPIC_COUNT)
    }
}

impl KeyResultsRequest {
    pub fn effective_count(&self) -> u32 {
        count_or_default(self.count, DEFAULT_KEY_RESULT_COUNT)
    }

    /// Parsed completion date; malformed or blank dates are treated as absent
    pub fn deadline(&self) -> Option<NaiveDate> {
        self.completion_date
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| NaiveDate::parse_from_str(raw, COMPLETION_DATE_FORMAT).ok())
    }
}

/// A request for any artifact kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationRequest {
    Roadmap(RoadmapRequest),
    Topics(TopicsRequest),
    KeyResults(KeyResultsRequest),
    EducationalRoadmap(EducationalRoadmapRequest),
    EducationalTrail(EducationalTrailRequest),
}

impl GenerationRequest {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            GenerationRequest::Roadmap(_) => ArtifactKind::Roadmap,
            GenerationRequest::Topics(_) => ArtifactKind::Topics,
            GenerationRequest::KeyResults(_) => ArtifactKind::KeyResults,
            GenerationRequest::EducationalRoadmap(_) => ArtifactKind::EducationalRoadmap,
            GenerationRequest::EducationalTrail(_) => ArtifactKind::EducationalTrail,
        }
    }

    /// Name of the primary subject field for this kind
    pub fn subject_field(&self) -> &'static str {
        match self {
            GenerationRequest::Topics(_) => "subject",
            GenerationRequest::KeyResults(_) => "objective",
            GenerationRequest::Roadmap(_)
            | GenerationRequest::EducationalRoadmap(_)
            | GenerationRequest::EducationalTrail(_) => "topic",
        }
    }

    /// The primary subject string (topic, subject or objective)
    pub fn subject(&self) -> &str {
        match self {
            GenerationRequest::Roadmap(r) => &r.topic,
            GenerationRequest::Topics(r) => &r.subject,
            GenerationRequest::KeyResults(r) => &r.objective,
            GenerationRequest::EducationalRoadmap(r) => &r.topic,
            GenerationRequest::EducationalTrail(r) => &r.topic,
        }
    }

    /// Rejects a blank subject before any upstream call is made
    pub fn validate(&self) -> SharedResult<()> {
        if self.subject().trim().is_empty() {
            return Err(SharedError::EmptyField {
                field: self.subject_field(),
            });
        }
        Ok(())
    }
}
