//! Artifact shapes returned to callers
//!
//! These are plain data contracts. Every field carries `#[serde(default)]` so a
//! model response that omits a field still parses; whether the result is
//! acceptable is decided later by structural validation, not by the decoder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::ArtifactKind;

/// A single study item inside a roadmap category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// A named group of roadmap items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapCategory {
    pub category: String,
    pub items: Vec<RoadmapItem>,
}

/// Categorized study roadmap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roadmap {
    pub topic: String,
    pub roadmap: Vec<RoadmapCategory>,
}

impl Roadmap {
    /// Total number of items across every category
    pub fn total_items(&self) -> usize {
        self.roadmap.iter().map(|category| category.items.len()).sum()
    }
}

/// Flat list of topics about a subject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicsResponse {
    pub subject: String,
    pub topics: Vec<String>,
}

/// Measurable key results for an OKR objective
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyResultsResponse {
    pub objective: String,
    pub key_results: Vec<String>,
}

/// A book, course, video, article or project reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationalResource {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Resource catalogue for a topic, grouped by medium
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationalRoadmap {
    pub topic: String,
    pub books: Vec<EducationalResource>,
    pub courses: Vec<EducationalResource>,
    pub videos: Vec<EducationalResource>,
    pub articles: Vec<EducationalResource>,
    pub projects: Vec<EducationalResource>,
}

/// One activity scheduled on a trail day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    /// One of `read_chapters`, `watch_video`, `read_article`, `take_course`, `do_project`
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Key into [`EducationalTrail::resources`]
    pub resource_id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Expected progress, e.g. "3 of 10 chapters"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
}

/// A single day of an educational trail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailStep {
    pub day: u32,
    pub title: String,
    pub description: String,
    pub activities: Vec<Activity>,
}

/// Day-by-day learning trail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationalTrail {
    pub topic: String,
    pub total_days: u32,
    pub description: String,
    pub steps: Vec<TrailStep>,
    pub resources: BTreeMap<String, EducationalResource>,
}

/// Any validated artifact, serialized as its bare shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Artifact {
    Roadmap(Roadmap),
    Topics(TopicsResponse),
    KeyResults(KeyResultsResponse),
    EducationalRoadmap(EducationalRoadmap),
    EducationalTrail(EducationalTrail),
}

impl Artifact {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::Roadmap(_) => ArtifactKind::Roadmap,
            Artifact::Topics(_) => ArtifactKind::Topics,
            Artifact::KeyResults(_) => ArtifactKind::KeyResults,
            Artifact::EducationalRoadmap(_) => ArtifactKind::EducationalRoadmap,
            Artifact::EducationalTrail(_) => ArtifactKind::EducationalTrail,
        }
    }
}
