//! Core identifiers used throughout the service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workspace component emitting a log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// HTTP surface and process lifecycle
    WebServer,
    /// Generation orchestration core
    Generator,
}

impl Component {
    /// Crate name, used as the tracing target in filter directives
    pub fn target(&self) -> &'static str {
        match self {
            Component::WebServer => "webserver",
            Component::Generator => "generator",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target())
    }
}

/// The five artifact shapes the service can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Roadmap,
    Topics,
    KeyResults,
    EducationalRoadmap,
    EducationalTrail,
}

impl ArtifactKind {
    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Roadmap => "roadmap",
            ArtifactKind::Topics => "topics",
            ArtifactKind::KeyResults => "key results",
            ArtifactKind::EducationalRoadmap => "educational roadmap",
            ArtifactKind::EducationalTrail => "educational trail",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_display() {
        assert_eq!(Component::WebServer.to_string(), "webserver");
        assert_eq!(Component::Generator.to_string(), "generator");
    }

    #[test]
    fn test_artifact_kind_serialization() {
        let json = serde_json::to_string(&ArtifactKind::EducationalTrail).unwrap();
        assert_eq!(json, "\"educational_trail\"");
        assert_eq!(ArtifactKind::KeyResults.to_string(), "key results");
    }
}
