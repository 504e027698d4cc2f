//! Generator trait definitions for dependency injection

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use shared::{
    Artifact, EducationalRoadmap, EducationalRoadmapRequest, EducationalTrail, EducationalTrailRequest,
    GenerationRequest, KeyResultsRequest, KeyResultsResponse, Roadmap, RoadmapRequest, TopicsRequest, TopicsResponse,
};

use crate::error::GenerationResult;

/// Upstream model catalogue
#[mockall::automock]
#[async_trait]
pub trait ModelDirectory: Send + Sync {
    /// Usable model identifiers; transport or status failures yield an empty list
    async fn list_models(&self) -> Vec<String>;
}

/// Single text-completion call against one named model
#[mockall::automock]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the first text part of the first candidate
    async fn complete(&self, model_id: &str, prompt: &str, timeout: Duration) -> GenerationResult<String>;
}

/// Capability interface handlers depend on, one method per artifact kind
#[mockall::automock]
#[async_trait]
pub trait ArtifactGenerator: Send + Sync {
    async fn generate_roadmap(&self, request: RoadmapRequest, cancel: &CancellationToken) -> GenerationResult<Roadmap>;

    async fn generate_topics(&self, request: TopicsRequest, cancel: &CancellationToken) -> GenerationResult<TopicsResponse>;

    async fn generate_key_results(
        &self,
        request: KeyResultsRequest,
        cancel: &CancellationToken,
    ) -> GenerationResult<KeyResultsResponse>;

    async fn generate_educational_roadmap(
        &self,
        request: EducationalRoadmapRequest,
        cancel: &CancellationToken,
    ) -> GenerationResult<EducationalRoadmap>;

    async fn generate_educational_trail(
        &self,
        request: EducationalTrailRequest,
        cancel: &CancellationToken,
    ) -> GenerationResult<EducationalTrail>;

    /// Dispatch on the request kind
    async fn generate(&self, request: GenerationRequest, cancel: &CancellationToken) -> GenerationResult<Artifact> {
        match request {
            GenerationRequest::Roadmap(r) => self.generate_roadmap(r, cancel).await.map(Artifact::Roadmap),
            GenerationRequest::Topics(r) => self.generate_topics(r, cancel).await.map(Artifact::Topics),
            GenerationRequest::KeyResults(r) => self.generate_key_results(r, cancel).await.map(Artifact::KeyResults),
            GenerationRequest::EducationalRoadmap(r) => self
                .generate_educational_roadmap(r, cancel)
                .await
                .map(Artifact::EducationalRoadmap),
            GenerationRequest::EducationalTrail(r) => self
                .generate_educational_trail(r, cancel)
                .await
                .map(Artifact::EducationalTrail),
        }
    }
}
