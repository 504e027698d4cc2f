//! Generator implementation wiring the pipeline together
//!
//! validate input → build prompt → discover models → merge candidates →
//! fallback loop (complete → extract → parse → check) → artifact

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use shared::{
    Component, EducationalRoadmap, EducationalRoadmapRequest, EducationalTrail, EducationalTrailRequest,
    GenerationRequest, KeyResultsRequest, KeyResultsResponse, Roadmap, RoadmapRequest, TopicsRequest, TopicsResponse,
    service_debug, service_error, service_info,
};

use crate::config::{GenerationConfig, ProviderEndpoint};
use crate::core::{FallbackLoop, PromptBuilder, StructuralCheck, extract_json, merge_candidates, parse_artifact};
use crate::error::{GenerationError, GenerationResult};
use crate::services::{RealCompletionClient, RealModelDirectory};
use crate::traits::{ArtifactGenerator, CompletionClient, ModelDirectory};
use crate::types::Provenance;

/// Artifact generator with dependency injection
pub struct Generator<D, C>
where
    D: ModelDirectory,
    C: CompletionClient,
{
    directory: D,
    completion: C,
    config: GenerationConfig,
    prompts: PromptBuilder,
}

/// Generator talking to the real provider
pub type LiveGenerator = Generator<RealModelDirectory, RealCompletionClient>;

impl LiveGenerator {
    /// Build a generator over one shared HTTP client
    pub fn live(endpoint: ProviderEndpoint, config: GenerationConfig) -> Self {
        let client = reqwest::Client::new();
        let directory = RealModelDirectory::new(client.clone(), endpoint.clone(), &config);
        let completion = RealCompletionClient::new(client, endpoint);
        Generator::new(directory, completion, config)
    }
}

impl<D, C> Generator<D, C>
where
    D: ModelDirectory,
    C: CompletionClient,
{
    pub fn new(directory: D, completion: C, config: GenerationConfig) -> Self {
        Self {
            directory,
            completion,
            config,
            prompts: PromptBuilder::new(),
        }
    }

    pub fn with_prompt_builder(mut self, prompts: PromptBuilder) -> Self {
        self.prompts = prompts;
        self
    }

    /// Full generation pipeline for one artifact kind
    async fn run<T: StructuralCheck>(&self, request: GenerationRequest, cancel: &CancellationToken) -> GenerationResult<T> {
        request.validate()?;

        let kind = T::KIND;
        let generation_id = Uuid::new_v4();
        let prompt = self.prompts.build(&request);

        service_info!(
            Component::Generator,
            generation_id = %generation_id,
            kind = %kind,
            subject = %request.subject(),
            "Starting generation"
        );

        let discovered = tokio::select! {
            _ = cancel.cancelled() => return Err(GenerationError::Cancelled),
            models = self.directory.list_models() => models,
        };
        let candidates = merge_candidates(&discovered, &self.config.fallback_models);
        service_debug!(
            Component::Generator,
            generation_id = %generation_id,
            discovered = candidates.iter().filter(|c| c.provenance == Provenance::Discovered).count(),
            fallback = candidates.iter().filter(|c| c.provenance == Provenance::Fallback).count(),
            "Candidate list ready"
        );

        let timeout = self.config.timeout_for(kind);
        let slack = self.config.roadmap_item_slack;
        let prompt = &prompt;

        let result = FallbackLoop::new(kind, &candidates, self.config.quota_backoff)
            .with_generation_id(generation_id)
            .run(cancel, move |model| async move {
                let raw = self.completion.complete(&model, &prompt.text, timeout).await?;
                parse_artifact::<T>(&extract_json(&raw), &prompt.context, slack)
            })
            .await;

        match result {
            Ok(outcome) => Ok(outcome.artifact),
            Err(e) => {
                service_error!(
                    Component::Generator,
                    generation_id = %generation_id,
                    kind = %kind,
                    error = %e,
                    "Generation failed"
                );
                Err(e)
            }
        }
    }
}

#[async_trait]
impl<D, C> ArtifactGenerator for Generator<D, C>
where
    D: ModelDirectory,
    C: CompletionClient,
{
    async fn generate_roadmap(&self, request: RoadmapRequest, cancel: &CancellationToken) -> GenerationResult<Roadmap> {
        self.run(GenerationRequest::Roadmap(request), cancel).await
    }

    async fn generate_topics(&self, request: TopicsRequest, cancel: &CancellationToken) -> GenerationResult<TopicsResponse> {
        self.run(GenerationRequest::Topics(request), cancel).await
    }

    async fn generate_key_results(
        &self,
        request: KeyResultsRequest,
        cancel: &CancellationToken,
    ) -> GenerationResult<KeyResultsResponse> {
        self.run(GenerationRequest::KeyResults(request), cancel).await
    }

    async fn generate_educational_roadmap(
        &self,
        request: EducationalRoadmapRequest,
        cancel: &CancellationToken,
    ) -> GenerationResult<EducationalRoadmap> {
        self.run(GenerationRequest::EducationalRoadmap(request), cancel).await
    }

    async fn generate_educational_trail(
        &self,
        request: EducationalTrailRequest,
        cancel: &CancellationToken,
    ) -> GenerationResult<EducationalTrail> {
        self.run(GenerationRequest::EducationalTrail(request), cancel).await
    }
}
