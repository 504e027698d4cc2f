//! Generator configuration values
//!
//! Everything here is immutable after construction and may be shared across
//! concurrent requests without synchronization.

use std::time::Duration;

use shared::ArtifactKind;

/// Default upstream API root
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Static model list tried after the discovered models
pub const DEFAULT_FALLBACK_MODELS: &[&str] = &[
    "gemini-1.5-flash-latest",
    "gemini-1.5-pro-latest",
    "gemini-pro",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
];

/// Upstream location and credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoint {
    pub base_url: String,
    pub api_key: String,
}

impl ProviderEndpoint {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }

    pub fn generate_url(&self, model_id: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model_id)
    }
}

/// Fallback, retry and validation parameters
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Models appended after discovery, in order
    pub fallback_models: Vec<String>,
    /// Substring a discovered model id must contain to be usable
    pub model_marker: String,
    /// Substring that disqualifies a discovered model (embedding-only entries)
    pub excluded_marker: String,
    /// Pause before the single retry after a 429
    pub quota_backoff: Duration,
    /// Per-call timeout for single-shot artifacts
    pub single_shot_timeout: Duration,
    /// Per-call timeout for the multi-day trail
    pub trail_timeout: Duration,
    /// Items allowed above the day budget before a roadmap is rejected
    pub roadmap_item_slack: u32,
}

impl GenerationConfig {
    /// Completion timeout for an artifact kind
    pub fn timeout_for(&self, kind: ArtifactKind) -> Duration {
        match kind {
            ArtifactKind::EducationalTrail => self.trail_timeout,
            _ => self.single_shot_timeout,
        }
    }

    pub fn with_fallback_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_models = models.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_quota_backoff(mut self, backoff: Duration) -> Self {
        self.quota_backoff = backoff;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            fallback_models: DEFAULT_FALLBACK_MODELS.iter().map(|m| m.to_string()).collect(),
            model_marker: "gemini".to_string(),
            excluded_marker: "embedding".to_string(),
            quota_backoff: Duration::from_secs(30),
            single_shot_timeout: Duration::from_secs(60),
            trail_timeout: Duration::from_secs(180),
            roadmap_item_slack: 5,
        }
    }
}
