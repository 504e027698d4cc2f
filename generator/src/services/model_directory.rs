//! Model discovery against the provider's `models` listing

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use shared::{Component, service_debug, service_warn};

use crate::config::{GenerationConfig, ProviderEndpoint};
use crate::traits::ModelDirectory;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ModelListing {
    models: Vec<ModelEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ModelEntry {
    name: String,
}

/// Lists models from `GET {base}/models?key=...`
pub struct RealModelDirectory {
    client: reqwest::Client,
    endpoint: ProviderEndpoint,
    model_marker: String,
    excluded_marker: String,
}

impl RealModelDirectory {
    pub fn new(client: reqwest::Client, endpoint: ProviderEndpoint, config: &GenerationConfig) -> Self {
        Self {
            client,
            endpoint,
            model_marker: config.model_marker.clone(),
            excluded_marker: config.excluded_marker.clone(),
        }
    }

    /// Strip the `models/` prefix and keep only usable text models
    fn usable_ids(&self, listing: ModelListing) -> Vec<String> {
        listing
            .models
            .into_iter()
            .map(|entry| match entry.name.strip_prefix("models/") {
                Some(id) => id.to_string(),
                None => entry.name,
            })
            .filter(|id| id.contains(&self.model_marker) && !id.contains(&self.excluded_marker))
            .collect()
    }

    async fn fetch(&self) -> Result<ModelListing, String> {
        let response = self
            .client
            .get(self.endpoint.models_url())
            .query(&[("key", self.endpoint.api_key.as_str())])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status() != StatusCode::OK {
            return Err(format!("status {}", response.status().as_u16()));
        }

        response.json::<ModelListing>().await.map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ModelDirectory for RealModelDirectory {
    async fn list_models(&self) -> Vec<String> {
        if !self.endpoint.has_credential() {
            return Vec::new();
        }

        match self.fetch().await {
            Ok(listing) => {
                let ids = self.usable_ids(listing);
                service_debug!(Component::Generator, count = ids.len(), "Discovered models");
                ids
            }
            Err(reason) => {
                service_warn!(Component::Generator, reason = %reason, "Model discovery failed, using fallback list");
                Vec::new()
            }
        }
    }
}
