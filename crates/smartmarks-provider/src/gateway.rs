//! Classification gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info, warn};

use smartmarks_config::ProvidersConfig;
use smartmarks_protocols::{CategoryPath, Classifier, ProviderError, Settings};

use crate::clean::clean_response;
use crate::prompt::user_content;
use crate::strategy::WireStrategy;

/// Sends bookmarks to the provider chosen in the settings snapshot.
pub struct ClassificationGateway {
    client: Client,
    endpoints: ProvidersConfig,
}

impl ClassificationGateway {
    pub fn new(endpoints: ProvidersConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(endpoints.connect_timeout_secs))
            .timeout(Duration::from_secs(endpoints.request_timeout_secs))
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &ProvidersConfig {
        &self.endpoints
    }

    /// Ask the active provider and return its answer text, uncleaned.
    pub async fn request_category(
        &self,
        title: &str,
        url: &str,
        settings: &Settings,
    ) -> Result<String, ProviderError> {
        let strategy = WireStrategy::select(settings, &self.endpoints)?;
        debug!(
            provider = %settings.provider,
            model = strategy.model(),
            url = %strategy.url(),
            "Requesting category"
        );

        let response = strategy
            .build_request(&self.client, &user_content(title, url))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        strategy.extract_text(&body)
    }
}

#[async_trait]
impl Classifier for ClassificationGateway {
    async fn classify(&self, title: &str, url: &str, settings: &Settings) -> Option<CategoryPath> {
        let raw = match self.request_category(title, url, settings).await {
            Ok(raw) => raw,
            Err(e) if e.is_configuration() => {
                warn!(provider = %settings.provider, "Missing API key, skipping classification");
                return None;
            }
            Err(e) => {
                error!(provider = %settings.provider, error = %e, "Classification failed");
                return None;
            }
        };

        let cleaned = clean_response(&raw);
        match CategoryPath::parse(&cleaned) {
            Some(path) => {
                info!(provider = %settings.provider, %path, "Classified bookmark");
                Some(path)
            }
            None => {
                warn!(provider = %settings.provider, raw = %raw, "Classifier answer held no usable path");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
