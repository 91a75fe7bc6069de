use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::domain::{
    common::entities::app_errors::CoreError, generation::entities::GenerationResult,
    health::entities::HealthStatus, submission::ports::RelayClient,
};

pub const DEFAULT_RELAY_URL: &str = "http://localhost:3000";
pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(90);

/// reqwest-backed client for the relay endpoint.
#[derive(Debug, Clone)]
pub struct HttpRelayClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateBody {
    prompt: String,
}

#[derive(Debug, Serialize)]
struct ProcessImageBody {
    image: String,
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpRelayClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("relay client setup: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post_json<B, T>(self, path: &'static str, body: B) -> Result<T, CoreError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(path, "Relay request failed: {}", e);
                CoreError::Network(e.to_string())
            })?;

        read_response(path, response).await
    }

    async fn get_json<T: DeserializeOwned>(self, path: &'static str) -> Result<T, CoreError> {
        let response = self.client.get(self.url(path)).send().await.map_err(|e| {
            tracing::error!(path, "Relay request failed: {}", e);
            CoreError::Network(e.to_string())
        })?;

        read_response(path, response).await
    }
}

async fn read_response<T: DeserializeOwned>(
    path: &str,
    response: Response,
) -> Result<T, CoreError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        tracing::error!(path, %status, "Relay returned error: {}", message);
        return Err(CoreError::ExternalServiceError(format!(
            "relay returned {}: {}",
            status, message
        )));
    }

    response.json::<T>().await.map_err(|e| {
        tracing::error!(path, "Failed to parse relay response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse relay response: {}", e))
    })
}

impl RelayClient for HttpRelayClient {
    fn process_image(
        &self,
        image: String,
        prompt: String,
    ) -> BoxFuture<'static, Result<GenerationResult, CoreError>> {
        let body = ProcessImageBody { image, prompt };

        Box::pin(
            self.clone()
                .post_json::<_, GenerationResult>("process-image", body),
        )
    }

    fn generate(&self, prompt: String) -> BoxFuture<'static, Result<GenerationResult, CoreError>> {
        Box::pin(
            self.clone()
                .post_json::<_, GenerationResult>("generate", GenerateBody { prompt }),
        )
    }

    fn health(&self) -> BoxFuture<'static, Result<HealthStatus, CoreError>> {
        Box::pin(self.clone().get_json::<HealthStatus>("health"))
    }
}
