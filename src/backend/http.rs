use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};

use super::PredictionBackend;
use crate::config::BackendConfig;
use crate::error::{AppError, FailureKind};
use crate::model::{PredictionResult, Upload};

/// Multipart client for the `/predict` endpoint.
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig, endpoint: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `/health` beside the prediction route.
    fn health_url(&self) -> Option<Url> {
        self.endpoint.join("health").ok()
    }
}

#[async_trait]
impl PredictionBackend for HttpBackend {
    async fn predict(&self, upload: Upload) -> Result<PredictionResult, AppError> {
        log::info!(
            "POST {} ({}, {} bytes)",
            self.endpoint,
            upload.file_name,
            upload.bytes.len()
        );

        let part = Part::bytes(upload.bytes.to_vec())
            .file_name(upload.file_name)
            .mime_str(&upload.mime)
            .map_err(|_| AppError::InvalidType(upload.mime.clone()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|err| AppError::unreachable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Prediction service responded with {status}");
            return Err(AppError::AnalysisFailed(FailureKind::Status(status.as_u16())));
        }

        // A response already arrived, so a truncated body is not a transport failure.
        let body = response.bytes().await.map_err(|err| {
            log::error!("Unable to read prediction body: {err}");
            AppError::MalformedResponse(format!("unreadable body: {err}"))
        })?;
        PredictionResult::from_response_body(&body)
    }

    async fn health(&self) -> bool {
        let Some(url) = self.health_url() else {
            return false;
        };

        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::warn!("Health check failed: {err}");
                false
            }
        }
    }
}
