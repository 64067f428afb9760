use reqwest::{
    header::CONTENT_TYPE,
    multipart::{Form, Part},
    Client, Response,
};
use serde_json::Value;
use url::Url;

use crate::{file::NamedFile, samples::file_name_from_path};

use super::errors::ApiClientError;
use super::models::{ClassificationResult, ErrorBody, HealthStatus};
use super::types::Modality;

/// Where the demo server listens unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client for the classification service.
///
/// Holds no per-request state: clones share the connection pool and
/// every call is independent, so calls may run concurrently.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: Url,
    client: Client,
}

impl ApiClient {
    /// # Errors
    ///
    /// Fails if provided `Url` cannot be a base. We rely on that
    /// invariant in other methods.
    pub fn new(base: Url) -> Result<Self, ApiClientError> {
        Self::with_client(base, Client::new())
    }

    /// Same as [`ApiClient::new`] but over a caller-configured transport,
    /// e.g. one with a request timeout.
    ///
    /// # Errors
    ///
    /// Fails if provided `Url` cannot be a base.
    pub fn with_client(base: Url, client: Client) -> Result<Self, ApiClientError> {
        // Test here so that we are sure path_segments_mut succeeds
        if base.cannot_be_a_base() {
            Err(ApiClientError::CannotBeBase(base))
        } else {
            Ok(Self { base, client })
        }
    }

    pub const fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, ApiClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiClientError::CannotBeBase(self.base.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn classify_url(&self, modality: Modality) -> Result<Url, ApiClientError> {
        self.endpoint(["api", modality.model(), "classify"])
    }

    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn health_url(&self) -> Result<Url, ApiClientError> {
        self.endpoint(["api", "health"])
    }

    /// Each `/`-separated part of `path` becomes its own, percent-encoded,
    /// segment under `samples/`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn sample_url(&self, path: &str) -> Result<Url, ApiClientError> {
        self.endpoint(
            std::iter::once("samples").chain(path.split('/').filter(|s| !s.is_empty())),
        )
    }

    /// Classifies an image against candidate labels with CLIP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Rejected`] carrying the server's `detail`
    /// when the request is refused, and the transport error as is on
    /// network or decoding failure.
    pub async fn classify_image(
        &self,
        image: NamedFile,
        labels: &[String],
    ) -> Result<ClassificationResult, ApiClientError> {
        self.classify(Modality::Image, image, labels).await
    }

    /// Classifies an audio clip against candidate labels with CLAP.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::classify_image`].
    pub async fn classify_audio(
        &self,
        audio: NamedFile,
        labels: &[String],
    ) -> Result<ClassificationResult, ApiClientError> {
        self.classify(Modality::Audio, audio, labels).await
    }

    /// # Errors
    ///
    /// Same as [`ApiClient::classify_image`].
    pub async fn classify(
        &self,
        modality: Modality,
        file: NamedFile,
        labels: &[String],
    ) -> Result<ClassificationResult, ApiClientError> {
        let body = classification_form(modality, file, labels)?;
        let url = self.classify_url(modality)?;
        log::debug!(
            "Submitting {modality} with {} labels to {url}",
            labels.len()
        );

        let response = self.client.post(url.clone()).multipart(body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error = ErrorBody::new(response.json::<Value>().await?);
            log::debug!("{url} returned {status}: {error:?}");
            return Err(ApiClientError::Rejected {
                status,
                detail: error.message(),
            });
        }

        Ok(ClassificationResult::new(response.json::<Value>().await?))
    }

    /// Queries service health.
    ///
    /// The body is decoded whatever the status code: a failing server that
    /// still answers with JSON yields that JSON, not an error.
    ///
    /// # Errors
    ///
    /// Will return `Err` on network failure or if the body isn't JSON.
    pub async fn check_health(&self) -> Result<HealthStatus, ApiClientError> {
        let url = self.health_url()?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{url} returned {status}, reporting its body anyway");
        }

        let body = response.json::<Value>().await?;
        log::debug!("Health response: {body}");
        Ok(HealthStatus::new(body))
    }

    /// Downloads one of the server's sample files, e.g. `audio/dog_bark.wav`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::SampleUnavailable`] naming `path` on a
    /// non-success status, or the transport error on network failure.
    pub async fn fetch_sample_file(&self, path: &str) -> Result<NamedFile, ApiClientError> {
        let url = self.sample_url(path)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ApiClientError::SampleUnavailable {
                path: path.to_owned(),
                status: response.status(),
            });
        }

        let content_type = declared_content_type(&response);
        let bytes = response.bytes().await?;
        log::debug!("Fetched sample {path}: {} bytes", bytes.len());

        let file = NamedFile::new(file_name_from_path(path), bytes.to_vec());
        Ok(match content_type {
            Some(content_type) => file.with_content_type(content_type),
            None => file,
        })
    }
}

fn declared_content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Two fields, in order: the payload under the modality's field name,
/// then `labels` as a JSON array.
fn classification_form(
    modality: Modality,
    file: NamedFile,
    labels: &[String],
) -> Result<Form, ApiClientError> {
    let (name, bytes, content_type) = file.into_parts();

    let mut part = Part::bytes(bytes).file_name(name);
    if let Some(content_type) = content_type {
        part = part.mime_str(&content_type)?;
    }

    Ok(Form::new()
        .percent_encode_noop()
        .part(modality.field_name(), part)
        .text("labels", serde_json::to_string(labels)?))
}
