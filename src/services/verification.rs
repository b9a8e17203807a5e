//! Face verification: compare the faces of two images, or two sets of
//! embeddings, without touching the Face Collection.

use crate::{
    api::{ApiClient, ApiConfig, ClientError},
    logging::LoggingConfig,
    requests::{two_image_body, FaceOptions, FaceOptionsTrait, ImageInput, PathBuilder, RequestBody},
    responses::{FaceVerificationByEmbeddingResponse, FaceVerificationResponse},
    services::CompreFaceService,
};
use serde::Serialize;

pub const VERIFICATION_PATH: &str = "/api/v1/verification/verify";
pub const VERIFICATION_BY_EMBEDDING_PATH: &str = "/api/v1/verification/embeddings/verify";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceVerificationOptions {
    pub face: FaceOptions,
    /// Defaults to `1`.
    pub prediction_count: Option<u32>,
}

impl FaceVerificationOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_prediction_count(mut self, prediction_count: u32) -> Self {
        self.prediction_count = Some(prediction_count);
        self
    }

    pub fn path(&self) -> String {
        let builder = PathBuilder::new(VERIFICATION_PATH)
            .param("limit", self.face.limit_or_default())
            .param("prediction_count", self.prediction_count.unwrap_or(1))
            .param("status", self.face.status_or_default());
        self.face.append_optional(builder).build()
    }
}

impl FaceOptionsTrait for FaceVerificationOptions {
    fn face_options_mut(&mut self) -> &mut FaceOptions {
        &mut self.face
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerificationByEmbeddingOptions {
    pub source: Vec<f64>,
    pub targets: Vec<Vec<f64>>,
}

impl VerificationByEmbeddingOptions {
    pub fn new(source: Vec<f64>, targets: Vec<Vec<f64>>) -> Self {
        Self { source, targets }
    }
}

/// Facade for `/api/v1/verification/*`, keyed with a verification service API key.
#[derive(Debug, Clone)]
pub struct FaceVerificationService {
    pub(crate) client: ApiClient,
    /// Keeps the logger installed by the builder alive.
    pub(crate) logging_config: LoggingConfig,
}

impl FaceVerificationService {
    pub fn new<U: AsRef<str>, K: Into<String>>(base_url: U, api_key: K) -> Self {
        Self::from_config(ApiConfig::new(base_url, api_key), LoggingConfig::default())
    }

    pub(crate) fn from_config(api_config: ApiConfig, logging_config: LoggingConfig) -> Self {
        Self {
            client: ApiClient::new(api_config),
            logging_config,
        }
    }

    pub fn url_of_verification(&self, options: &FaceVerificationOptions) -> String {
        self.full_url(&options.path())
    }

    /// Compares the faces of `source` with the faces of `target`.
    ///
    /// Both images must be the same kind, text or binary; a mix fails before
    /// any request is sent.
    pub async fn verify(
        &self,
        source: ImageInput,
        target: ImageInput,
        options: FaceVerificationOptions,
    ) -> Result<FaceVerificationResponse, ClientError> {
        let body = two_image_body(&source, &target)?;
        self.client.post(&options.path(), body).await
    }

    pub async fn verify_by_embedding(
        &self,
        options: VerificationByEmbeddingOptions,
    ) -> Result<FaceVerificationByEmbeddingResponse, ClientError> {
        let body = RequestBody::json(&options)?;
        self.client
            .post(VERIFICATION_BY_EMBEDDING_PATH, body)
            .await
    }
}

impl CompreFaceService for FaceVerificationService {
    fn api_config(&self) -> &ApiConfig {
        &self.client.config
    }

    fn api_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.client.config
    }
}
