//! Face detection: boxes and plugin outputs, no Face Collection lookup.

use crate::{
    api::{ApiClient, ApiConfig, ClientError},
    logging::LoggingConfig,
    requests::{single_image_body, FaceOptions, FaceOptionsTrait, ImageInput, PathBuilder},
    responses::DetectResponse,
    services::CompreFaceService,
};

pub const DETECT_PATH: &str = "/api/v1/detection/detect";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectOptions {
    pub face: FaceOptions,
}

impl DetectOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn path(&self) -> String {
        let builder = PathBuilder::new(DETECT_PATH)
            .param("limit", self.face.limit_or_default())
            .param("status", self.face.status_or_default());
        self.face.append_optional(builder).build()
    }
}

impl FaceOptionsTrait for DetectOptions {
    fn face_options_mut(&mut self) -> &mut FaceOptions {
        &mut self.face
    }
}

/// Facade for `/api/v1/detection/*`, keyed with a detection service API key.
#[derive(Debug, Clone)]
pub struct FaceDetectionService {
    pub(crate) client: ApiClient,
    /// Keeps the logger installed by the builder alive.
    pub(crate) logging_config: LoggingConfig,
}

impl FaceDetectionService {
    pub fn new<U: AsRef<str>, K: Into<String>>(base_url: U, api_key: K) -> Self {
        Self::from_config(ApiConfig::new(base_url, api_key), LoggingConfig::default())
    }

    pub(crate) fn from_config(api_config: ApiConfig, logging_config: LoggingConfig) -> Self {
        Self {
            client: ApiClient::new(api_config),
            logging_config,
        }
    }

    pub fn url_of_detect(&self, options: &DetectOptions) -> String {
        self.full_url(&options.path())
    }

    pub async fn detect(
        &self,
        image: ImageInput,
        options: DetectOptions,
    ) -> Result<DetectResponse, ClientError> {
        let body = single_image_body(&image)?;
        self.client.post(&options.path(), body).await
    }
}

impl CompreFaceService for FaceDetectionService {
    fn api_config(&self) -> &ApiConfig {
        &self.client.config
    }

    fn api_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.client.config
    }
}
