//! Face recognition: the Face Collection (subjects and their examples),
//! recognition against it, and verification against a stored example.

pub mod examples;
pub mod recognize;
pub mod subjects;
pub mod verify;

use crate::{
    api::{ApiClient, ApiConfig},
    logging::LoggingConfig,
    services::CompreFaceService,
};

/// Facade for `/api/v1/recognition/*`, keyed with a recognition service API key.
#[derive(Debug, Clone)]
pub struct FaceRecognitionService {
    pub(crate) client: ApiClient,
    /// Keeps the logger installed by the builder alive.
    pub(crate) logging_config: LoggingConfig,
}

impl FaceRecognitionService {
    pub fn new<U: AsRef<str>, K: Into<String>>(base_url: U, api_key: K) -> Self {
        Self::from_config(ApiConfig::new(base_url, api_key), LoggingConfig::default())
    }

    pub(crate) fn from_config(api_config: ApiConfig, logging_config: LoggingConfig) -> Self {
        Self {
            client: ApiClient::new(api_config),
            logging_config,
        }
    }
}

impl CompreFaceService for FaceRecognitionService {
    fn api_config(&self) -> &ApiConfig {
        &self.client.config
    }

    fn api_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.client.config
    }
}
