use super::{
    detection::FaceDetectionService, recognition::FaceRecognitionService,
    verification::FaceVerificationService,
};
use crate::{
    api::{ApiConfig, ServiceConfigTrait},
    logging::{LoggingConfig, LoggingConfigTrait},
};

pub const RECOGNITION_API_KEY_ENV_VAR: &str = "COMPREFACE_RECOGNITION_API_KEY";
pub const DETECTION_API_KEY_ENV_VAR: &str = "COMPREFACE_DETECTION_API_KEY";
pub const VERIFICATION_API_KEY_ENV_VAR: &str = "COMPREFACE_VERIFICATION_API_KEY";

/// Everything a facade needs before it can be initialized.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub api_config: ApiConfig,
    pub logging_config: LoggingConfig,
}

impl ServiceConfig {
    fn new(api_key_env_var: &str, logger_name: &str) -> Self {
        Self {
            api_config: ApiConfig {
                base_url: String::new(),
                api_key: None,
                api_key_env_var: api_key_env_var.to_string(),
                default_headers: Default::default(),
            },
            logging_config: LoggingConfig {
                logger_name: logger_name.to_string(),
                ..Default::default()
            },
        }
    }

    /// Resolves the base URL and API key from the builder or the environment,
    /// then installs the logger.
    pub(crate) fn load(mut self) -> crate::Result<(ApiConfig, LoggingConfig)> {
        self.logging_config.load_logger()?;
        self.api_config.base_url = self.api_config.load_base_url();
        self.api_config.api_key = Some(self.api_config.load_api_key()?);
        crate::debug!(
            "Configured {} for {}",
            self.logging_config.logger_name,
            self.api_config.base_url
        );
        Ok((self.api_config, self.logging_config))
    }
}

pub struct RecognitionServiceBuilder {
    pub config: ServiceConfig,
}

impl Default for RecognitionServiceBuilder {
    fn default() -> Self {
        Self {
            config: ServiceConfig::new(RECOGNITION_API_KEY_ENV_VAR, "compreface_recognition"),
        }
    }
}

impl RecognitionServiceBuilder {
    pub fn init(self) -> crate::Result<FaceRecognitionService> {
        let (api_config, logging_config) = self.config.load()?;
        Ok(FaceRecognitionService::from_config(api_config, logging_config))
    }
}

pub struct DetectionServiceBuilder {
    pub config: ServiceConfig,
}

impl Default for DetectionServiceBuilder {
    fn default() -> Self {
        Self {
            config: ServiceConfig::new(DETECTION_API_KEY_ENV_VAR, "compreface_detection"),
        }
    }
}

impl DetectionServiceBuilder {
    pub fn init(self) -> crate::Result<FaceDetectionService> {
        let (api_config, logging_config) = self.config.load()?;
        Ok(FaceDetectionService::from_config(api_config, logging_config))
    }
}

pub struct VerificationServiceBuilder {
    pub config: ServiceConfig,
}

impl Default for VerificationServiceBuilder {
    fn default() -> Self {
        Self {
            config: ServiceConfig::new(VERIFICATION_API_KEY_ENV_VAR, "compreface_verification"),
        }
    }
}

impl VerificationServiceBuilder {
    pub fn init(self) -> crate::Result<FaceVerificationService> {
        let (api_config, logging_config) = self.config.load()?;
        Ok(FaceVerificationService::from_config(api_config, logging_config))
    }
}

impl ServiceConfigTrait for RecognitionServiceBuilder {
    fn api_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.config.api_config
    }
}

impl ServiceConfigTrait for DetectionServiceBuilder {
    fn api_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.config.api_config
    }
}

impl ServiceConfigTrait for VerificationServiceBuilder {
    fn api_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.config.api_config
    }
}

impl LoggingConfigTrait for RecognitionServiceBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}

impl LoggingConfigTrait for DetectionServiceBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}

impl LoggingConfigTrait for VerificationServiceBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}
