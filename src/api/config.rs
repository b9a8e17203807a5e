use super::{error::ClientError, url::normalize_base_url};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use secrecy::{ExposeSecret, Secret};

/// Header carrying the per-service API key.
pub const API_KEY_HEADER: &str = "x-api-key";
/// Fallback for the base URL when none was set on the builder.
pub const COMPREFACE_URL_ENV_VAR: &str = "COMPREFACE_URL";
/// Used when neither the builder nor the environment provides a base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Normalized base URL, never ending in a single `/`.
    pub base_url: String,
    pub api_key: Option<Secret<String>>,
    pub api_key_env_var: String,
    /// Sent with every request, next to `x-api-key`.
    pub default_headers: HeaderMap,
}

impl ApiConfig {
    pub fn new<U: AsRef<str>, K: Into<String>>(base_url: U, api_key: K) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            api_key: Some(Secret::new(api_key.into())),
            api_key_env_var: String::new(),
            default_headers: HeaderMap::new(),
        }
    }

    /// Replaces both values; the URL is normalized.
    pub fn update<U: AsRef<str>, K: Into<String>>(&mut self, base_url: U, api_key: K) {
        self.base_url = normalize_base_url(base_url.as_ref());
        self.api_key = Some(Secret::new(api_key.into()));
    }

    pub fn exposed_api_key(&self) -> &str {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .unwrap_or_default()
    }

    /// `base_url + path`, no network involved.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Headers of one request: the configured defaults plus the API key.
    ///
    /// `x-api-key` always carries the configured key and `Content-Type` is
    /// left to the request body, whatever the defaults say.
    pub fn request_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            headers.insert(name.clone(), value.clone());
        }
        headers.remove(CONTENT_TYPE);
        let api_key =
            HeaderValue::from_str(self.exposed_api_key()).map_err(|e| ClientError::InvalidHeader {
                name: API_KEY_HEADER.to_string(),
                reason: e.to_string(),
            })?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        Ok(headers)
    }

    pub(crate) fn load_api_key(&mut self) -> crate::Result<Secret<String>> {
        if let Some(api_key) = self.api_key.as_ref() {
            crate::trace!("Using api_key from parameter");
            return Ok(api_key.to_owned());
        }
        crate::trace!("api_key not set. Attempting to load from .env");
        dotenvy::dotenv().ok();

        match dotenvy::var(&self.api_key_env_var) {
            Ok(api_key) => {
                crate::trace!("Successfully loaded api_key from .env");
                Ok(Secret::new(api_key))
            }
            Err(_) => {
                crate::trace!(
                    "{} not found in dotenv, nor was it set manually",
                    self.api_key_env_var
                );
                crate::bail!(
                    "Failed to load api_key from parameter or {}",
                    self.api_key_env_var
                )
            }
        }
    }

    pub(crate) fn load_base_url(&mut self) -> String {
        if !self.base_url.is_empty() {
            return self.base_url.clone();
        }
        dotenvy::dotenv().ok();
        match dotenvy::var(COMPREFACE_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => normalize_base_url(url.trim()),
            _ => {
                crate::trace!("No base url configured, using {}", DEFAULT_BASE_URL);
                DEFAULT_BASE_URL.to_string()
            }
        }
    }
}

pub trait ServiceConfigTrait {
    fn api_config_mut(&mut self) -> &mut ApiConfig;

    fn api_config(&self) -> &ApiConfig;

    /// A single trailing `/` is stripped.
    fn with_base_url<S: AsRef<str>>(mut self, base_url: S) -> Self
    where
        Self: Sized,
    {
        self.api_config_mut().base_url = normalize_base_url(base_url.as_ref());
        self
    }

    fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self
    where
        Self: Sized,
    {
        self.api_config_mut().api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Headers sent with every request. Repeated calls add to the set; a name
    /// set twice keeps the last value.
    fn with_headers(mut self, headers: HeaderMap) -> Self
    where
        Self: Sized,
    {
        self.api_config_mut().default_headers.extend(headers);
        self
    }

    /// Set the environment variable name for the API key. Default is set per service.
    fn with_api_key_env_var<S: Into<String>>(mut self, api_key_env_var: S) -> Self
    where
        Self: Sized,
    {
        self.api_config_mut().api_key_env_var = api_key_env_var.into();
        self
    }
}
