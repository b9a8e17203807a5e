pub mod builder;
pub mod detection;
pub mod recognition;
pub mod verification;

use crate::api::ApiConfig;
use reqwest::header::HeaderMap;

/// Configuration access shared by the three facades.
///
/// A facade only owns its configuration; requests already in flight keep the
/// configuration they were built with.
pub trait CompreFaceService {
    fn api_config(&self) -> &ApiConfig;

    fn api_config_mut(&mut self) -> &mut ApiConfig;

    /// Replaces base URL and API key. A single trailing `/` is stripped.
    fn update_config<U: AsRef<str>, K: Into<String>>(&mut self, base_url: U, api_key: K) {
        self.api_config_mut().update(base_url, api_key);
    }

    /// Headers sent with every later request. `x-api-key` and `Content-Type`
    /// are never taken from here.
    fn with_headers(mut self, headers: HeaderMap) -> Self
    where
        Self: Sized,
    {
        self.api_config_mut().default_headers.extend(headers);
        self
    }

    fn api_key(&self) -> &str {
        self.api_config().exposed_api_key()
    }

    fn base_url(&self) -> &str {
        &self.api_config().base_url
    }

    /// `base_url + path`, no request is made.
    fn full_url(&self, path: &str) -> String {
        self.api_config().url(path)
    }
}
