// Internal modules
mod client;
mod config;
mod error;
mod url;

// Internal exports
pub(crate) use client::ApiClient;
pub(crate) use error::invalid_argument;

// Public exports
pub use config::{ApiConfig, ServiceConfigTrait, API_KEY_HEADER, COMPREFACE_URL_ENV_VAR, DEFAULT_BASE_URL};
pub use error::{ApiError, ClientError};
pub use url::normalize_base_url;
