use super::{
    config::ApiConfig,
    error::{map_deserialization_error, map_serialization_error, ApiError, ClientError},
};
use crate::requests::RequestBody;
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Shared HTTP plumbing for the three facades.
///
/// One request per call: no retries, no timeouts. Every failure is logged
/// exactly once, here, before being returned.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    http_client: reqwest::Client,
    pub config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    /// Make a GET request to {path} and deserialize the response body
    pub(crate) async fn get<O>(&self, path: &str) -> Result<O, ClientError>
    where
        O: DeserializeOwned,
    {
        let res = self.execute(Method::GET, path, RequestBody::Empty).await;
        log_failure(&Method::GET, path, res)
    }

    /// Make a GET request to {path} and return the raw response body
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Bytes, ClientError> {
        let res = self.execute_raw(Method::GET, path, RequestBody::Empty).await;
        log_failure(&Method::GET, path, res)
    }

    /// Make a POST request to {path} and deserialize the response body
    pub(crate) async fn post<O>(&self, path: &str, body: RequestBody) -> Result<O, ClientError>
    where
        O: DeserializeOwned,
    {
        let res = self.execute(Method::POST, path, body).await;
        log_failure(&Method::POST, path, res)
    }

    /// Make a PUT request to {path} and deserialize the response body
    pub(crate) async fn put<O>(&self, path: &str, body: RequestBody) -> Result<O, ClientError>
    where
        O: DeserializeOwned,
    {
        let res = self.execute(Method::PUT, path, body).await;
        log_failure(&Method::PUT, path, res)
    }

    /// Make a DELETE request to {path} and deserialize the response body
    pub(crate) async fn delete<O>(&self, path: &str) -> Result<O, ClientError>
    where
        O: DeserializeOwned,
    {
        let res = self.execute(Method::DELETE, path, RequestBody::Empty).await;
        log_failure(&Method::DELETE, path, res)
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<reqwest::Request, ClientError> {
        let request_builder = self
            .http_client
            .request(method, self.config.url(path))
            .headers(self.config.request_headers()?);

        let request_builder = match body {
            RequestBody::Empty => request_builder,
            RequestBody::Json(value) => {
                let serialized_request =
                    serde_json::to_string(&value).map_err(map_serialization_error)?;
                crate::trace!("Serialized request: {}", serialized_request);
                request_builder
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(serialized_request)
            }
            RequestBody::Multipart(parts) => {
                crate::trace!(
                    "Multipart request: {:?}",
                    parts
                        .iter()
                        .map(|p| (p.field, p.filename.as_str(), p.bytes.len()))
                        .collect::<Vec<_>>()
                );
                let mut form = reqwest::multipart::Form::new();
                for part in parts {
                    form = form.part(
                        part.field,
                        reqwest::multipart::Part::bytes(part.bytes.to_vec())
                            .file_name(part.filename),
                    );
                }
                request_builder.multipart(form)
            }
        };
        Ok(request_builder.build()?)
    }

    /// Execute a HTTP request and return the body of a 2xx response
    async fn execute_raw(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Bytes, ClientError> {
        crate::trace!("{} {}", method, path);
        let request = self.build_request(method, path, body)?;
        let response = self.http_client.execute(request).await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::Remote {
                status: status.as_u16(),
                error: ApiError::from_body(status, bytes.as_ref()),
            });
        }

        Ok(bytes)
    }

    async fn execute<O>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<O, ClientError>
    where
        O: DeserializeOwned,
    {
        let bytes = self.execute_raw(method, path, body).await?;

        // Deserialize once into a generic Value
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| map_deserialization_error(e, &bytes))?;

        let pretty_json = serde_json::to_string_pretty(&value).map_err(map_serialization_error)?;
        crate::trace!("Serialized response: {}", pretty_json);

        // Convert the Value into the target type
        let response: O =
            serde_json::from_value(value).map_err(|e| map_deserialization_error(e, &bytes))?;

        Ok(response)
    }
}

fn log_failure<T>(method: &Method, path: &str, res: Result<T, ClientError>) -> Result<T, ClientError> {
    if let Err(e) = &res {
        crate::error!("CompreFace {} {} failed: {}", method, path, e);
    }
    res
}
