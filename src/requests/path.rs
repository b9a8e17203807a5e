use super::FacePlugin;
use crate::api::{invalid_argument, ClientError};
use std::fmt::Display;

/// Appends query parameters to an endpoint path in insertion order.
///
/// Values are written with `Display`; identifiers must be passed through
/// [`encode_identifier`] first.
#[derive(Debug, Clone)]
pub(crate) struct PathBuilder {
    path: String,
    has_query: bool,
}

impl PathBuilder {
    pub fn new<S: Into<String>>(path: S) -> Self {
        let path = path.into();
        let has_query = path.contains('?');
        Self { path, has_query }
    }

    pub fn param<V: Display>(mut self, key: &str, value: V) -> Self {
        self.path.push(if self.has_query { '&' } else { '?' });
        self.has_query = true;
        self.path.push_str(key);
        self.path.push('=');
        self.path.push_str(&value.to_string());
        self
    }

    /// Only appended when a value was provided.
    pub fn opt_param<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// `face_plugins=a,b,c`, only appended when at least one plugin is requested.
    pub fn face_plugins(self, plugins: &[FacePlugin]) -> Self {
        if plugins.is_empty() {
            return self;
        }
        let joined = plugins
            .iter()
            .map(FacePlugin::as_str)
            .collect::<Vec<_>>()
            .join(",");
        self.param("face_plugins", joined)
    }

    pub fn build(self) -> String {
        self.path
    }
}

/// Percent-encodes a subject name or image id for use in a path segment or
/// query value. Plain ASCII identifiers come back unchanged.
pub(crate) fn encode_identifier(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Trims `id` and rejects it when nothing is left.
pub(crate) fn non_empty_identifier<'a>(what: &str, id: &'a str) -> Result<&'a str, ClientError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(invalid_argument(format!("{what} cannot be empty")));
    }
    Ok(trimmed)
}
