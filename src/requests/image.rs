use crate::api::{invalid_argument, ClientError};
use base64::Engine;
use bytes::Bytes;
use std::{fmt, path::Path};

/// An image sent to CompreFace.
///
/// The API takes two encodings: a JSON body for textual input (base64 or a
/// URL the server can fetch), and `multipart/form-data` for raw bytes. The
/// variant alone decides which one a request uses.
#[derive(Clone, PartialEq)]
pub enum ImageInput {
    /// Base64 image content or a remote reference.
    Text(String),
    /// Raw image bytes. Multipart parts need a non-empty file name.
    Binary { bytes: Bytes, filename: String },
}

impl ImageInput {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Base64-encodes raw bytes into the textual variant.
    pub fn base64<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self::Text(base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    pub fn binary<B: Into<Bytes>, S: Into<String>>(bytes: B, filename: S) -> Self {
        Self::Binary {
            bytes: bytes.into(),
            filename: filename.into(),
        }
    }

    /// Reads a file as binary input, named after the last path component.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::binary(bytes, filename))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<String> for ImageInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ImageInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl fmt::Debug for ImageInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f
                .debug_struct("Text")
                .field("len", &text.len())
                .finish(),
            Self::Binary { bytes, filename } => f
                .debug_struct("Binary")
                .field("filename", filename)
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

/// One file field of a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: &'static str,
    pub filename: String,
    pub bytes: Bytes,
}

/// A request body, before it is handed to the HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FilePart>),
}

impl RequestBody {
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, ClientError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(ClientError::JsonSerialize)
    }
}

fn file_part(field: &'static str, bytes: &Bytes, filename: &str) -> Result<FilePart, ClientError> {
    if filename.trim().is_empty() {
        return Err(invalid_argument(format!(
            "a file name is required for binary `{field}`"
        )));
    }
    Ok(FilePart {
        field,
        filename: filename.to_string(),
        bytes: bytes.clone(),
    })
}

/// `{"file": ...}` for text, a `file` part for bytes.
pub(crate) fn single_image_body(image: &ImageInput) -> Result<RequestBody, ClientError> {
    match image {
        ImageInput::Text(file) => Ok(RequestBody::Json(serde_json::json!({ "file": file }))),
        ImageInput::Binary { bytes, filename } => {
            Ok(RequestBody::Multipart(vec![file_part("file", bytes, filename)?]))
        }
    }
}

/// Both images must use the same encoding.
pub(crate) fn two_image_body(
    source: &ImageInput,
    target: &ImageInput,
) -> Result<RequestBody, ClientError> {
    match (source, target) {
        (ImageInput::Text(source), ImageInput::Text(target)) => Ok(RequestBody::Json(
            serde_json::json!({ "source_image": source, "target_image": target }),
        )),
        (
            ImageInput::Binary {
                bytes: source_bytes,
                filename: source_name,
            },
            ImageInput::Binary {
                bytes: target_bytes,
                filename: target_name,
            },
        ) => Ok(RequestBody::Multipart(vec![
            file_part("source_image", source_bytes, source_name)?,
            file_part("target_image", target_bytes, target_name)?,
        ])),
        _ => Err(invalid_argument(
            "source and target images must both be text or both be binary",
        )),
    }
}
