use super::FaceRecognitionService;
use crate::{
    api::ClientError,
    requests::{
        encode_identifier, non_empty_identifier, single_image_body, FaceOptions, FaceOptionsTrait,
        ImageInput, PathBuilder, RequestBody,
    },
    responses::{VerifyByEmbeddingResponse, VerifyResponse},
    services::CompreFaceService,
};
use serde::Serialize;

/// Compare faces in an image with one saved example.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerifyOptions {
    pub face: FaceOptions,
}

impl VerifyOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn path(&self, image_id: &str) -> String {
        let builder = PathBuilder::new(format!(
            "/api/v1/recognition/faces/{}/verify",
            encode_identifier(image_id)
        ))
        .param("limit", self.face.limit_or_default())
        .param("status", self.face.status_or_default());
        self.face.append_optional(builder).build()
    }
}

impl FaceOptionsTrait for VerifyOptions {
    fn face_options_mut(&mut self) -> &mut FaceOptions {
        &mut self.face
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerifyByEmbeddingOptions {
    pub embeddings: Vec<Vec<f64>>,
}

impl VerifyByEmbeddingOptions {
    pub fn new(embeddings: Vec<Vec<f64>>) -> Self {
        Self { embeddings }
    }
}

fn verify_by_embedding_path(image_id: &str) -> String {
    format!(
        "/api/v1/recognition/embeddings/faces/{}/verify",
        encode_identifier(image_id)
    )
}

impl FaceRecognitionService {
    pub fn url_of_verify(&self, image_id: &str, options: &VerifyOptions) -> String {
        self.full_url(&options.path(image_id.trim()))
    }

    /// Compares the faces in `image` with the saved example `image_id`.
    pub async fn verify<S: AsRef<str>>(
        &self,
        image_id: S,
        image: ImageInput,
        options: VerifyOptions,
    ) -> Result<VerifyResponse, ClientError> {
        let image_id = non_empty_identifier("image id", image_id.as_ref())?;
        let body = single_image_body(&image)?;
        self.client.post(&options.path(image_id), body).await
    }

    /// Compares input embeddings with the embedding of the saved example `image_id`.
    pub async fn verify_by_embedding<S: AsRef<str>>(
        &self,
        image_id: S,
        options: VerifyByEmbeddingOptions,
    ) -> Result<VerifyByEmbeddingResponse, ClientError> {
        let image_id = non_empty_identifier("image id", image_id.as_ref())?;
        let body = RequestBody::json(&options)?;
        self.client
            .post(&verify_by_embedding_path(image_id), body)
            .await
    }
}
