use super::FaceRecognitionService;
use crate::{
    api::ClientError,
    requests::{single_image_body, FaceOptions, FaceOptionsTrait, ImageInput, PathBuilder, RequestBody},
    responses::{RecognizeByEmbeddingResponse, RecognizeResponse},
    services::CompreFaceService,
};
use serde::Serialize;

pub const RECOGNIZE_PATH: &str = "/api/v1/recognition/recognize";
pub const RECOGNIZE_BY_EMBEDDING_PATH: &str = "/api/v1/recognition/embeddings/recognize";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognizeOptions {
    pub face: FaceOptions,
    /// Subjects returned per face, most similar first. Defaults to `1`.
    pub prediction_count: Option<u32>,
    /// With `false` the image is treated as an already cropped face and no
    /// detector runs. Defaults to `true`.
    pub detect_faces: Option<bool>,
}

impl RecognizeOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_prediction_count(mut self, prediction_count: u32) -> Self {
        self.prediction_count = Some(prediction_count);
        self
    }

    pub fn with_detect_faces(mut self, detect_faces: bool) -> Self {
        self.detect_faces = Some(detect_faces);
        self
    }

    pub fn path(&self) -> String {
        let builder = PathBuilder::new(RECOGNIZE_PATH)
            .param("limit", self.face.limit_or_default())
            .param("prediction_count", self.prediction_count.unwrap_or(1))
            .param("status", self.face.status_or_default())
            .param("detect_faces", self.detect_faces.unwrap_or(true));
        self.face.append_optional(builder).build()
    }
}

impl FaceOptionsTrait for RecognizeOptions {
    fn face_options_mut(&mut self) -> &mut FaceOptions {
        &mut self.face
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecognizeByEmbeddingOptions {
    /// Input embeddings; their length depends on the server's model (e.g. 512 or 128).
    pub embeddings: Vec<Vec<f64>>,
    /// Defaults to `1`.
    #[serde(skip)]
    pub prediction_count: Option<u32>,
}

impl RecognizeByEmbeddingOptions {
    pub fn new(embeddings: Vec<Vec<f64>>) -> Self {
        Self {
            embeddings,
            prediction_count: None,
        }
    }

    pub fn with_prediction_count(mut self, prediction_count: u32) -> Self {
        self.prediction_count = Some(prediction_count);
        self
    }

    pub fn path(&self) -> String {
        PathBuilder::new(RECOGNIZE_BY_EMBEDDING_PATH)
            .param("prediction_count", self.prediction_count.unwrap_or(1))
            .build()
    }
}

impl FaceRecognitionService {
    pub fn url_of_recognize(&self, options: &RecognizeOptions) -> String {
        self.full_url(&options.path())
    }

    /// Recognizes every face in `image` against the Face Collection.
    pub async fn recognize(
        &self,
        image: ImageInput,
        options: RecognizeOptions,
    ) -> Result<RecognizeResponse, ClientError> {
        let body = single_image_body(&image)?;
        self.client.post(&options.path(), body).await
    }

    /// Finds the subjects closest to each input embedding.
    pub async fn recognize_by_embedding(
        &self,
        options: RecognizeByEmbeddingOptions,
    ) -> Result<RecognizeByEmbeddingResponse, ClientError> {
        let body = RequestBody::json(&options)?;
        self.client.post(&options.path(), body).await
    }
}
