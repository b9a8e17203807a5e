use super::FaceRecognitionService;
use crate::{
    api::ClientError,
    requests::{
        encode_identifier, non_empty_identifier, single_image_body, ImageInput, PathBuilder,
        RequestBody,
    },
    responses::{DeletedResponse, ExampleResponse, ListExamplesResponse},
    services::CompreFaceService,
};
use bytes::Bytes;

pub const FACES_PATH: &str = "/api/v1/recognition/faces";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddExampleOptions {
    /// Minimum detection confidence, `0.0..=1.0`.
    pub det_prob_threshold: Option<f32>,
}

impl AddExampleOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_det_prob_threshold(mut self, threshold: f32) -> Self {
        self.det_prob_threshold = Some(threshold);
        self
    }

    pub fn path(&self, subject: &str) -> String {
        PathBuilder::new(FACES_PATH)
            .param("subject", encode_identifier(subject))
            .opt_param("det_prob_threshold", self.det_prob_threshold)
            .build()
    }
}

/// Pagination over saved examples. Without a subject, examples of all
/// subjects are listed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListExamplesOptions {
    pub subject: Option<String>,
    /// Defaults to `0`.
    pub page: Option<u32>,
    /// Defaults to `20`.
    pub size: Option<u32>,
}

impl ListExamplesOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn path(&self) -> String {
        PathBuilder::new(FACES_PATH)
            .param("page", self.page.unwrap_or(0))
            .param("size", self.size.unwrap_or(20))
            .opt_param("subject", self.subject.as_deref().map(encode_identifier))
            .build()
    }
}

impl FaceRecognitionService {
    /// Full URL of an add-example request, for callers that upload themselves.
    pub fn url_of_add_example(&self, subject: &str, options: &AddExampleOptions) -> String {
        self.full_url(&options.path(subject))
    }

    /// Saves an image of `subject`. The image should contain exactly one face.
    pub async fn add_example<S: AsRef<str>>(
        &self,
        subject: S,
        image: ImageInput,
        options: AddExampleOptions,
    ) -> Result<ExampleResponse, ClientError> {
        let path = options.path(subject.as_ref());
        let body = single_image_body(&image)?;
        self.client.post(&path, body).await
    }

    pub async fn list_examples(
        &self,
        options: ListExamplesOptions,
    ) -> Result<ListExamplesResponse, ClientError> {
        self.client.get(&options.path()).await
    }

    pub async fn delete_examples_of_subject<S: AsRef<str>>(
        &self,
        subject: S,
    ) -> Result<DeletedResponse, ClientError> {
        let subject = non_empty_identifier("subject", subject.as_ref())?;
        let path = PathBuilder::new(FACES_PATH)
            .param("subject", encode_identifier(subject))
            .build();
        self.client.delete(&path).await
    }

    pub async fn delete_example<S: AsRef<str>>(
        &self,
        image_id: S,
    ) -> Result<ExampleResponse, ClientError> {
        let image_id = non_empty_identifier("image id", image_id.as_ref())?;
        let path = format!("{FACES_PATH}/{}", encode_identifier(image_id));
        self.client.delete(&path).await
    }

    /// Deletes several examples at once and returns the deleted ones.
    pub async fn delete_examples<S: AsRef<str>>(
        &self,
        image_ids: &[S],
    ) -> Result<Vec<ExampleResponse>, ClientError> {
        let ids: Vec<&str> = image_ids.iter().map(AsRef::as_ref).collect();
        let body = RequestBody::json(&ids)?;
        self.client
            .post(&format!("{FACES_PATH}/delete"), body)
            .await
    }

    /// Static image URL embedding the API key, usable directly as an image source.
    pub fn direct_image_url(&self, image_id: &str) -> String {
        self.full_url(&format!(
            "/api/v1/static/{}/images/{}",
            encode_identifier(self.api_key()),
            encode_identifier(image_id.trim())
        ))
    }

    /// Raw bytes of a saved example image.
    pub async fn download_example_image<S: AsRef<str>>(
        &self,
        image_id: S,
    ) -> Result<Bytes, ClientError> {
        let image_id = non_empty_identifier("image id", image_id.as_ref())?;
        let path = format!("{FACES_PATH}/{}/img", encode_identifier(image_id));
        self.client.get_bytes(&path).await
    }
}
