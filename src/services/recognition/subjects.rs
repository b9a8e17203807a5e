use super::FaceRecognitionService;
use crate::{
    api::ClientError,
    requests::{encode_identifier, non_empty_identifier, RequestBody},
    responses::{DeletedResponse, RenameResponse, SubjectResponse, SubjectsResponse},
};

pub const SUBJECTS_PATH: &str = "/api/v1/recognition/subjects";

fn subject_body(subject: &str) -> RequestBody {
    RequestBody::Json(serde_json::json!({ "subject": subject }))
}

impl FaceRecognitionService {
    /// Creates a subject in the Face Collection.
    ///
    /// Optional: adding an example for an unknown subject creates it too.
    pub async fn add_subject<S: AsRef<str>>(
        &self,
        subject: S,
    ) -> Result<SubjectResponse, ClientError> {
        self.client
            .post(SUBJECTS_PATH, subject_body(subject.as_ref()))
            .await
    }

    /// Renames a subject. Renaming onto an existing subject merges the two:
    /// all examples move to `new_subject` and `old_subject` is removed.
    pub async fn rename_subject<O: AsRef<str>, N: AsRef<str>>(
        &self,
        old_subject: O,
        new_subject: N,
    ) -> Result<RenameResponse, ClientError> {
        let old_subject = non_empty_identifier("subject", old_subject.as_ref())?;
        let path = format!("{SUBJECTS_PATH}/{}", encode_identifier(old_subject));
        self.client
            .put(&path, subject_body(new_subject.as_ref()))
            .await
    }

    /// Deletes a subject and all of its examples.
    pub async fn delete_subject<S: AsRef<str>>(
        &self,
        subject: S,
    ) -> Result<SubjectResponse, ClientError> {
        let subject = non_empty_identifier("subject", subject.as_ref())?;
        let path = format!("{SUBJECTS_PATH}/{}", encode_identifier(subject));
        self.client.delete(&path).await
    }

    /// Deletes every subject and every saved example.
    pub async fn delete_all_subjects(&self) -> Result<DeletedResponse, ClientError> {
        self.client.delete(SUBJECTS_PATH).await
    }

    pub async fn list_subjects(&self) -> Result<SubjectsResponse, ClientError> {
        self.client.get(&format!("{SUBJECTS_PATH}/")).await
    }
}
