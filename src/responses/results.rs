use super::{FaceResult, PluginsVersions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSimilarity {
    pub subject: String,
    pub similarity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedFace {
    #[serde(flatten)]
    pub face: FaceResult,
    /// Most similar subjects, best first, at most `prediction_count`
    #[serde(default)]
    pub subjects: Vec<SubjectSimilarity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizeResponse {
    pub result: Vec<RecognizedFace>,
    pub plugins_versions: Option<PluginsVersions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingSimilarities {
    /// The input embedding
    pub embedding: Vec<f64>,
    #[serde(default)]
    pub similarities: Vec<SubjectSimilarity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizeByEmbeddingResponse {
    pub result: Vec<EmbeddingSimilarities>,
}

/// A face compared against a reference face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedFace {
    #[serde(flatten)]
    pub face: FaceResult,
    pub similarity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub result: Vec<VerifiedFace>,
    pub plugins_versions: Option<PluginsVersions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingSimilarity {
    /// The input embedding
    pub embedding: Vec<f64>,
    pub similarity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyByEmbeddingResponse {
    pub result: Vec<EmbeddingSimilarity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectResponse {
    pub result: Vec<FaceResult>,
    pub plugins_versions: Option<PluginsVersions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceVerificationResult {
    pub source_image_face: FaceResult,
    pub face_matches: Vec<VerifiedFace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceVerificationResponse {
    pub result: Vec<FaceVerificationResult>,
    pub plugins_versions: Option<PluginsVersions>,
}

pub type FaceVerificationByEmbeddingResponse = VerifyByEmbeddingResponse;
