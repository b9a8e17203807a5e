use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional analysis modules run by CompreFace next to detection.
///
/// Output for a plugin is only present in responses when it was requested.
/// See <https://github.com/exadel-inc/CompreFace/blob/master/docs/Face-services-and-plugins.md#face-plugins>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacePlugin {
    Age,
    Gender,
    Landmarks,
    /// Embedding calculator; adds `embedding` to each face.
    Calculator,
    Pose,
    Mask,
    #[serde(rename = "landmarks2d106")]
    Landmarks2d106,
}

impl FacePlugin {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacePlugin::Age => "age",
            FacePlugin::Gender => "gender",
            FacePlugin::Landmarks => "landmarks",
            FacePlugin::Calculator => "calculator",
            FacePlugin::Pose => "pose",
            FacePlugin::Mask => "mask",
            FacePlugin::Landmarks2d106 => "landmarks2d106",
        }
    }
}

impl fmt::Display for FacePlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
