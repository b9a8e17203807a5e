use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgePlugin {
    pub probability: f32,
    pub high: u32,
    pub low: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderPlugin {
    pub probability: f32,
    pub value: Gender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosePlugin {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskStatus {
    WithoutMask,
    MaskWornIncorrectly,
    MaskWornCorrectly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskPlugin {
    pub probability: f32,
    pub value: MaskStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Detection confidence
    pub probability: f32,
    pub x_max: i32,
    pub y_max: i32,
    pub x_min: i32,
    pub y_min: i32,
}

/// Milliseconds spent per plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginsExecutionTime {
    pub age: Option<f64>,
    pub gender: Option<f64>,
    pub pose: Option<f64>,
    pub detector: Option<f64>,
    pub calculator: Option<f64>,
    pub mask: Option<f64>,
}

/// Returned with `status=true`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginsVersions {
    pub age: Option<String>,
    pub gender: Option<String>,
    pub pose: Option<String>,
    pub detector: Option<String>,
    pub calculator: Option<String>,
    pub mask: Option<String>,
}

/// One detected face. Plugin outputs are only present when the plugin was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceResult {
    #[serde(rename = "box")]
    pub bounding_box: BoundingBox,
    pub age: Option<AgePlugin>,
    pub gender: Option<GenderPlugin>,
    pub pose: Option<PosePlugin>,
    pub mask: Option<MaskPlugin>,
    /// Present with the `calculator` plugin.
    pub embedding: Option<Vec<f64>>,
    pub landmarks: Option<Vec<[f32; 2]>>,
    pub execution_time: Option<PluginsExecutionTime>,
}
