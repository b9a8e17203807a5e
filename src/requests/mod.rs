mod image;
mod options;
mod path;
mod plugins;

pub use image::{FilePart, ImageInput, RequestBody};
pub use options::{FaceOptions, FaceOptionsTrait};
pub use plugins::FacePlugin;

pub(crate) use image::{single_image_body, two_image_body};
pub(crate) use path::{encode_identifier, non_empty_identifier, PathBuilder};
