use super::{FacePlugin, PathBuilder};

/// Parameters shared by every endpoint that runs face detection.
///
/// `None` means "use the server default"; builders write the documented
/// default into the query anyway, except for `det_prob_threshold` and
/// empty plugin lists, which are left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceOptions {
    /// Maximum number of faces to process, biggest first. `0` is no limit.
    pub limit: Option<u32>,
    /// Minimum detection confidence, `0.0..=1.0`.
    pub det_prob_threshold: Option<f32>,
    pub face_plugins: Vec<FacePlugin>,
    /// Include execution times and plugin versions in the response.
    pub status: Option<bool>,
}

impl FaceOptions {
    pub(crate) fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(0)
    }

    pub(crate) fn status_or_default(&self) -> bool {
        self.status.unwrap_or(false)
    }

    /// Appends `det_prob_threshold` and `face_plugins` when set.
    pub(crate) fn append_optional(&self, builder: PathBuilder) -> PathBuilder {
        builder
            .opt_param("det_prob_threshold", self.det_prob_threshold)
            .face_plugins(&self.face_plugins)
    }
}

pub trait FaceOptionsTrait {
    fn face_options_mut(&mut self) -> &mut FaceOptions;

    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.face_options_mut().limit = Some(limit);
        self
    }

    fn with_det_prob_threshold(mut self, threshold: f32) -> Self
    where
        Self: Sized,
    {
        self.face_options_mut().det_prob_threshold = Some(threshold);
        self
    }

    fn with_face_plugins<I: IntoIterator<Item = FacePlugin>>(mut self, plugins: I) -> Self
    where
        Self: Sized,
    {
        self.face_options_mut().face_plugins = plugins.into_iter().collect();
        self
    }

    fn with_status(mut self, status: bool) -> Self
    where
        Self: Sized,
    {
        self.face_options_mut().status = Some(status);
        self
    }
}

impl FaceOptionsTrait for FaceOptions {
    fn face_options_mut(&mut self) -> &mut FaceOptions {
        self
    }
}
