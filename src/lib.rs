//! compreface_client – typed async client for the CompreFace REST API
//! ===================================================================
//!
//! Three independent facades share one transport:
//!
//! | Facade                         | API key role  | Endpoints                          |
//! |--------------------------------|---------------|------------------------------------|
//! | [`FaceRecognitionService`]     | recognition   | subjects, examples, recognize, verify |
//! | [`FaceDetectionService`]       | detection     | detect                             |
//! | [`FaceVerificationService`]    | verification  | verify two images / embeddings     |
//!
//! Every operation is a single HTTP round trip. Failures never panic: they are
//! logged once and returned as [`ClientError`].
//!
//! ```rust,no_run
//! use compreface_client::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let recognition = CompreFace::recognition()
//!     .with_base_url("http://localhost:8000/")
//!     .with_api_key("00000000-0000-0000-0000-000000000002")
//!     .init()?;
//!
//! recognition.add_subject("Ada").await?;
//! recognition
//!     .add_example(
//!         "Ada",
//!         ImageInput::from_path("ada.jpg").await?,
//!         AddExampleOptions::new(),
//!     )
//!     .await?;
//!
//! let res = recognition
//!     .recognize(
//!         ImageInput::from_path("crowd.jpg").await?,
//!         RecognizeOptions::new().with_face_plugins([FacePlugin::Age, FacePlugin::Gender]),
//!     )
//!     .await?;
//! println!("{:#?}", res.result);
//! # Ok(())
//! # }
//! ```

#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod api;
pub mod logging;
pub mod requests;
pub mod responses;
pub mod services;

pub use api::{normalize_base_url, ApiConfig, ApiError, ClientError, ServiceConfigTrait};
pub use logging::{LoggingConfig, LoggingConfigTrait};
pub use requests::{FaceOptions, FaceOptionsTrait, FacePlugin, ImageInput};
pub use responses::*;
pub use services::{
    builder::{
        DetectionServiceBuilder, RecognitionServiceBuilder, ServiceConfig,
        VerificationServiceBuilder,
    },
    detection::{DetectOptions, FaceDetectionService},
    recognition::{
        examples::{AddExampleOptions, ListExamplesOptions},
        recognize::{RecognizeByEmbeddingOptions, RecognizeOptions},
        verify::{VerifyByEmbeddingOptions, VerifyOptions},
        FaceRecognitionService,
    },
    verification::{
        FaceVerificationOptions, FaceVerificationService, VerificationByEmbeddingOptions,
    },
    CompreFaceService,
};

pub struct CompreFace {}

impl CompreFace {
    pub fn recognition() -> RecognitionServiceBuilder {
        RecognitionServiceBuilder::default()
    }

    pub fn detection() -> DetectionServiceBuilder {
        DetectionServiceBuilder::default()
    }

    pub fn verification() -> VerificationServiceBuilder {
        VerificationServiceBuilder::default()
    }
}
