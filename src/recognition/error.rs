use thiserror::Error;

/// Errors that can abort a recognition cycle.
///
/// An empty recognition result is not an error; it is a successful empty
/// block list. Each error aborts only the cycle that produced it.
#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("Could not load image: {message}")]
    InvalidImage { message: String },

    #[error("Backend failure: {message}")]
    BackendFailure { message: String },

    #[error("Unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    #[error("View geometry is not available yet")]
    UnavailableGeometry,

    #[error("Capture was superseded before the result arrived")]
    CaptureSuperseded,

    #[error("Translation failed: {message}")]
    TranslationFailure { message: String },
}
