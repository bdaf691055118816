//! External engine interfaces.
//!
//! The OCR engines and the translator run out of process; the pipeline only
//! sees them through these traits. Engine calls suspend the caller until the
//! engine completes or errors; everything downstream of them is pure and
//! synchronous.

use thiserror::Error;

use crate::recognition::observation::RawObservation;
use crate::recognition::router::ScriptFamily;

/// Opaque reference to a source image, handed through to the engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(pub String);

impl ImageRef {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Errors reported by an engine or the translator.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Could not load image: {message}")]
    InvalidImage { message: String },

    /// Engine-reported failure; the message is passed through verbatim.
    #[error("{message}")]
    Failed { message: String },
}

/// The per-language OCR engine (the "native" backend).
///
/// Emits [`RawObservation::Canonical`] observations: unit-normalized,
/// bottom-left-origin rectangles in display space. Advertises the language
/// tags it supports natively; the router caches that list for the process
/// lifetime.
pub trait NativeTextEngine {
    /// The language tags this engine supports.
    ///
    /// Queried once per process and cached by the router.
    fn supported_languages(&self) -> Result<Vec<String>, EngineError>;

    /// Recognizes text in `image`, tuned to `languages`.
    ///
    /// An image without text resolves to an empty list, not an error.
    fn recognize(
        &self,
        image: &ImageRef,
        languages: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<RawObservation>, EngineError>> + Send;
}

/// The script-family OCR engine (the "script" backend).
///
/// Emits [`RawObservation::Oriented`] observations: raw pixel rectangles in
/// the image's undecoded space plus the orientation tag, with no per-line
/// confidence.
pub trait ScriptTextEngine {
    /// Recognizes text in `image` using the model for `family`.
    fn recognize(
        &self,
        image: &ImageRef,
        family: ScriptFamily,
    ) -> impl std::future::Future<Output = Result<Vec<RawObservation>, EngineError>> + Send;
}

/// The external translation service.
pub trait Translator {
    /// Translates `texts` from `source_lang` to `target_lang`.
    ///
    /// The result has the same length and order as `texts`; an empty string
    /// signals "not in the source language".
    fn translate(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, EngineError>> + Send;
}
