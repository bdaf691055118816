//! Recognized text block types.
//!
//! This module provides [`RecognizedTextBlock`], the pipeline's stable output
//! type, plus the identifiers that key results to their capture and their
//! translation.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Identifier of a single recognized block within a capture.
///
/// Translations are merged back through this id rather than by list
/// position, so a backend that reorders or filters blocks cannot silently
/// misassign translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub u64);

/// Identifier of a recognition cycle.
///
/// Each capture gets a fresh id; results arriving for a superseded capture
/// are discarded instead of overwriting newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureId(pub u64);

/// A recognized text region in canonical coordinates.
///
/// The block list for a capture is replaced wholesale per recognition cycle;
/// the only field mutated afterward is `translation`, keyed by [`BlockId`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedTextBlock {
    /// Identifier carried through the translation round trip.
    pub id: BlockId,
    /// Recognized text content.
    pub text: String,
    /// Recognition confidence in `[0, 1]`. The script-family backend does
    /// not report per-line confidence and always emits 0.
    pub confidence: f64,
    /// Canonical bounding rectangle: unit-normalized, bottom-left origin.
    pub bounding_box: Rect,
    /// Translated text, if a translation has been merged in. `None` also
    /// covers "not in source language".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    /// Language hints reported by the backend, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
}

impl RecognizedTextBlock {
    /// Whether a non-empty translation has been merged into this block.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        self.translation.as_deref().is_some_and(|t| !t.is_empty())
    }
}
