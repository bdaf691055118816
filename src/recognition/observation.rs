//! Raw backend observations and their normalization into blocks.
//!
//! The two OCR backends report rectangles in different shapes: the native
//! engine emits canonical-unit rectangles directly, while the script-family
//! engine emits raw pixel rectangles against the image's undecoded
//! orientation, together with the orientation tag. Both are represented as a
//! tagged variant here so that backend identity never leaks past the
//! normalization step.

use serde::{Deserialize, Serialize};

use crate::geometry::{normalize, ImageOrientation, Rect};
use crate::recognition::block::{BlockId, RecognizedTextBlock};

/// A single observation as reported by a backend, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RawObservation {
    /// Native engine output: the bounding box is already canonical
    /// (unit-normalized, bottom-left origin). Normalization is the identity
    /// apart from clamping detector overshoot.
    Canonical {
        text: String,
        confidence: f64,
        bounding_box: Rect,
        #[serde(default)]
        languages: Vec<String>,
    },
    /// Script-family engine output: a top-left-origin rectangle in the
    /// image's undecoded pixel space, plus the orientation needed to rotate
    /// it into display space.
    Oriented {
        text: String,
        bounding_box: Rect,
        orientation: ImageOrientation,
        /// Undecoded pixel width of the source image.
        image_width: f64,
        /// Undecoded pixel height of the source image.
        image_height: f64,
        #[serde(default)]
        languages: Vec<String>,
    },
}

impl RawObservation {
    /// Normalizes the observation into a [`RecognizedTextBlock`].
    ///
    /// For `Oriented` observations the rectangle is first rotated into
    /// display pixel space, then unit-normalized against the display
    /// dimensions.
    #[must_use]
    pub fn into_block(self, id: BlockId) -> RecognizedTextBlock {
        match self {
            Self::Canonical {
                text,
                confidence,
                bounding_box,
                languages,
            } => RecognizedTextBlock {
                id,
                text,
                confidence: confidence.clamp(0.0, 1.0),
                bounding_box: bounding_box.clamp_unit(),
                translation: None,
                languages,
            },
            Self::Oriented {
                text,
                bounding_box,
                orientation,
                image_width,
                image_height,
                languages,
            } => {
                let (display_w, display_h) = orientation.display_size(image_width, image_height);
                let rotated = orientation.rotate_to_display(bounding_box, display_w, display_h);
                RecognizedTextBlock {
                    id,
                    text,
                    confidence: 0.0,
                    bounding_box: normalize::to_canonical(rotated, display_w, display_h),
                    translation: None,
                    languages,
                }
            }
        }
    }
}
