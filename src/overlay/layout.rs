//! Render-instruction assembly.
//!
//! Once view geometry is known, recognized blocks become concrete overlay
//! instructions: a view rectangle, the text to draw, and a font size. Until
//! the host view has completed layout there is nothing sensible to draw, so
//! the builder reports "unavailable" and rendering is simply suppressed.

use serde::{Deserialize, Serialize};

use crate::geometry::{self, FitMode, ImageDescriptor, ViewDescriptor, ViewRect};
use crate::overlay::font::optimal_font_size;
use crate::recognition::{BlockId, RecognizedTextBlock};

/// One overlay ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayInstruction {
    /// Id of the source block.
    pub block: BlockId,
    /// Text to draw: the translation when present, the recognized text
    /// otherwise.
    pub text: String,
    /// Destination rectangle in view pixels, top-left origin.
    pub rect: ViewRect,
    /// Font size for the text, in `[8, 20]`.
    pub font_size: f64,
}

/// Builds overlay instructions for translated blocks.
///
/// Blocks without a (non-empty) translation are skipped: an overlay that
/// repeats the photographed text adds nothing. Returns `None` while either
/// descriptor is unknown — callers render nothing until layout resolves.
///
/// Under [`FitMode::Cover`] the produced rectangles may extend outside the
/// view; clipping is the renderer's job.
#[must_use]
pub fn build_overlays(
    blocks: &[RecognizedTextBlock],
    image: ImageDescriptor,
    view: Option<ViewDescriptor>,
    fit: FitMode,
) -> Option<Vec<OverlayInstruction>> {
    let view = view?;
    if !image.is_valid() || !view.is_valid() {
        return None;
    }

    let overlays = blocks
        .iter()
        .filter(|block| block.is_translated())
        .filter_map(|block| {
            let rect = geometry::project(block.bounding_box, image, view, fit)?;
            let text = block
                .translation
                .clone()
                .unwrap_or_else(|| block.text.clone());
            let font_size = optimal_font_size(&text, rect.width, rect.height);
            Some(OverlayInstruction {
                block: block.id,
                text,
                rect,
                font_size,
            })
        })
        .collect();
    Some(overlays)
}
