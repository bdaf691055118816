//! Conversion of display-pixel rectangles into the canonical unit form.
//!
//! Canonical rectangles are unit-normalized with a bottom-left origin; they
//! are the only rectangle form that crosses component boundaries. One OCR
//! backend emits canonical rectangles directly, so for it this module is the
//! identity (modulo clamping); the other reports top-left-origin display
//! pixels that need the flip and division performed here.

use crate::geometry::rect::Rect;

/// Converts a top-left-origin display-pixel rectangle into a canonical
/// rectangle, given the display dimensions.
///
/// The y axis is flipped to a bottom-left origin and all values are divided
/// through by the display dimensions, then clamped into the unit square.
///
/// Degenerate dimensions (zero, negative, non-finite) produce a zero rect
/// rather than NaN coordinates.
#[must_use]
pub fn to_canonical(r: Rect, display_w: f64, display_h: f64) -> Rect {
    if !(display_w.is_finite() && display_h.is_finite()) || display_w <= 0.0 || display_h <= 0.0 {
        return Rect::zero();
    }
    Rect::new(
        r.min_x() / display_w,
        (display_h - r.max_y()) / display_h,
        r.width / display_w,
        r.height / display_h,
    )
    .clamp_unit()
}

/// Converts a canonical rectangle back into top-left-origin display pixels.
///
/// Inverse of [`to_canonical`] for in-bounds input; used to cross-check the
/// normalization in tests.
#[must_use]
pub fn from_canonical(r: Rect, display_w: f64, display_h: f64) -> Rect {
    Rect::new(
        r.x * display_w,
        (1.0 - r.y - r.height) * display_h,
        r.width * display_w,
        r.height * display_h,
    )
}
