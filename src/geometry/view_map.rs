//! Projection of canonical rectangles onto a destination view.
//!
//! A canonical rectangle says where text sits inside the image; the view
//! mapper says where that is on screen once the image is fitted into a view
//! of some other aspect ratio. Fitting follows the usual contain/cover
//! policies with centered letterboxing.

use serde::{Deserialize, Serialize};

use crate::geometry::rect::Rect;

/// Pixel dimensions of an image as actually displayed (orientation applied).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub display_width: f64,
    pub display_height: f64,
}

impl ImageDescriptor {
    #[inline]
    #[must_use]
    pub fn new(display_width: f64, display_height: f64) -> Self {
        Self {
            display_width,
            display_height,
        }
    }

    /// Whether the dimensions are usable for mapping.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.display_width.is_finite()
            && self.display_height.is_finite()
            && self.display_width > 0.0
            && self.display_height > 0.0
    }
}

/// Pixel dimensions of the destination view.
///
/// Known only after the host view completes its first layout pass; callers
/// hold `Option<ViewDescriptor>` until then.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewDescriptor {
    pub width: f64,
    pub height: f64,
}

impl ViewDescriptor {
    #[inline]
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// How the image is fitted into the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Whole image visible; the view may letterbox.
    Contain,
    /// View fully filled; the image may crop and mapped rectangles may
    /// extend outside the view bounds.
    Cover,
}

/// A rectangle in destination view pixels, top-left origin.
///
/// Kept as a distinct type from [`Rect`] so that bottom-left canonical
/// coordinates and top-left view coordinates cannot be mixed up silently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewRect {
    #[inline]
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the rectangle lies fully inside a `view_w` x `view_h` view.
    #[must_use]
    pub fn is_inside(&self, view_w: f64, view_h: f64) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.left + self.width <= view_w
            && self.top + self.height <= view_h
    }
}

/// Scale factor and centering offsets for fitting `image` into `view`.
fn fit_transform(
    image: ImageDescriptor,
    view: ViewDescriptor,
    fit: FitMode,
) -> (f64, f64, f64, f64, f64) {
    let sx = view.width / image.display_width;
    let sy = view.height / image.display_height;
    let scale = match fit {
        FitMode::Contain => sx.min(sy),
        FitMode::Cover => sx.max(sy),
    };
    let disp_w = image.display_width * scale;
    let disp_h = image.display_height * scale;
    let offset_x = (view.width - disp_w) / 2.0;
    let offset_y = (view.height - disp_h) / 2.0;
    (scale, disp_w, disp_h, offset_x, offset_y)
}

/// Maps a canonical rectangle onto the destination view.
///
/// Returns `None` when either descriptor is not yet usable (zero-sized or
/// non-finite, e.g. before the first layout pass); mapping never produces a
/// degenerate rectangle in that case, callers simply skip rendering.
///
/// Under [`FitMode::Contain`] every valid canonical rectangle maps fully
/// inside `[0, view.width] x [0, view.height]`. Under [`FitMode::Cover`] the
/// result may extend outside the view and callers must clip.
#[must_use]
pub fn project(
    rect: Rect,
    image: ImageDescriptor,
    view: ViewDescriptor,
    fit: FitMode,
) -> Option<ViewRect> {
    if !image.is_valid() || !view.is_valid() {
        return None;
    }
    let (_, disp_w, disp_h, offset_x, offset_y) = fit_transform(image, view, fit);

    // Canonical rects are bottom-left origin; the view is top-left.
    let left = offset_x + rect.x * disp_w;
    let top = offset_y + (1.0 - rect.y - rect.height) * disp_h;
    Some(ViewRect::new(
        left,
        top,
        rect.width * disp_w,
        rect.height * disp_h,
    ))
}

/// Maps a view rectangle back to canonical coordinates.
///
/// Inverse of [`project`] under the same descriptors and fit mode; returns
/// `None` under the same preconditions.
#[must_use]
pub fn unproject(
    rect: ViewRect,
    image: ImageDescriptor,
    view: ViewDescriptor,
    fit: FitMode,
) -> Option<Rect> {
    if !image.is_valid() || !view.is_valid() {
        return None;
    }
    let (_, disp_w, disp_h, offset_x, offset_y) = fit_transform(image, view, fit);

    let width = rect.width / disp_w;
    let height = rect.height / disp_h;
    let x = (rect.left - offset_x) / disp_w;
    let y = 1.0 - (rect.top - offset_y) / disp_h - height;
    Some(Rect::new(x, y, width, height))
}
