//! Image orientation tags and display-space rectangle rotation.
//!
//! An image file stores pixels in an "undecoded" orientation and carries a
//! tag describing how those pixels must be rotated (and possibly mirrored)
//! for display. Some OCR engines report rectangles against the undecoded
//! pixels, so their output has to be rotated into display space before it
//! can be normalized.

use serde::{Deserialize, Serialize};

use crate::geometry::rect::Rect;

/// The eight EXIF-style image orientations.
///
/// Only the four pure rotations have explicit rectangle transforms. The
/// mirrored variants currently fall back to the identity transform; whether
/// that is a latent defect for front-camera captures or an intentional
/// simplification (mirrored captures being corrected upstream) is an open
/// question, so the fallback is kept explicit and covered by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageOrientation {
    /// Displayed as stored (identity).
    Up,
    /// Rotated 180 degrees.
    Down,
    /// Rotated 90 degrees counter-clockwise for display.
    Left,
    /// Rotated 90 degrees clockwise for display.
    Right,
    /// Mirrored identity.
    UpMirrored,
    /// Mirrored 180 degree rotation.
    DownMirrored,
    /// Mirrored 90 degree counter-clockwise rotation.
    LeftMirrored,
    /// Mirrored 90 degree clockwise rotation.
    RightMirrored,
}

impl ImageOrientation {
    /// Parses the wire tag emitted by the OCR bridges.
    ///
    /// Unknown tags parse to `Up`, matching the bridges' own fallback.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            "upMirrored" => Self::UpMirrored,
            "downMirrored" => Self::DownMirrored,
            "leftMirrored" => Self::LeftMirrored,
            "rightMirrored" => Self::RightMirrored,
            _ => Self::Up,
        }
    }

    /// Whether display applies a quarter turn, swapping width and height.
    #[inline]
    #[must_use]
    pub fn is_rotated_90(self) -> bool {
        matches!(
            self,
            Self::Left | Self::LeftMirrored | Self::Right | Self::RightMirrored
        )
    }

    /// Display pixel dimensions for an image whose undecoded dimensions are
    /// `(width, height)`.
    #[inline]
    #[must_use]
    pub fn display_size(self, width: f64, height: f64) -> (f64, f64) {
        if self.is_rotated_90() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Rotates a rectangle from undecoded pixel space into display pixel
    /// space.
    ///
    /// `display_w`/`display_h` are the dimensions after orientation is
    /// applied (see [`ImageOrientation::display_size`]). Both input and
    /// output use a top-left origin. Mirrored variants fall back to the
    /// identity transform.
    #[must_use]
    pub fn rotate_to_display(self, r: Rect, display_w: f64, display_h: f64) -> Rect {
        match self {
            Self::Down => Rect::new(
                display_w - r.max_x(),
                display_h - r.max_y(),
                r.width,
                r.height,
            ),
            // 90 degrees clockwise
            Self::Right => Rect::new(display_h - r.max_y(), r.min_x(), r.height, r.width),
            // 90 degrees counter-clockwise
            Self::Left => Rect::new(r.min_y(), display_h - r.max_x(), r.height, r.width),
            _ => r,
        }
    }

    /// Rotates a display-space rectangle back into undecoded pixel space.
    ///
    /// Inverse of [`ImageOrientation::rotate_to_display`] for the four pure
    /// rotations: composing the two yields the original rectangle.
    #[must_use]
    pub fn rotate_from_display(self, r: Rect, display_w: f64, display_h: f64) -> Rect {
        match self {
            Self::Down => Rect::new(
                display_w - r.max_x(),
                display_h - r.max_y(),
                r.width,
                r.height,
            ),
            Self::Right => Rect::new(r.min_y(), display_h - r.max_x(), r.height, r.width),
            Self::Left => Rect::new(display_h - r.max_y(), r.min_x(), r.height, r.width),
            _ => r,
        }
    }
}

impl Default for ImageOrientation {
    fn default() -> Self {
        Self::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // Undecoded 400x300 image, quarter turns display as 300x400.
    fn display_dims(orientation: ImageOrientation) -> (f64, f64) {
        orientation.display_size(400.0, 300.0)
    }

    #[test]
    fn test_up_is_identity() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        let (w, h) = display_dims(ImageOrientation::Up);
        assert_eq!(ImageOrientation::Up.rotate_to_display(r, w, h), r);
    }

    #[test]
    fn test_down_flips_both_axes() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        let (w, h) = display_dims(ImageOrientation::Down);
        let rotated = ImageOrientation::Down.rotate_to_display(r, w, h);
        assert_eq!(rotated, Rect::new(360.0, 240.0, 30.0, 40.0));
    }

    #[test]
    fn test_right_quarter_turn_swaps_extent() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        let (w, h) = display_dims(ImageOrientation::Right);
        let rotated = ImageOrientation::Right.rotate_to_display(r, w, h);
        assert_eq!(rotated, Rect::new(340.0, 10.0, 40.0, 30.0));
    }

    #[test]
    fn test_left_quarter_turn_swaps_extent() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        let (w, h) = display_dims(ImageOrientation::Left);
        let rotated = ImageOrientation::Left.rotate_to_display(r, w, h);
        assert_eq!(rotated, Rect::new(20.0, 360.0, 40.0, 30.0));
    }

    #[test]
    fn test_rotation_composed_with_inverse_is_identity() {
        let cases = [
            ImageOrientation::Up,
            ImageOrientation::Down,
            ImageOrientation::Left,
            ImageOrientation::Right,
        ];
        let rects = [
            Rect::new(0.0, 0.0, 400.0, 300.0),
            Rect::new(13.5, 7.25, 120.0, 48.0),
            Rect::new(399.0, 299.0, 1.0, 1.0),
        ];
        for orientation in cases {
            let (w, h) = display_dims(orientation);
            for r in rects {
                let round_trip =
                    orientation.rotate_from_display(orientation.rotate_to_display(r, w, h), w, h);
                assert!(
                    round_trip.approx_eq(&r, EPS),
                    "{orientation:?}: {round_trip:?} != {r:?}"
                );
            }
        }
    }

    #[test]
    fn test_mirrored_variants_fall_back_to_identity() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        for orientation in [
            ImageOrientation::UpMirrored,
            ImageOrientation::DownMirrored,
            ImageOrientation::LeftMirrored,
            ImageOrientation::RightMirrored,
        ] {
            let (w, h) = display_dims(orientation);
            assert_eq!(orientation.rotate_to_display(r, w, h), r);
            assert_eq!(orientation.rotate_from_display(r, w, h), r);
        }
    }

    #[test]
    fn test_from_tag_unknown_defaults_to_up() {
        assert_eq!(ImageOrientation::from_tag("sideways"), ImageOrientation::Up);
        assert_eq!(ImageOrientation::from_tag("down"), ImageOrientation::Down);
        assert_eq!(
            ImageOrientation::from_tag("leftMirrored"),
            ImageOrientation::LeftMirrored
        );
    }
}
